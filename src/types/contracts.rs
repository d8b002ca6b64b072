//! ABI of the Ulysses agents.
//!
//! Structs and interfaces live in a single `sol!` invocation so every function signature can
//! resolve the shared struct types.

use alloy::sol;

sol! {
    /// Gas settings for a cross-chain call.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct GasParams {
        /// Gas limit of the destination execution.
        uint256 gasLimit;
        /// Portion of `gasLimit` earmarked for the remote branch hop.
        uint256 remoteBranchExecutionGas;
    }

    /// A single asset deposit escrowed on a branch chain.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct DepositInput {
        /// The local hToken.
        address hToken;
        /// The underlying token.
        address token;
        /// Virtual amount credited on the root chain.
        uint256 amount;
        /// Amount of underlying actually escrowed.
        uint256 deposit;
    }

    /// A multiple asset deposit escrowed on a branch chain.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct DepositMultipleInput {
        address[] hTokens;
        address[] tokens;
        uint256[] amounts;
        uint256[] deposits;
    }

    /// A single asset settlement, expressed in root chain global tokens.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct SettlementInput {
        /// The global hToken on the root chain.
        address globalAddress;
        /// Amount released on the destination.
        uint256 amount;
        /// Amount of underlying released on the destination.
        uint256 deposit;
    }

    /// A multiple asset settlement, expressed in root chain global tokens.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct SettlementMultipleInput {
        address[] globalAddresses;
        uint256[] amounts;
        uint256[] deposits;
    }

    /// Single output settlement instruction decoded by the multicall root router.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct OutputParams {
        address settlementOwner;
        address recipient;
        address outputToken;
        uint256 amountOut;
        uint256 depositOut;
    }

    /// Multiple output settlement instruction decoded by the multicall root router.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct OutputMultipleParams {
        address settlementOwner;
        address recipient;
        address[] outputTokens;
        uint256[] amountsOut;
        uint256[] depositsOut;
    }

    /// A call without value, as executed by the multicall router and the Virtual Account.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct Call {
        address target;
        bytes callData;
    }

    /// A call forwarding native value, as executed by the Virtual Account.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct PayableCall {
        address target;
        bytes callData;
        uint256 value;
    }

    /// Branch chain bridge agent.
    #[derive(Debug)]
    interface IBranchBridgeAgent {
        function callOut(address _gasRefundee, bytes calldata _params, GasParams calldata _gParams)
            external
            payable;

        function callOutAndBridge(
            address _gasRefundee,
            bytes calldata _params,
            DepositInput memory _dParams,
            GasParams calldata _gParams
        ) external payable;

        function callOutAndBridgeMultiple(
            address _gasRefundee,
            bytes calldata _params,
            DepositMultipleInput memory _dParams,
            GasParams calldata _gParams
        ) external payable;

        function callOutSigned(bytes calldata _params, GasParams calldata _gParams)
            external
            payable;

        function callOutSignedAndBridge(
            bytes calldata _params,
            DepositInput memory _dParams,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;

        function callOutSignedAndBridgeMultiple(
            bytes calldata _params,
            DepositMultipleInput memory _dParams,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;

        function retryDeposit(
            uint32 _depositNonce,
            bytes calldata _params,
            GasParams calldata _gParams
        ) external payable;

        function retryDepositSigned(
            uint32 _depositNonce,
            bytes calldata _params,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;

        function retrieveDeposit(uint32 _depositNonce, GasParams calldata _gParams)
            external
            payable;

        function redeemDeposit(uint32 _depositNonce, address _recipient) external;

        function redeemDeposit(uint32 _depositNonce, address _recipient, address _localTokenAddress)
            external;

        function retrySettlement(
            uint32 _settlementNonce,
            bytes calldata _params,
            GasParams[2] calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;
    }

    /// Branch chain router, the user facing entry point in front of the branch bridge agent.
    #[derive(Debug)]
    interface IBranchRouter {
        function callOut(bytes calldata _params, GasParams calldata _gParams) external payable;

        function callOutAndBridge(
            bytes calldata _params,
            DepositInput calldata _dParams,
            GasParams calldata _gParams
        ) external payable;

        function callOutAndBridgeMultiple(
            bytes calldata _params,
            DepositMultipleInput calldata _dParams,
            GasParams calldata _gParams
        ) external payable;

        function addLocalToken(address _underlyingAddress, GasParams calldata _gParams)
            external
            payable;

        function addGlobalToken(
            address _globalAddress,
            uint256 _dstChainId,
            GasParams[3] calldata _gParams
        ) external payable;
    }

    /// Root chain bridge agent.
    #[derive(Debug)]
    interface IRootBridgeAgent {
        function callOut(
            address _gasRefundee,
            address _recipient,
            uint16 _dstChainId,
            bytes calldata _params,
            GasParams calldata _gParams
        ) external payable;

        function callOutAndBridge(
            address _settlementOwnerAndGasRefundee,
            address _recipient,
            uint16 _dstChainId,
            bytes calldata _params,
            SettlementInput calldata _sParams,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;

        function callOutAndBridgeMultiple(
            address _settlementOwnerAndGasRefundee,
            address _recipient,
            uint16 _dstChainId,
            bytes calldata _params,
            SettlementMultipleInput calldata _sParams,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;

        function retrySettlement(
            uint32 _settlementNonce,
            address _recipient,
            bytes calldata _params,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;

        function retrieveSettlement(uint32 _settlementNonce, GasParams calldata _gParams)
            external
            payable;

        function redeemSettlement(uint32 _settlementNonce, address _recipient) external;
    }

    /// Multicall root router.
    #[derive(Debug)]
    interface IMulticallRootRouter {
        function retrySettlement(
            uint32 _settlementNonce,
            address _recipient,
            bytes calldata _params,
            GasParams calldata _gParams,
            bool _hasFallbackToggled
        ) external payable;
    }

    /// Per user proxy account on the root chain.
    #[derive(Debug)]
    interface IVirtualAccount {
        function call(Call[] calldata calls) external returns (bytes[] memory returnData);

        function payableCall(PayableCall[] calldata calls)
            external
            payable
            returns (bytes[] memory returnData);

        function withdrawNative(uint256 _amount) external;

        function withdrawERC20(address _token, uint256 _amount) external;

        function withdrawERC721(address _token, uint256 _tokenId) external;
    }

    /// ERC20 subset used by the bundled actions.
    #[derive(Debug)]
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
    }

    /// Wrapped native currency.
    #[derive(Debug)]
    interface IWETH9 {
        function deposit() external payable;
        function withdraw(uint256 wad) external;
    }
}
