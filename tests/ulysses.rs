#![allow(missing_docs)]

use alloy::{
    primitives::{Address, Bytes, U256, address, bytes, hex},
    sol_types::SolCall,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ulysses::{
    account::derive_virtual_account,
    action::{ActionBuilder, Erc20Approve, RawAction, VirtualAccountWithdraw, WrapNative},
    agents::{branch_bridge_agent, root_bridge_agent, root_router},
    chains::Deployments,
    codec::cd_decompress,
    config::{ChainConfig, DeploymentConfig, Network, RootDeployment},
    constants::{BASE_GAS_FALLBACK, BASE_GAS_MULTIPLE_ASSET, MAINNET_ROOT_CHAIN_ID},
    context::{ContextHandler, ContextParameters, WrapStrategy},
    planner::{MultiHopPlanner, PlanRequest},
    types::{
        GasParams, IBranchBridgeAgent, IVirtualAccount, MultipleAssets, NonceKind, NonceState,
        NonceTransition, OutputTokenParams, RouterTag, Settlement, SingleAsset,
    },
};

const USER: Address = address!("0xdABBbF2CC029CEafdc7597bc232Da6fEc4fa3934");
const USER_ACCOUNT: Address = address!("0x61feDa932A78Bd56C5d9f434C52aC8a93D74ff05");
const WETH: Address = address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1");
const POOL: Address = address!("0x5555555555555555555555555555555555555555");

fn setup() -> Deployments {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(
            EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy(),
        )
        .try_init();

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/assets/deployments.yaml");
    Deployments::new(DeploymentConfig::load_from_file(path).unwrap()).unwrap()
}

fn h_weth() -> SingleAsset {
    SingleAsset::new(
        address!("0x1111111111111111111111111111111111111111"),
        address!("0x2222222222222222222222222222222222222222"),
        U256::from(1_000),
        U256::from(1_000),
    )
}

#[test]
fn virtual_account_from_file() {
    let deployments = setup();
    assert_eq!(deployments.root(MAINNET_ROOT_CHAIN_ID).unwrap().network, Network::Mainnet);
    assert_eq!(
        derive_virtual_account(&deployments, USER, MAINNET_ROOT_CHAIN_ID).unwrap(),
        USER_ACCOUNT
    );
}

#[test]
fn substituted_tables() {
    let root_port = address!("0x000000000000000000000000000000000000dEaD");
    let config = DeploymentConfig::default()
        .with_root(
            1,
            RootDeployment {
                root_port,
                virtual_account_code: bytes!("6080604052"),
                root_bridge_agent: Address::with_last_byte(2),
                ..Default::default()
            },
        )
        .with_chain(1, ChainConfig { root_chain_id: 1, lz_chain_id: 101, ..Default::default() });
    let deployments = Deployments::new(config).unwrap();

    let account = derive_virtual_account(&deployments, USER, 1).unwrap();
    assert_eq!(account, deployments.root(1).unwrap().virtual_account_address(USER));
    assert_ne!(account, USER_ACCOUNT);
    assert!(derive_virtual_account(&deployments, USER, MAINNET_ROOT_CHAIN_ID).is_err());
}

/// Deposit on Base, swap on Arbitrum, settle on Optimism.
#[test]
fn branch_to_branch() {
    let deployments = setup();
    let output = OutputTokenParams {
        settlement_owner: USER,
        recipient: USER,
        output_token: address!("0x3333333333333333333333333333333333333333"),
        amount_out: U256::from(900),
        deposit_out: U256::from(900),
        dst_chain_id: 10,
        gas_params: GasParams::new(250_000, 0),
    };
    let handler = ContextHandler::new(
        deployments.clone(),
        ContextParameters {
            chain_id: 8453,
            use_virtual_account: true,
            user_account: Some(USER),
            value: Some(U256::from(10u64.pow(15))),
            gas_params: Some(GasParams::new(600_000, 250_000)),
            input_tokens: Some(h_weth().into()),
            output_tokens: Some(output.clone().into()),
            has_fallback_toggled: true,
        },
    );
    assert_eq!(handler.strategy().unwrap(), WrapStrategy::BranchSingleOutput);

    let built = ActionBuilder::new(handler)
        .add_action(Erc20Approve::new(WETH, POOL, U256::from(1_000)))
        .add_action(RawAction::new(POOL, hex!("128acb08").to_vec(), U256::ZERO))
        .build()
        .unwrap();
    assert_eq!(built.encoded.target, address!("0xA000000000000000000000000000000000008453"));
    assert_eq!(built.encoded.value, U256::from(10u64.pow(15)));

    let calldata = cd_decompress(&built.encoded.calldata).unwrap();
    let call = IBranchBridgeAgent::callOutSignedAndBridgeCall::abi_decode(&calldata).unwrap();
    assert_eq!(call._gParams, GasParams::new(600_000, 250_000));

    let payload = root_router::decode(&call._params).unwrap();
    assert_eq!(payload.tag(), RouterTag::SignedSingleOutput);
    let root_router::RouterPayload::SingleOutput { calls, dst_chain_id, output: params, .. } =
        payload
    else {
        panic!("unexpected payload");
    };
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].target, WETH);
    assert_eq!(dst_chain_id, 111);
    assert_eq!(params.amountOut, output.amount_out);

    // The relayer delivers the same router payload through both hops.
    let steps = MultiHopPlanner::new(
        deployments.clone(),
        PlanRequest {
            origin_chain_id: 8453,
            root_chain_id: MAINNET_ROOT_CHAIN_ID,
            dst_chain_id: Some(10),
            user: Some(USER),
            has_fallback_toggled: true,
            deposit_nonce: Some(41),
            settlement_nonce: Some(7),
            deposit: Some(
                MultipleAssets::from_iter([h_weth(), SingleAsset { h_token: POOL, ..h_weth() }])
                    .into(),
            ),
            settlement: Some(Settlement::Single(h_weth())),
            recipient: Some(USER),
            root_params: call._params.clone(),
            ..Default::default()
        }
        .with_default_agents(&deployments)
        .unwrap(),
    )
    .plan()
    .unwrap();

    assert_eq!(steps.len(), 3);
    assert_eq!(steps.iter().map(|step| step.chain_id).collect::<Vec<_>>(), [8453, 42161, 10]);
    assert_eq!(steps[1].calldata[0], 0x86);
    assert_eq!(steps[1].calldata[21], 2);
    assert_eq!(steps[1].base_gas, BASE_GAS_MULTIPLE_ASSET + BASE_GAS_FALLBACK);
    assert!(steps[1].calldata.ends_with(&call._params));
    assert_eq!(steps[2].to, deployments.branch_bridge_agent(10).unwrap());
}

#[test]
fn on_root_batch() {
    let deployments = setup();
    let handler = ContextHandler::new(
        deployments,
        ContextParameters {
            chain_id: MAINNET_ROOT_CHAIN_ID,
            use_virtual_account: true,
            user_account: Some(USER),
            ..Default::default()
        },
    );
    let built = ActionBuilder::new(handler)
        .add_action(WrapNative::new(WETH, U256::from(5)))
        .add_action(VirtualAccountWithdraw::Erc20 {
            account: USER_ACCOUNT,
            token: WETH,
            amount: U256::from(5),
        })
        .build()
        .unwrap();

    assert_eq!(built.encoded.target, USER_ACCOUNT);
    assert_eq!(built.encoded.value, U256::from(5));
    let call = IVirtualAccount::payableCallCall::abi_decode(&built.encoded.calldata).unwrap();
    assert_eq!(call.calls[0].value, U256::from(5));
    assert_eq!(call.calls[1].target, USER_ACCOUNT);
}

#[test]
fn recovery_encoders() {
    let failed = NonceState::Pending.next(NonceTransition::Fail).unwrap();
    let gas = GasParams::new(100_000, 0);

    let retry = branch_bridge_agent::retry_deposit(41, Bytes::new(), &gas).unwrap();
    assert_eq!(
        NonceTransition::Retry.selector(NonceKind::Deposit),
        Some(retry[..4].try_into().unwrap())
    );
    assert_eq!(failed.next(NonceTransition::Retry), Some(NonceState::Pending));

    let retrieve = branch_bridge_agent::retrieve_deposit(41, &gas).unwrap();
    assert_eq!(
        NonceTransition::Retrieve.selector(NonceKind::Deposit),
        Some(retrieve[..4].try_into().unwrap())
    );
    let redeemable = failed.next(NonceTransition::Retrieve).unwrap();

    let redeem = branch_bridge_agent::redeem_deposit(41, USER).unwrap();
    assert_eq!(
        NonceTransition::Redeem.selector(NonceKind::Deposit),
        Some(redeem[..4].try_into().unwrap())
    );
    assert!(redeemable.next(NonceTransition::Redeem).unwrap().is_terminal());

    let retry = root_bridge_agent::retry_settlement(7, USER, Bytes::new(), &gas, true).unwrap();
    assert_eq!(
        NonceTransition::Retry.selector(NonceKind::Settlement),
        Some(retry[..4].try_into().unwrap())
    );
}
