//! Shared primitive types.
mod asset;
pub use asset::*;

mod call;
pub use call::*;

mod contracts;
pub use contracts::*;

mod deposit;
pub use deposit::*;

mod gas;
pub use gas::*;

mod nonce;
pub use nonce::*;

mod output;
pub use output::*;

mod settlement;
pub use settlement::*;

mod step;
pub use step::*;

mod tag;
pub use tag::*;
