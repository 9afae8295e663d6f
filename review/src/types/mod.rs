pub mod asset;
pub mod output;
pub mod output_info;
pub mod summary;

pub use asset::{AssetId, AssetInfo, AssetRegistry, ASSET_ID_SIZE, MAX_ASSET_PRECISION};
pub use output::{Output, Transaction, Value, COMMITMENT_SIZE};
pub use output_info::{OutputFlags, OutputInfo, BLINDING_KEY_SIZE};
pub use summary::MovementSummary;
