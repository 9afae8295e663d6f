use alloc::string::String;

use thiserror::Error;

use crate::config::Network;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("transaction has no outputs to review")]
    NoOutputs,
    #[error("output info is not index-aligned: {outputs} outputs, {infos} infos")]
    OutputInfoMismatch { outputs: usize, infos: usize },
    #[error("no {direction} summary entries to review")]
    EmptySummary { direction: &'static str },
    #[error("invalid asset id `{0}`")]
    InvalidAssetId(String),
    #[error("asset precision {precision} exceeds the maximum of {max}")]
    InvalidPrecision { precision: u8, max: u8 },
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),
    #[error("network {network} has no policy asset")]
    NoPolicyAsset { network: Network },
    #[error("policy asset {asset_id} missing from the asset registry")]
    MissingPolicyAsset { asset_id: String },
    #[error("policy asset {asset_id} has no ticker")]
    PolicyAssetWithoutTicker { asset_id: String },
    #[error("screen chain has no screens")]
    EmptyChain,
}

pub type ReviewResult<T> = Result<T, ReviewError>;
