use super::AssetId;

/// Net amount of one asset moving in or out of the wallet, as summarised
/// for a swap review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementSummary {
    pub asset_id: AssetId,
    pub value: u64,
}

impl MovementSummary {
    pub fn new(asset_id: AssetId, value: u64) -> Self {
        Self { asset_id, value }
    }
}
