use alloc::{format, string::String};

use log::{info, warn};

use crate::{
    text::{fit, format_amount, AMOUNT_MAX, ASSET_MAX, TICKER_MAX},
    types::{AssetId, AssetRegistry},
};

const LOG_TARGET: &str = "review::asset_resolver";

/// Display strings for an asset amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTriple {
    /// Issuer and asset id
    pub asset_str: String,
    pub amount_str: String,
    pub ticker_str: String,
}

/// Looks `asset_id` up in `registry` and formats `value` for display.
///
/// Known assets are scaled by their registry precision; unknown assets are
/// shown in raw integer units with no ticker. The returned flag reports
/// whether registry data was found.
pub fn resolve(asset_id: &AssetId, value: u64, registry: &AssetRegistry) -> (DisplayTriple, bool) {
    let asset_id_hex = asset_id.to_hex();

    match registry.get(asset_id) {
        Some(asset_info) => {
            info!(target: LOG_TARGET, "Found asset data for asset-id: '{}'", asset_id_hex);
            let triple = DisplayTriple {
                asset_str: fit(
                    &format!("{} - {}", asset_info.issuer_domain(), asset_id_hex),
                    ASSET_MAX,
                ),
                amount_str: fit(&format_amount(value, asset_info.precision()), AMOUNT_MAX),
                ticker_str: fit(asset_info.ticker(), TICKER_MAX),
            };
            (triple, true)
        }
        None => {
            warn!(target: LOG_TARGET, "Asset data for asset-id: '{}' not found!", asset_id_hex);
            let triple = DisplayTriple {
                asset_str: fit(&format!("issuer unknown - {}", asset_id_hex), ASSET_MAX),
                amount_str: fit(&format_amount(value, 0), AMOUNT_MAX),
                ticker_str: String::new(),
            };
            (triple, false)
        }
    }
}
