use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};
use core::{fmt, str::FromStr};

use log::warn;

use crate::{
    config::Network,
    error::{ReviewError, ReviewResult},
};

const LOG_TARGET: &str = "review::types::asset";

pub const ASSET_ID_SIZE: usize = 32;

// Registry assets carry at most 8 decimal places
pub const MAX_ASSET_PRECISION: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(pub [u8; ASSET_ID_SIZE]);

impl AssetId {
    pub const fn from_bytes(bytes: [u8; ASSET_ID_SIZE]) -> Self {
        AssetId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ASSET_ID_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for AssetId {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; ASSET_ID_SIZE];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|_| ReviewError::InvalidAssetId(s.to_string()))?;
        Ok(AssetId(bytes))
    }
}

/// Registry metadata for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInfo {
    ticker: String,
    precision: u8,
    issuer_domain: String,
}

impl AssetInfo {
    pub fn new(ticker: &str, precision: u8, issuer_domain: &str) -> ReviewResult<Self> {
        if precision > MAX_ASSET_PRECISION {
            return Err(ReviewError::InvalidPrecision {
                precision,
                max: MAX_ASSET_PRECISION,
            });
        }
        Ok(AssetInfo {
            ticker: ticker.to_string(),
            precision,
            issuer_domain: issuer_domain.to_string(),
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Decimal places, never above [`MAX_ASSET_PRECISION`].
    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn issuer_domain(&self) -> &str {
        &self.issuer_domain
    }
}

/// Read-only snapshot of known assets for the duration of one review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    entries: BTreeMap<AssetId, AssetInfo>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the network's hard-coded assets.
    pub fn builtin(network: Network) -> Self {
        let mut registry = Self::new();
        for asset in network.builtin_assets() {
            let entry = AssetId::from_str(asset.asset_id).and_then(|asset_id| {
                AssetInfo::new(asset.ticker, asset.precision, asset.issuer_domain)
                    .map(|info| (asset_id, info))
            });
            match entry {
                Ok((asset_id, info)) => registry.insert(asset_id, info),
                Err(err) => {
                    warn!(target: LOG_TARGET, "Skipping builtin asset for {}: {}", network, err)
                }
            }
        }
        registry
    }

    /// Hard-coded assets of `network` plus the given entries; explicit
    /// entries win over builtins.
    pub fn with_builtins<I>(network: Network, entries: I) -> Self
    where
        I: IntoIterator<Item = (AssetId, AssetInfo)>,
    {
        let mut registry = Self::builtin(network);
        registry.extend(entries);
        registry
    }

    pub fn insert(&mut self, asset_id: AssetId, info: AssetInfo) {
        self.entries.insert(asset_id, info);
    }

    pub fn get(&self, asset_id: &AssetId) -> Option<&AssetInfo> {
        self.entries.get(asset_id)
    }

    pub fn get_hex(&self, asset_id_hex: &str) -> ReviewResult<Option<&AssetInfo>> {
        let asset_id = AssetId::from_str(asset_id_hex)?;
        Ok(self.get(&asset_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<(AssetId, AssetInfo)> for AssetRegistry {
    fn extend<T: IntoIterator<Item = (AssetId, AssetInfo)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl FromIterator<(AssetId, AssetInfo)> for AssetRegistry {
    fn from_iter<T: IntoIterator<Item = (AssetId, AssetInfo)>>(iter: T) -> Self {
        AssetRegistry {
            entries: iter.into_iter().collect(),
        }
    }
}
