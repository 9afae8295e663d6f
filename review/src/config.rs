use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use crate::error::ReviewError;

pub const DEFAULT_NATIVE_TICKER: &str = "BTC";

/// The chain a transaction under review belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
    Liquid,
    LiquidTestnet,
    LiquidRegtest,
}

/// Hard-coded registry entry for a network's own asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinAsset {
    pub asset_id: &'static str,
    pub ticker: &'static str,
    pub precision: u8,
    pub issuer_domain: &'static str,
}

const LIQUID_POLICY_ASSET: BuiltinAsset = BuiltinAsset {
    asset_id: "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eec381c526d",
    ticker: "L-BTC",
    precision: 8,
    issuer_domain: "Liquid Bitcoin",
};

const LIQUID_TESTNET_POLICY_ASSET: BuiltinAsset = BuiltinAsset {
    asset_id: "144c654344aa716d6f3abcc1ca90e5641e4e2a7f633bc09fe3baf64585819a49",
    ticker: "L-TEST",
    precision: 8,
    issuer_domain: "Liquid Testnet",
};

const LIQUID_REGTEST_POLICY_ASSET: BuiltinAsset = BuiltinAsset {
    asset_id: "5ac9f65c0efcc4775e0baec4ec03abdde22473cd3cf33c0419ca290e0751b225",
    ticker: "L-TEST",
    precision: 8,
    issuer_domain: "Liquid Regtest",
};

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "localtest",
            Network::Liquid => "liquid",
            Network::LiquidTestnet => "testnet-liquid",
            Network::LiquidRegtest => "localtest-liquid",
        }
    }

    #[inline]
    pub fn is_liquid(&self) -> bool {
        matches!(
            self,
            Network::Liquid | Network::LiquidTestnet | Network::LiquidRegtest
        )
    }

    fn policy_builtin(&self) -> Option<&'static BuiltinAsset> {
        match self {
            Network::Liquid => Some(&LIQUID_POLICY_ASSET),
            Network::LiquidTestnet => Some(&LIQUID_TESTNET_POLICY_ASSET),
            Network::LiquidRegtest => Some(&LIQUID_REGTEST_POLICY_ASSET),
            _ => None,
        }
    }

    /// Hex id of the chain's policy asset, `None` for single-asset chains.
    pub fn policy_asset(&self) -> Option<&'static str> {
        self.policy_builtin().map(|asset| asset.asset_id)
    }

    pub fn builtin_assets(&self) -> &'static [BuiltinAsset] {
        match self.policy_builtin() {
            Some(asset) => core::slice::from_ref(asset),
            None => &[],
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "localtest" => Ok(Network::Regtest),
            "liquid" => Ok(Network::Liquid),
            "testnet-liquid" => Ok(Network::LiquidTestnet),
            "localtest-liquid" => Ok(Network::LiquidRegtest),
            other => Err(ReviewError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Settings handed to every flow at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    pub network: Network,
    pub native_ticker: String,
}

impl ReviewConfig {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            native_ticker: DEFAULT_NATIVE_TICKER.to_string(),
        }
    }

    pub fn with_native_ticker(mut self, ticker: &str) -> Self {
        self.native_ticker = ticker.to_string();
        self
    }
}
