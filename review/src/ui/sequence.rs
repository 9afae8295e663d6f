//! Builds the screens for each reviewed item and threads them into a chain.

use log::debug;

use crate::{
    asset_resolver::resolve,
    chain::{ChainBuilder, ScreenChain},
    error::ReviewResult,
    screen::{Destination, Detail, Screen},
    types::{AssetRegistry, MovementSummary, OutputInfo},
};

const LOG_TARGET: &str = "review::ui::sequence";

/// Shown when the registry has no data for an asset.
pub const MISSING_ASSET_DATA: &str =
    "Amounts may be expressed in the wrong units. Proceed at your own risk.";

/// Shown in place of an output whose amount and asset could not be recovered.
pub const BLINDED_OUTPUT: &str = "Output cannot be unblinded!";

pub const UNKNOWN_AMOUNT: &str = "????";
pub const UNKNOWN_TICKER: &str = "????";

#[derive(Debug, Default)]
pub struct ScreenSequence {
    chain: ChainBuilder,
}

impl ScreenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Single screen for an explicit-value output; any warning is shown on
    /// the same screen.
    pub fn push_output(
        &mut self,
        title: &str,
        destination: Destination,
        amount: &str,
        ticker: &str,
        warning: Option<&str>,
    ) {
        let detail = warning.map_or(Detail::None, Detail::warning);
        self.chain
            .push(Screen::movement(title, destination, amount, ticker, detail));
    }

    /// Placeholder for an output whose amount and asset are unknown.
    pub fn push_blinded_output(&mut self, title: &str, destination: Destination) {
        debug!(target: LOG_TARGET, "{}: no unblinded data, showing placeholder", title);
        self.chain.push(Screen::movement(
            title,
            destination,
            UNKNOWN_AMOUNT,
            UNKNOWN_TICKER,
            Detail::warning(BLINDED_OUTPUT),
        ));
    }

    /// Screens for one confidential output, in order: missing asset data
    /// warning, the output's own warning, then the output with its asset.
    ///
    /// An output that could not be unblinded gets a single placeholder
    /// screen instead. Returns the number of screens added.
    pub fn push_confidential_output(
        &mut self,
        title: &str,
        destination: Destination,
        info: &OutputInfo,
        registry: &AssetRegistry,
    ) -> usize {
        let Some((asset_id, value)) = info.unblinded() else {
            self.push_blinded_output(title, destination);
            return 1;
        };

        let (triple, found) = resolve(asset_id, value, registry);
        let mut added = 0;

        if !found {
            self.chain.push(Screen::movement(
                title,
                destination.clone(),
                &triple.amount_str,
                &triple.ticker_str,
                Detail::warning(MISSING_ASSET_DATA),
            ));
            added += 1;
        }

        if let Some(message) = info.warning() {
            self.chain.push(Screen::movement(
                title,
                destination.clone(),
                &triple.amount_str,
                &triple.ticker_str,
                Detail::warning(message),
            ));
            added += 1;
        }

        self.chain.push(Screen::movement(
            title,
            destination,
            &triple.amount_str,
            &triple.ticker_str,
            Detail::asset(&triple.asset_str),
        ));
        added + 1
    }

    /// Screens for one swap summary entry: missing asset data warning if
    /// needed, then the entry itself.
    pub fn push_summary(
        &mut self,
        title: &str,
        label: &str,
        summary: &MovementSummary,
        registry: &AssetRegistry,
    ) -> usize {
        let (triple, found) = resolve(&summary.asset_id, summary.value, registry);
        let mut added = 0;

        if !found {
            self.chain.push(Screen::movement(
                title,
                Destination::label(label),
                &triple.amount_str,
                &triple.ticker_str,
                Detail::warning(MISSING_ASSET_DATA),
            ));
            added += 1;
        }

        self.chain.push(Screen::movement(
            title,
            Destination::label(label),
            &triple.amount_str,
            &triple.ticker_str,
            Detail::asset(&triple.asset_str),
        ));
        added + 1
    }

    pub fn finish(self) -> ReviewResult<ScreenChain> {
        debug!(target: LOG_TARGET, "Built chain of {} screens", self.chain.len());
        self.chain.finish()
    }
}
