use alloc::{format, string::String};
use core::str::FromStr;

use log::debug;

use super::{
    flow::{ReviewFlow, TerminalEvents},
    sequence::ScreenSequence,
    AddressDeriver,
};
use crate::{
    chain::ScreenChain,
    config::ReviewConfig,
    error::{ReviewError, ReviewResult},
    filter::{check_alignment, select_outputs},
    screen::{Body, Destination, Screen},
    text::{
        fit, format_amount, FEE_MAX, LABEL_MAX, NATIVE_PRECISION, TITLE_MAX, WARNING_MAX,
    },
    types::{AssetId, AssetRegistry, MovementSummary, Output, OutputInfo, Transaction},
};

const LOG_TARGET: &str = "review::ui::tx_reviewer";

const SUMMARY_TITLE: &str = "Summary";
const SWAP_PROPOSAL_TITLE: &str = "Swap Proposal";
const COMPLETE_SWAP_TITLE: &str = "Complete Swap";
const RECEIVE_LABEL: &str = "Receive";
const SEND_LABEL: &str = "Send";

/// Builds the review flows for a transaction about to be signed.
pub struct TxReviewer<'a, A> {
    config: &'a ReviewConfig,
    addresses: &'a A,
}

impl<'a, A: AddressDeriver> TxReviewer<'a, A> {
    pub fn new(config: &'a ReviewConfig, addresses: &'a A) -> Self {
        TxReviewer { config, addresses }
    }

    fn destination(&self, output: &Output, info: Option<&OutputInfo>) -> Destination {
        if !output.has_script() {
            return Destination::Blank;
        }
        let blinding_key = info.and_then(OutputInfo::blinding_key);
        let address = self
            .addresses
            .script_to_address(self.config.network, &output.script, blinding_key);
        Destination::address(&address)
    }

    /// One screen per displayed output of a single-asset transaction.
    ///
    /// Scriptless outputs are shown, validated change is not. A blinded
    /// value gets the unblinding placeholder.
    pub fn review_outputs(
        &self,
        tx: &Transaction,
        infos: Option<&[OutputInfo]>,
    ) -> ReviewResult<ReviewFlow> {
        let selected = select_outputs(tx, infos, true)?;
        let mut sequence = ScreenSequence::new();

        for (n, &i) in selected.iter().enumerate() {
            let output = &tx.outputs[i];
            let info = infos.map(|infos| &infos[i]);
            let title = output_title(n, selected.len());
            let destination = self.destination(output, info);
            match output.value.explicit() {
                Some(satoshi) => sequence.push_output(
                    &title,
                    destination,
                    &format_amount(satoshi, NATIVE_PRECISION),
                    &self.config.native_ticker,
                    info.and_then(OutputInfo::warning),
                ),
                None => sequence.push_blinded_output(&title, destination),
            }
        }

        Ok(ReviewFlow::new(sequence.finish()?, TerminalEvents::OUTPUTS))
    }

    /// Review of a confidential transaction, one to three screens per
    /// displayed output. Fees (scriptless outputs) are not shown.
    pub fn review_confidential_outputs(
        &self,
        tx: &Transaction,
        infos: &[OutputInfo],
        registry: &AssetRegistry,
    ) -> ReviewResult<ReviewFlow> {
        let selected = select_outputs(tx, Some(infos), false)?;
        let mut sequence = ScreenSequence::new();

        for (n, &i) in selected.iter().enumerate() {
            let output = &tx.outputs[i];
            let info = &infos[i];
            let title = output_title(n, selected.len());
            let destination = self.destination(output, Some(info));
            let added = sequence.push_confidential_output(&title, destination, info, registry);
            debug!(target: LOG_TARGET, "Output {} reviewed on {} screens", i, added);
        }

        Ok(ReviewFlow::new(sequence.finish()?, TerminalEvents::OUTPUTS))
    }

    /// Summarised review of a swap: what the wallet receives, then what it
    /// sends.
    pub fn review_swap(
        &self,
        initial_proposal: bool,
        wallet_input_summary: &[MovementSummary],
        wallet_output_summary: &[MovementSummary],
        registry: &AssetRegistry,
    ) -> ReviewResult<ReviewFlow> {
        if wallet_output_summary.is_empty() {
            return Err(ReviewError::EmptySummary {
                direction: RECEIVE_LABEL,
            });
        }
        if wallet_input_summary.is_empty() {
            return Err(ReviewError::EmptySummary { direction: SEND_LABEL });
        }

        let title = if initial_proposal {
            SWAP_PROPOSAL_TITLE
        } else {
            COMPLETE_SWAP_TITLE
        };
        let mut sequence = ScreenSequence::new();
        push_summaries(&mut sequence, title, RECEIVE_LABEL, wallet_output_summary, registry);
        push_summaries(&mut sequence, title, SEND_LABEL, wallet_input_summary, registry);

        Ok(ReviewFlow::new(sequence.finish()?, TerminalEvents::OUTPUTS))
    }

    /// Final screen confirming the fee before signing.
    pub fn review_fee(&self, fee: u64, warning: Option<&str>) -> ReviewFlow {
        let fee = format_amount(fee, NATIVE_PRECISION);
        fee_flow(SUMMARY_TITLE, &fee, &self.config.native_ticker, warning)
    }

    /// Final fee confirmation of a confidential transaction, in units of the
    /// network's policy asset.
    ///
    /// The policy asset must be among the network's builtin assets and carry
    /// a ticker; anything else is a configuration error.
    pub fn review_confidential_fee(
        &self,
        title: &str,
        fee: u64,
        warning: Option<&str>,
    ) -> ReviewResult<ReviewFlow> {
        let network = self.config.network;
        let policy_asset = network
            .policy_asset()
            .ok_or(ReviewError::NoPolicyAsset { network })?;
        let asset_id = AssetId::from_str(policy_asset)?;

        let registry = AssetRegistry::builtin(network);
        let asset_info = registry
            .get(&asset_id)
            .ok_or_else(|| ReviewError::MissingPolicyAsset {
                asset_id: asset_id.to_hex(),
            })?;
        if asset_info.ticker().is_empty() {
            return Err(ReviewError::PolicyAssetWithoutTicker {
                asset_id: asset_id.to_hex(),
            });
        }

        let fee = format_amount(fee, asset_info.precision());
        Ok(fee_flow(title, &fee, asset_info.ticker(), warning))
    }

    /// Checks `infos` line up with `tx` without building anything.
    pub fn validate(&self, tx: &Transaction, infos: Option<&[OutputInfo]>) -> ReviewResult<()> {
        check_alignment(tx, infos)
    }
}

fn output_title(n: usize, total: usize) -> String {
    // 1 based indices for display purposes
    fit(&format!("Output {}/{}", n + 1, total), TITLE_MAX)
}

fn summary_label(direction: &str, n: usize, total: usize) -> String {
    if total == 1 {
        fit(direction, LABEL_MAX)
    } else {
        fit(&format!("{}  ({}/{})", direction, n + 1, total), LABEL_MAX)
    }
}

fn push_summaries(
    sequence: &mut ScreenSequence,
    title: &str,
    direction: &str,
    summaries: &[MovementSummary],
    registry: &AssetRegistry,
) {
    for (n, summary) in summaries.iter().enumerate() {
        let label = summary_label(direction, n, summaries.len());
        sequence.push_summary(title, &label, summary, registry);
    }
}

fn fee_flow(title: &str, fee: &str, ticker: &str, warning: Option<&str>) -> ReviewFlow {
    let screen = Screen::new(
        title,
        Body::Fee {
            fee: fit(&format!("{} {}", fee, ticker), FEE_MAX),
            warning: warning.map(|message| fit(message, WARNING_MAX)),
        },
    );
    ReviewFlow::new(ScreenChain::single(screen), TerminalEvents::SIGNATURE)
}
