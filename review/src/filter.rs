//! Which transaction outputs deserve a review screen.

use alloc::vec::Vec;

use log::debug;

use crate::{
    error::{ReviewError, ReviewResult},
    types::{Output, OutputInfo, Transaction},
};

const LOG_TARGET: &str = "review::filter";

/// Decides whether a single output is shown to the user.
///
/// Scriptless outputs (fees) are hidden unless `show_scriptless` is set, an
/// output with a warning message is always shown, and change the wallet has
/// already validated is hidden.
pub fn is_displayable(output: &Output, info: Option<&OutputInfo>, show_scriptless: bool) -> bool {
    if !show_scriptless && !output.has_script() {
        return false;
    }

    if let Some(info) = info {
        if info.warning().is_some() {
            return true;
        }
        if info.is_validated_change() {
            return false;
        }
    }

    true
}

/// Number of outputs passing [`is_displayable`], without any fallback.
pub fn count_displayable(
    tx: &Transaction,
    infos: Option<&[OutputInfo]>,
    show_scriptless: bool,
) -> usize {
    tx.outputs
        .iter()
        .enumerate()
        .filter(|(i, output)| is_displayable(output, info_at(infos, *i), show_scriptless))
        .count()
}

/// Indices of the outputs to review, in transaction order.
///
/// When the policy would hide every output, all outputs are shown instead.
pub fn select_outputs(
    tx: &Transaction,
    infos: Option<&[OutputInfo]>,
    show_scriptless: bool,
) -> ReviewResult<Vec<usize>> {
    check_alignment(tx, infos)?;

    let selected: Vec<usize> = (0..tx.num_outputs())
        .filter(|&i| is_displayable(&tx.outputs[i], info_at(infos, i), show_scriptless))
        .collect();

    if selected.is_empty() {
        debug!(target: LOG_TARGET, "All {} outputs filtered, showing all", tx.num_outputs());
        return Ok((0..tx.num_outputs()).collect());
    }
    debug!(
        target: LOG_TARGET,
        "Showing {} of {} outputs",
        selected.len(),
        tx.num_outputs()
    );
    Ok(selected)
}

pub(crate) fn check_alignment(tx: &Transaction, infos: Option<&[OutputInfo]>) -> ReviewResult<()> {
    if tx.outputs.is_empty() {
        return Err(ReviewError::NoOutputs);
    }
    match infos {
        Some(infos) if infos.len() != tx.num_outputs() => Err(ReviewError::OutputInfoMismatch {
            outputs: tx.num_outputs(),
            infos: infos.len(),
        }),
        _ => Ok(()),
    }
}

#[inline]
fn info_at(infos: Option<&[OutputInfo]>, index: usize) -> Option<&OutputInfo> {
    infos.and_then(|infos| infos.get(index))
}
