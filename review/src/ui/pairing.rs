use alloc::format;

use log::info;

use super::flow::{ReviewFlow, TerminalEvents};
use crate::{
    chain::ScreenChain,
    screen::{Body, Screen},
    text::{fit, MESSAGE_MAX},
};

const LOG_TARGET: &str = "review::ui::pairing";

const TITLE: &str = "Confirm BLE Pairing";
const PROMPT: &str = "Confirm Authentication Value";

/// Single screen asking the user to compare the BLE passkey shown on the
/// host with `numcmp`.
pub fn ble_confirmation_flow(numcmp: u32) -> ReviewFlow {
    info!(target: LOG_TARGET, "Requesting BLE pairing confirmation");
    let message = format!("{}\n\n{:>24}", PROMPT, format!("{:06}", numcmp));
    let screen = Screen::new(TITLE, Body::Message(fit(&message, MESSAGE_MAX)));
    ReviewFlow::new(ScreenChain::single(screen), TerminalEvents::BLE_PAIRING)
}
