//! Review flows and the collaborators they talk to.
//!
//! The core never draws anything or derives addresses itself: rendering,
//! address derivation, user input, cancellation and publishing the result
//! are all behind the traits below, supplied by the embedding firmware.

use alloc::string::String;

use crate::{
    config::Network,
    navigation::Input,
    screen::Screen,
    types::BLINDING_KEY_SIZE,
};

pub mod flow;
pub mod pairing;
pub mod sequence;
pub mod tx_reviewer;

pub use flow::{run_flow, ReviewFlow, TerminalEvents};
pub use pairing::ble_confirmation_flow;
pub use tx_reviewer::TxReviewer;

/// Renders an abstract screen. Called every time the cursor moves.
pub trait Display {
    fn show(&mut self, screen: &Screen);
}

pub trait AddressDeriver {
    fn script_to_address(
        &self,
        network: Network,
        script: &[u8],
        blinding_key: Option<&[u8; BLINDING_KEY_SIZE]>,
    ) -> String;
}

/// Blocks until the next user (or system) input is available.
pub trait InputSource {
    fn next_input(&mut self) -> Input;
}

/// External cancellation, eg. an idle timeout or a power event.
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

/// Semantic results published when a flow ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    AcceptOutputs,
    Decline,
    AcceptSignature,
    CancelSignature,
    BleConfirm,
    BleDeny,
}

pub trait EventSink {
    fn publish(&mut self, event: ReviewEvent);
}

impl CancelSignal for core::sync::atomic::AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(core::sync::atomic::Ordering::Acquire)
    }
}
