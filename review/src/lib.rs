#![no_std]

//! Transaction review for a hardware signer.
//!
//! Decides which outputs of a transaction the user has to look at, turns
//! each of them into one or more screens, threads those into a chain and
//! drives the Prev/Exit/Next navigation until the user accepts or declines.

extern crate alloc;

pub mod asset_resolver;
pub mod chain;
pub mod config;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod screen;
pub mod text;
pub mod types;
pub mod ui;

#[cfg(test)]
mod testing;

pub use chain::{ChainBuilder, NavigationCommand, ScreenChain};
pub use config::{Network, ReviewConfig};
pub use error::{ReviewError, ReviewResult};
pub use navigation::{Input, NavigationController, NavigationState, Outcome};
pub use screen::{Body, Button, Buttons, Destination, Detail, Screen};
pub use types::{
    AssetId, AssetInfo, AssetRegistry, MovementSummary, Output, OutputFlags, OutputInfo,
    Transaction, Value,
};
pub use ui::{
    ble_confirmation_flow, run_flow, ReviewEvent, ReviewFlow, TerminalEvents, TxReviewer,
};
