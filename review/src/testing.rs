//! Collaborator fakes shared by the unit tests.

use alloc::{
    collections::VecDeque,
    format,
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{
    config::Network,
    navigation::Input,
    screen::Screen,
    types::BLINDING_KEY_SIZE,
    ui::{AddressDeriver, Display, EventSink, InputSource, ReviewEvent},
};

/// Derives a fake but deterministic address from the script bytes.
#[derive(Debug, Default)]
pub struct FakeAddresses;

impl AddressDeriver for FakeAddresses {
    fn script_to_address(
        &self,
        network: Network,
        script: &[u8],
        blinding_key: Option<&[u8; BLINDING_KEY_SIZE]>,
    ) -> String {
        let prefix = if blinding_key.is_some() { "ct" } else { "addr" };
        format!("{}:{}:{}", prefix, network, hex::encode(script))
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub shown: Vec<Screen>,
}

impl RecordingDisplay {
    pub fn titles(&self) -> Vec<String> {
        self.shown.iter().map(|screen| screen.title.clone()).collect()
    }
}

impl Display for RecordingDisplay {
    fn show(&mut self, screen: &Screen) {
        self.shown.push(screen.clone());
    }
}

/// Replays a fixed list of inputs, then cancels.
#[derive(Debug)]
pub struct ScriptedInput {
    inputs: VecDeque<Input>,
    delivered: usize,
    cancel_after: Option<usize>,
    cancel: Arc<AtomicBool>,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<Input>) -> Self {
        ScriptedInput {
            inputs: inputs.into(),
            delivered: 0,
            cancel_after: None,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raises the cancellation flag once `count` inputs have been delivered.
    pub fn cancel_after(mut self, count: usize) -> Self {
        self.cancel_after = Some(count);
        self
    }

    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> Input {
        let input = self.inputs.pop_front().unwrap_or(Input::Cancel);
        self.delivered += 1;
        if self.cancel_after == Some(self.delivered) {
            self.cancel.store(true, Ordering::Release);
        }
        input
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<ReviewEvent>,
}

impl EventSink for RecordingSink {
    fn publish(&mut self, event: ReviewEvent) {
        self.events.push(event);
    }
}
