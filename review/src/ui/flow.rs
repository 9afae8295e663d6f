use log::debug;

use super::{CancelSignal, Display, EventSink, InputSource, ReviewEvent};
use crate::{
    chain::ScreenChain,
    navigation::{Input, NavigationController, Outcome},
};

const LOG_TARGET: &str = "review::ui::flow";

/// Events published for each outcome of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalEvents {
    pub accept: ReviewEvent,
    pub decline: ReviewEvent,
}

impl TerminalEvents {
    pub const OUTPUTS: TerminalEvents = TerminalEvents {
        accept: ReviewEvent::AcceptOutputs,
        decline: ReviewEvent::Decline,
    };

    pub const SIGNATURE: TerminalEvents = TerminalEvents {
        accept: ReviewEvent::AcceptSignature,
        decline: ReviewEvent::CancelSignature,
    };

    pub const BLE_PAIRING: TerminalEvents = TerminalEvents {
        accept: ReviewEvent::BleConfirm,
        decline: ReviewEvent::BleDeny,
    };

    pub fn event(&self, outcome: Outcome) -> ReviewEvent {
        match outcome {
            Outcome::Accept => self.accept,
            Outcome::Decline => self.decline,
        }
    }
}

/// A built chain together with the events its outcomes map to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFlow {
    pub chain: ScreenChain,
    pub events: TerminalEvents,
}

impl ReviewFlow {
    pub fn new(chain: ScreenChain, events: TerminalEvents) -> Self {
        ReviewFlow { chain, events }
    }
}

/// Runs `flow` to completion and publishes exactly one terminal event.
///
/// A pending cancellation always wins over a queued button press.
pub fn run_flow<D, I, C, E>(
    flow: ReviewFlow,
    display: &mut D,
    input: &mut I,
    cancel: &C,
    events: &mut E,
) -> Outcome
where
    D: Display,
    I: InputSource,
    C: CancelSignal + ?Sized,
    E: EventSink,
{
    let ReviewFlow {
        chain,
        events: terminal_events,
    } = flow;
    debug!(target: LOG_TARGET, "Starting review of {} screens", chain.len());

    let mut controller = NavigationController::new(chain);
    let mut shown = None;

    let outcome = loop {
        if cancel.is_cancelled() {
            if let Some(outcome) = controller.cancel() {
                break outcome;
            }
        }

        if shown != controller.cursor() {
            if let Some(screen) = controller.current_screen() {
                display.show(screen);
            }
            shown = controller.cursor();
        }

        let next = input.next_input();
        let next = if cancel.is_cancelled() { Input::Cancel } else { next };
        if let Some(outcome) = controller.handle(next) {
            break outcome;
        }
    };

    events.publish(terminal_events.event(outcome));
    outcome
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{
        chain::ChainBuilder,
        screen::{Button, Destination, Detail, Screen},
        testing::{RecordingDisplay, RecordingSink, ScriptedInput},
    };
    use alloc::{format, vec};
    use core::sync::atomic::AtomicBool;

    fn flow(len: usize) -> ReviewFlow {
        let mut builder = ChainBuilder::new();
        for i in 0..len {
            builder.push(Screen::movement(
                &format!("Output {}/{}", i + 1, len),
                Destination::Blank,
                "0",
                "",
                Detail::None,
            ));
        }
        ReviewFlow::new(builder.finish().unwrap(), TerminalEvents::OUTPUTS)
    }

    #[test]
    fn test_run_to_accept() {
        let mut display = RecordingDisplay::default();
        let mut input = ScriptedInput::new(vec![
            Input::Button(Button::Next),
            Input::Button(Button::Prev),
            Input::Button(Button::Next),
            Input::Button(Button::Next),
        ]);
        let mut sink = RecordingSink::default();
        let cancel = AtomicBool::new(false);

        let outcome = run_flow(flow(2), &mut display, &mut input, &cancel, &mut sink);
        assert_eq!(outcome, Outcome::Accept);
        assert_eq!(sink.events, vec![ReviewEvent::AcceptOutputs]);
        assert_eq!(
            display.titles(),
            vec!["Output 1/2", "Output 2/2", "Output 1/2", "Output 2/2"]
        );
    }

    #[test]
    fn test_run_to_decline() {
        let mut display = RecordingDisplay::default();
        let mut input =
            ScriptedInput::new(vec![Input::Button(Button::Next), Input::Button(Button::Exit)]);
        let mut sink = RecordingSink::default();
        let cancel = AtomicBool::new(false);

        let outcome = run_flow(flow(3), &mut display, &mut input, &cancel, &mut sink);
        assert_eq!(outcome, Outcome::Decline);
        assert_eq!(sink.events, vec![ReviewEvent::Decline]);
    }

    #[test]
    fn test_ignored_buttons_do_not_redraw() {
        let mut display = RecordingDisplay::default();
        let mut input = ScriptedInput::new(vec![
            Input::Button(Button::Prev),
            Input::Button(Button::Prev),
            Input::Button(Button::Next),
        ]);
        let mut sink = RecordingSink::default();
        let cancel = AtomicBool::new(false);

        run_flow(flow(1), &mut display, &mut input, &cancel, &mut sink);
        assert_eq!(display.titles(), vec!["Output 1/1"]);
        assert_eq!(sink.events, vec![ReviewEvent::AcceptOutputs]);
    }

    #[test]
    fn test_pending_cancel_wins() {
        let mut display = RecordingDisplay::default();
        let mut input = ScriptedInput::new(vec![Input::Button(Button::Next)]);
        let mut sink = RecordingSink::default();
        let cancel = AtomicBool::new(true);

        let outcome = run_flow(flow(1), &mut display, &mut input, &cancel, &mut sink);
        assert_eq!(outcome, Outcome::Decline);
        assert_eq!(sink.events, vec![ReviewEvent::Decline]);
        assert!(display.titles().is_empty());
    }

    #[test]
    fn test_cancel_while_waiting() {
        let mut display = RecordingDisplay::default();
        let mut input =
            ScriptedInput::new(vec![Input::Button(Button::Next), Input::Button(Button::Next)])
                .cancel_after(1);
        let mut sink = RecordingSink::default();
        let outcome = {
            let cancel = input.cancel_flag();
            run_flow(flow(1), &mut display, &mut input, &*cancel, &mut sink)
        };
        assert_eq!(outcome, Outcome::Decline);
        assert_eq!(sink.events, vec![ReviewEvent::Decline]);
    }

    #[test]
    fn test_signature_events() {
        assert_eq!(TerminalEvents::SIGNATURE.event(Outcome::Accept), ReviewEvent::AcceptSignature);
        assert_eq!(TerminalEvents::SIGNATURE.event(Outcome::Decline), ReviewEvent::CancelSignature);
        assert_eq!(TerminalEvents::BLE_PAIRING.event(Outcome::Accept), ReviewEvent::BleConfirm);
    }
}
