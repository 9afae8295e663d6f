//! Moves a cursor through a finished [`ScreenChain`] until the user accepts,
//! declines, or the review is cancelled from outside.

use log::{debug, info};

use crate::{
    chain::{NavigationCommand, ScreenChain},
    screen::{Button, Screen},
};

const LOG_TARGET: &str = "review::navigation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Decline,
}

/// One discrete event consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Button(Button),
    /// Timeout, power event or similar, always declines
    Cancel,
}

#[derive(Debug)]
pub enum NavigationState {
    Active { chain: ScreenChain, cursor: usize },
    /// The chain has been dropped, only the outcome remains.
    Terminal(Outcome),
}

/// Owns a chain while it is being reviewed.
///
/// Construction happens beforehand in a [`crate::chain::ChainBuilder`]; the
/// controller starts active on the first screen and reaches a terminal
/// outcome exactly once.
#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new(chain: ScreenChain) -> Self {
        NavigationController {
            state: NavigationState::Active { chain, cursor: 0 },
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn cursor(&self) -> Option<usize> {
        match &self.state {
            NavigationState::Active { cursor, .. } => Some(*cursor),
            NavigationState::Terminal(_) => None,
        }
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        match &self.state {
            NavigationState::Active { chain, cursor } => chain.get(*cursor),
            NavigationState::Terminal(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            NavigationState::Terminal(outcome) => Some(outcome),
            NavigationState::Active { .. } => None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Applies one input.
    ///
    /// Returns the outcome on the transition into the terminal state and
    /// `None` otherwise, including for every input after it.
    pub fn handle(&mut self, input: Input) -> Option<Outcome> {
        let command = match (&mut self.state, input) {
            (NavigationState::Terminal(_), _) => return None,
            (NavigationState::Active { .. }, Input::Cancel) => {
                info!(target: LOG_TARGET, "Review cancelled");
                NavigationCommand::Decline
            }
            (NavigationState::Active { chain, cursor }, Input::Button(button)) => {
                match chain.command(*cursor, button) {
                    Some(command) => command,
                    None => {
                        debug!(target: LOG_TARGET, "Ignoring {:?} on screen {}", button, cursor);
                        return None;
                    }
                }
            }
        };

        match command {
            NavigationCommand::Show(index) => {
                if let NavigationState::Active { cursor, .. } = &mut self.state {
                    *cursor = index;
                }
                None
            }
            NavigationCommand::Accept => Some(self.terminate(Outcome::Accept)),
            NavigationCommand::Decline => Some(self.terminate(Outcome::Decline)),
        }
    }

    /// Forces a decline from outside the flow.
    pub fn cancel(&mut self) -> Option<Outcome> {
        self.handle(Input::Cancel)
    }

    fn terminate(&mut self, outcome: Outcome) -> Outcome {
        debug!(target: LOG_TARGET, "Review finished: {:?}", outcome);
        self.state = NavigationState::Terminal(outcome);
        outcome
    }
}
