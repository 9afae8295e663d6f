use alloc::vec::Vec;

use crate::{
    error::{ReviewError, ReviewResult},
    screen::{Button, Buttons, Screen},
};

/// What a button press on a given screen leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Show(usize),
    Accept,
    Decline,
}

/// A chain under construction.
///
/// Each pushed screen links back to the previous tail, so only the first
/// screen lacks a `Prev` button.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    screens: Vec<Screen>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `screen` and returns its index.
    pub fn push(&mut self, mut screen: Screen) -> usize {
        screen.buttons = if self.screens.is_empty() {
            Buttons::EXIT | Buttons::NEXT
        } else {
            Buttons::PREV | Buttons::EXIT | Buttons::NEXT
        };
        self.screens.push(screen);
        self.screens.len() - 1
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn finish(self) -> ReviewResult<ScreenChain> {
        if self.screens.is_empty() {
            return Err(ReviewError::EmptyChain);
        }
        Ok(ScreenChain {
            screens: self.screens,
        })
    }
}

/// The immutable, non-empty sequence of screens of one review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenChain {
    screens: Vec<Screen>,
}

impl ScreenChain {
    pub fn single(screen: Screen) -> Self {
        let mut builder = ChainBuilder::new();
        builder.push(screen);
        ScreenChain {
            screens: builder.screens,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Always false, a chain holds at least one screen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Screen> {
        self.screens.get(index)
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn first(&self) -> &Screen {
        &self.screens[0]
    }

    pub fn last(&self) -> &Screen {
        &self.screens[self.screens.len() - 1]
    }

    #[inline]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.screens.len()
    }

    /// Maps a button press on screen `index` to a navigation command.
    ///
    /// Returns `None` for a press on a button the screen does not expose.
    pub fn command(&self, index: usize, button: Button) -> Option<NavigationCommand> {
        let screen = self.screens.get(index)?;
        if !screen.has_button(button) {
            return None;
        }
        let command = match button {
            Button::Prev => NavigationCommand::Show(index.checked_sub(1)?),
            Button::Exit => NavigationCommand::Decline,
            Button::Next if self.is_last(index) => NavigationCommand::Accept,
            Button::Next => NavigationCommand::Show(index + 1),
        };
        Some(command)
    }
}
