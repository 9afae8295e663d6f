//! Abstract review screens, handed to the display collaborator for rendering.

use alloc::string::String;

use bitflags::bitflags;

use crate::text::{
    fit, ADDRESS_MAX, AMOUNT_MAX, ASSET_MAX, LABEL_MAX, TICKER_MAX, TITLE_MAX, WARNING_MAX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Prev,
    Exit,
    Next,
}

bitflags! {
    /// Buttons a screen exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const PREV = 0b001;
        const EXIT = 0b010;
        const NEXT = 0b100;
    }
}

impl Button {
    pub fn flag(&self) -> Buttons {
        match self {
            Button::Prev => Buttons::PREV,
            Button::Exit => Buttons::EXIT,
            Button::Next => Buttons::NEXT,
        }
    }
}

/// First row of an input/output screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Address(String),
    Label(String),
    /// Scriptless output with nothing to show
    Blank,
}

impl Destination {
    pub fn address(address: &str) -> Self {
        Destination::Address(fit(address, ADDRESS_MAX))
    }

    pub fn label(label: &str) -> Self {
        Destination::Label(fit(label, LABEL_MAX))
    }
}

/// Extra row below the amount. Asset info and warnings never share a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    None,
    Asset(String),
    Warning(String),
}

impl Detail {
    pub fn asset(asset_str: &str) -> Self {
        Detail::Asset(fit(asset_str, ASSET_MAX))
    }

    pub fn warning(message: &str) -> Self {
        Detail::Warning(fit(message, WARNING_MAX))
    }

    pub fn warning_text(&self) -> Option<&str> {
        match self {
            Detail::Warning(message) => Some(message),
            _ => None,
        }
    }

    pub fn asset_text(&self) -> Option<&str> {
        match self {
            Detail::Asset(asset_str) => Some(asset_str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Movement {
        destination: Destination,
        amount: String,
        ticker: String,
        detail: Detail,
    },
    Fee {
        /// Amount and ticker on one line
        fee: String,
        warning: Option<String>,
    },
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub body: Body,
    pub buttons: Buttons,
}

impl Screen {
    /// A screen showing an amount of some asset moving to or from
    /// `destination`. Navigation buttons are fixed up by the chain builder.
    pub fn movement(
        title: &str,
        destination: Destination,
        amount: &str,
        ticker: &str,
        detail: Detail,
    ) -> Self {
        Screen {
            title: fit(title, TITLE_MAX),
            body: Body::Movement {
                destination,
                amount: fit(amount, AMOUNT_MAX),
                ticker: fit(ticker, TICKER_MAX),
                detail,
            },
            buttons: Buttons::EXIT | Buttons::NEXT,
        }
    }

    pub fn new(title: &str, body: Body) -> Self {
        Screen {
            title: fit(title, TITLE_MAX),
            body,
            buttons: Buttons::EXIT | Buttons::NEXT,
        }
    }

    #[inline]
    pub fn has_button(&self, button: Button) -> bool {
        self.buttons.contains(button.flag())
    }

    pub fn destination(&self) -> Option<&Destination> {
        match &self.body {
            Body::Movement { destination, .. } => Some(destination),
            _ => None,
        }
    }

    pub fn amount(&self) -> Option<&str> {
        match &self.body {
            Body::Movement { amount, .. } => Some(amount),
            _ => None,
        }
    }

    pub fn ticker(&self) -> Option<&str> {
        match &self.body {
            Body::Movement { ticker, .. } => Some(ticker),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&Detail> {
        match &self.body {
            Body::Movement { detail, .. } => Some(detail),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match &self.body {
            Body::Movement { detail, .. } => detail.warning_text(),
            Body::Fee { warning, .. } => warning.as_deref(),
            Body::Message(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_movement_screen() {
        let screen = Screen::movement(
            "Output 1/2",
            Destination::address("bc1qexample"),
            "0.00010000",
            "BTC",
            Detail::warning("Unusual change path"),
        );
        assert_eq!(screen.title, "Output 1/2");
        assert_eq!(screen.destination(), Some(&Destination::Address("bc1qexample".to_string())));
        assert_eq!(screen.amount(), Some("0.00010000"));
        assert_eq!(screen.ticker(), Some("BTC"));
        assert_eq!(screen.warning(), Some("Unusual change path"));
        assert_eq!(screen.detail().and_then(Detail::asset_text), None);
        assert!(screen.has_button(Button::Exit));
        assert!(screen.has_button(Button::Next));
        assert!(!screen.has_button(Button::Prev));
    }

    #[test]
    fn test_screen_fields_truncated() {
        let long = "a".repeat(300);
        let screen = Screen::movement(
            "A title that is far too long for any screen",
            Destination::label(&long),
            &long,
            "TOOLONGTICKER",
            Detail::asset(&long),
        );
        assert_eq!(screen.title.len(), TITLE_MAX);
        assert_eq!(screen.destination(), Some(&Destination::Label("a".repeat(LABEL_MAX))));
        assert_eq!(screen.amount().unwrap().len(), AMOUNT_MAX);
        assert_eq!(screen.ticker(), Some("TOOLONG"));
        assert_eq!(screen.detail(), Some(&Detail::Asset("a".repeat(ASSET_MAX))));
    }

    #[test]
    fn test_fee_screen_warning() {
        let screen = Screen::new(
            "Summary",
            Body::Fee {
                fee: "0.00001000 BTC".to_string(),
                warning: Some("High fee".to_string()),
            },
        );
        assert_eq!(screen.warning(), Some("High fee"));
        assert!(screen.destination().is_none());
        assert!(screen.amount().is_none());
    }
}
