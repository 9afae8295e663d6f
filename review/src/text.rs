//! Display strings: fixed width limits, truncation and fixed-point amounts.
//!
//! Every user-facing string goes through [`fit`] before it lands on a screen,
//! so no screen field ever exceeds its display width. Truncation is silent
//! for the user and only reported back to the caller.

use alloc::{format, string::String, string::ToString};

use log::debug;

const LOG_TARGET: &str = "review::text";

pub const TITLE_MAX: usize = 31;
pub const ADDRESS_MAX: usize = 127;
pub const LABEL_MAX: usize = 15;
pub const AMOUNT_MAX: usize = 31;
pub const TICKER_MAX: usize = 7;
pub const ASSET_MAX: usize = 127;
pub const WARNING_MAX: usize = 127;
pub const FEE_MAX: usize = 31;
pub const MESSAGE_MAX: usize = 63;

/// Decimal places of the native asset (satoshi to coin).
pub const NATIVE_PRECISION: u8 = 8;

/// A `u64` never has more than 19 fractional digits worth showing.
pub const MAX_FORMAT_PRECISION: u8 = 19;

/// Cuts `text` to at most `limit` characters.
///
/// Returns the (possibly shortened) string and whether anything was dropped.
pub fn truncate(text: &str, limit: usize) -> (String, bool) {
    match text.char_indices().nth(limit) {
        Some((end, _)) => (text[..end].to_string(), true),
        None => (text.to_string(), false),
    }
}

/// Like [`truncate`], for callers that only need the display string.
pub fn fit(text: &str, limit: usize) -> String {
    let (fitted, truncated) = truncate(text, limit);
    if truncated {
        debug!(target: LOG_TARGET, "Display string truncated to {} chars: '{}'", limit, fitted);
    }
    fitted
}

/// Formats `value` base units as a decimal with exactly `precision`
/// fractional digits, ie. `value / 10^precision`.
pub fn format_amount(value: u64, precision: u8) -> String {
    let precision = precision.min(MAX_FORMAT_PRECISION);
    if precision == 0 {
        return value.to_string();
    }
    let scale = 10u64.pow(precision as u32);
    format!(
        "{}.{:0width$}",
        value / scale,
        value % scale,
        width = precision as usize
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use rand::Rng;

    fn parse_amount(amount: &str, precision: u8) -> u64 {
        match amount.split_once('.') {
            Some((whole, frac)) => {
                assert_eq!(frac.len(), precision as usize);
                let scale = 10u64.pow(precision as u32);
                whole.parse::<u64>().unwrap() * scale + frac.parse::<u64>().unwrap()
            }
            None => {
                assert_eq!(precision, 0);
                amount.parse::<u64>().unwrap()
            }
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 5), ("hello".to_string(), false));
        assert_eq!(truncate("hello", 3), ("hel".to_string(), true));
        assert_eq!(truncate("", 0), ("".to_string(), false));
        assert_eq!(truncate("abc", 0), ("".to_string(), true));
        // multi-byte characters are never split
        assert_eq!(truncate("ééé", 2), ("éé".to_string(), true));
        assert_eq!(fit("Receive  (10/12)", LABEL_MAX), "Receive  (10/12");
    }

    #[test]
    fn test_format_amount() {
        let cases = [
            (0, 8, "0.00000000"),
            (1, 8, "0.00000001"),
            (100_000_000, 8, "1.00000000"),
            (123_456_789, 8, "1.23456789"),
            (2_100_000_000_000_000, 8, "21000000.00000000"),
            (5, 0, "5"),
            (1234, 2, "12.34"),
            (1200, 3, "1.200"),
            (u64::MAX, 0, "18446744073709551615"),
            (u64::MAX, 19, "1.8446744073709551615"),
        ];
        for (value, precision, expected) in cases {
            assert_eq!(format_amount(value, precision), expected);
        }
        assert_eq!(format_amount(7, 30), format_amount(7, MAX_FORMAT_PRECISION));
    }

    #[test]
    fn test_format_amount_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let value: u64 = rng.gen();
            let precision: u8 = rng.gen_range(0..=MAX_FORMAT_PRECISION);
            let amount = format_amount(value, precision);
            assert!(amount.len() <= AMOUNT_MAX);
            assert_eq!(parse_amount(&amount, precision), value);
        }
    }
}
