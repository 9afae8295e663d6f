use alloc::string::{String, ToString};

use bitflags::bitflags;

use super::{AssetId, ASSET_ID_SIZE};

pub const BLINDING_KEY_SIZE: usize = 33;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OutputFlags: u8 {
        /// Output has been checked against the wallet's own scripts
        const VALIDATED = 0b0000_0001;
        /// Output returns funds to the wallet
        const CHANGE = 0b0000_0010;
        const HAS_BLINDING_KEY = 0b0000_0100;
        /// Asset id and value have been recovered from the blinded output
        const HAS_UNBLINDED = 0b0000_1000;
    }
}

/// Per-output metadata supplied alongside a transaction, index-aligned with
/// its outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    pub flags: OutputFlags,
    /// Warning for the user, empty when there is none.
    pub message: String,
    pub asset_id: AssetId,
    pub value: u64,
    pub blinding_key: [u8; BLINDING_KEY_SIZE],
}

impl Default for OutputInfo {
    fn default() -> Self {
        OutputInfo {
            flags: OutputFlags::empty(),
            message: String::new(),
            asset_id: AssetId([0u8; ASSET_ID_SIZE]),
            value: 0,
            blinding_key: [0u8; BLINDING_KEY_SIZE],
        }
    }
}

impl OutputInfo {
    pub fn new(flags: OutputFlags) -> Self {
        OutputInfo {
            flags,
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn with_unblinded(mut self, asset_id: AssetId, value: u64) -> Self {
        self.asset_id = asset_id;
        self.value = value;
        self.flags |= OutputFlags::HAS_UNBLINDED;
        self
    }

    pub fn with_blinding_key(mut self, blinding_key: [u8; BLINDING_KEY_SIZE]) -> Self {
        self.blinding_key = blinding_key;
        self.flags |= OutputFlags::HAS_BLINDING_KEY;
        self
    }

    pub fn warning(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// Change the wallet has already checked and need not bother the user with.
    #[inline]
    pub fn is_validated_change(&self) -> bool {
        self.flags
            .contains(OutputFlags::VALIDATED | OutputFlags::CHANGE)
    }

    pub fn blinding_key(&self) -> Option<&[u8; BLINDING_KEY_SIZE]> {
        if self.flags.contains(OutputFlags::HAS_BLINDING_KEY) {
            Some(&self.blinding_key)
        } else {
            None
        }
    }

    pub fn unblinded(&self) -> Option<(&AssetId, u64)> {
        if self.flags.contains(OutputFlags::HAS_UNBLINDED) {
            Some((&self.asset_id, self.value))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_output_info_accessors() {
        let info = OutputInfo::new(OutputFlags::VALIDATED);
        assert!(info.warning().is_none());
        assert!(!info.is_validated_change());
        assert!(info.blinding_key().is_none());
        assert!(info.unblinded().is_none());

        let asset_id = AssetId([7u8; ASSET_ID_SIZE]);
        let info = OutputInfo::new(OutputFlags::VALIDATED | OutputFlags::CHANGE)
            .with_message("Unusual script")
            .with_unblinded(asset_id, 1000)
            .with_blinding_key([2u8; BLINDING_KEY_SIZE]);
        assert_eq!(info.warning(), Some("Unusual script"));
        assert!(info.is_validated_change());
        assert_eq!(info.unblinded(), Some((&asset_id, 1000)));
        assert_eq!(info.blinding_key(), Some(&[2u8; BLINDING_KEY_SIZE]));
        assert!(info.flags.contains(OutputFlags::HAS_UNBLINDED | OutputFlags::HAS_BLINDING_KEY));
    }
}
