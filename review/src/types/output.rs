use alloc::vec::Vec;

pub const COMMITMENT_SIZE: usize = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Explicit(u64),
    /// Blinded amount, only its commitment is known
    Confidential([u8; COMMITMENT_SIZE]),
}

impl Value {
    pub fn explicit(&self) -> Option<u64> {
        match self {
            Value::Explicit(value) => Some(*value),
            Value::Confidential(_) => None,
        }
    }
}

/// One entry of a parsed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Locking script, empty for fee and other non-spendable entries.
    pub script: Vec<u8>,
    pub value: Value,
}

impl Output {
    pub fn new(script: Vec<u8>, satoshi: u64) -> Self {
        Output {
            script,
            value: Value::Explicit(satoshi),
        }
    }

    pub fn confidential(script: Vec<u8>, commitment: [u8; COMMITMENT_SIZE]) -> Self {
        Output {
            script,
            value: Value::Confidential(commitment),
        }
    }

    /// Fee outputs carry no script.
    pub fn fee(satoshi: u64) -> Self {
        Output::new(Vec::new(), satoshi)
    }

    #[inline]
    pub fn has_script(&self) -> bool {
        !self.script.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub outputs: Vec<Output>,
}

impl Transaction {
    pub fn new(outputs: Vec<Output>) -> Self {
        Transaction { outputs }
    }

    #[inline]
    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }
}
