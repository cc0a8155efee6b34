//! Coder configuration.

use crate::error::{Error, Result};
use crate::ALPHABET_SIZE;

/// Default synthetic symbol used when the source holds a single distinct symbol.
pub const DEFAULT_PLACEHOLDER: u8 = b'b';

/// Options for [`HuffmanCoder`](crate::HuffmanCoder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoderConfig {
    placeholder: u8,
}

impl CoderConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Set the synthetic symbol paired with a lone real symbol.
    ///
    /// The value is checked against the alphabet by [`CoderConfig::validate`].
    pub fn with_placeholder(mut self, placeholder: u8) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// The configured placeholder symbol.
    pub fn placeholder(&self) -> u8 {
        self.placeholder
    }

    /// Placeholder to pair with `real`, stepping past it on collision.
    pub(crate) fn placeholder_for(&self, real: u8) -> u8 {
        if self.placeholder == real {
            ((real as usize + 1) % ALPHABET_SIZE) as u8
        } else {
            self.placeholder
        }
    }

    /// Check that every option is usable.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutOfRange` if the placeholder is not in the alphabet.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder as usize >= ALPHABET_SIZE {
            return Err(Error::SymbolOutOfRange(self.placeholder));
        }
        Ok(())
    }
}

impl Default for CoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
