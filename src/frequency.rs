//! Symbol frequency table.
//!
//! Counts each distinct symbol of a text once, converts counts to empirical
//! probabilities and sorts them ascending, with ties broken by symbol value.
//! The sort order is what makes the tree builder deterministic.

use std::cmp::Ordering;

use crate::config::CoderConfig;
use crate::error::{Error, Result};
use crate::ALPHABET_SIZE;

/// A symbol and its occurrence probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolFreq {
    /// The symbol, in `0..128`.
    pub symbol: u8,
    /// Fraction of the text made up of this symbol, in `[0, 1]`.
    pub probability: f64,
}

impl SymbolFreq {
    /// Create a new record.
    pub fn new(symbol: u8, probability: f64) -> Self {
        Self {
            symbol,
            probability,
        }
    }

    /// Ascending probability, then ascending symbol value.
    pub fn sort_order(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then(self.symbol.cmp(&other.symbol))
    }
}

/// Sorted list of symbol probabilities for one text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<SymbolFreq>,
}

impl FrequencyTable {
    /// Count the symbols of `text`.
    ///
    /// A text with exactly one distinct symbol is padded with the configured
    /// placeholder at probability 0.0, so the table then holds two entries.
    ///
    /// # Errors
    /// Returns `Error::SymbolOutOfRange` for any byte outside the alphabet,
    /// or for a placeholder outside it.
    pub fn from_text(text: &[u8], config: &CoderConfig) -> Result<Self> {
        config.validate()?;

        // Counts kept in discovery order; `slot` maps symbol -> position.
        let mut slot = [None::<usize>; ALPHABET_SIZE];
        let mut counts: Vec<(u8, usize)> = Vec::new();
        for &b in text {
            if b as usize >= ALPHABET_SIZE {
                return Err(Error::SymbolOutOfRange(b));
            }
            match slot[b as usize] {
                Some(i) => counts[i].1 += 1,
                None => {
                    slot[b as usize] = Some(counts.len());
                    counts.push((b, 1));
                }
            }
        }

        let total = text.len() as f64;
        let mut entries: Vec<SymbolFreq> = counts
            .into_iter()
            .map(|(symbol, n)| SymbolFreq::new(symbol, n as f64 / total))
            .collect();
        entries.sort_by(SymbolFreq::sort_order);

        if entries.len() == 1 {
            let only = entries[0];
            let placeholder = config.placeholder_for(only.symbol);
            log::warn!(
                "single distinct symbol {:#04x}; pairing it with placeholder {:#04x}",
                only.symbol,
                placeholder
            );
            entries = vec![SymbolFreq::new(placeholder, 0.0), only];
        }

        log::trace!("sorted frequency list: {:?}", entries);
        Ok(Self { entries })
    }

    /// Number of entries, placeholder included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for an empty text.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolFreq> {
        self.entries.iter()
    }

    /// The entries in sorted order.
    pub fn as_slice(&self) -> &[SymbolFreq] {
        &self.entries
    }

    /// Sum of all probabilities; 1.0 up to rounding for any non-empty text.
    pub fn probabilities_sum(&self) -> f64 {
        self.entries.iter().map(|e| e.probability).sum()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a SymbolFreq;
    type IntoIter = std::slice::Iter<'a, SymbolFreq>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
