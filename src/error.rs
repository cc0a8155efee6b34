//! Error types for static Huffman coding.

use thiserror::Error;

/// Error variants for frequency counting, packing, encoding and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol lies outside the 128-symbol alphabet.
    #[error("symbol {0:#04x} is outside the 128-symbol alphabet")]
    SymbolOutOfRange(u8),

    /// A bit sequence contained something other than 0 or 1.
    #[error("invalid bit {value:?} at position {index}")]
    InvalidBit {
        /// Position of the offending element.
        index: usize,
        /// The offending element (a raw value or a character code).
        value: u32,
    },

    /// The text contained a symbol the code table has no entry for.
    #[error("no code for symbol {0:#04x}")]
    MissingCode(u8),

    /// Packed data is empty or its first byte holds no padding marker.
    #[error("packed data has no padding marker")]
    MissingPaddingMarker,

    /// The bit sequence ended part-way through a code.
    #[error("bit sequence ended inside a code after {consumed} bits")]
    TruncatedCode {
        /// Number of payload bits consumed before running out.
        consumed: usize,
    },

    /// A non-empty payload was handed to a tree with no leaves.
    #[error("cannot decode a non-empty payload with an empty tree")]
    EmptyTree,

    /// A coder stage ran before the stage it depends on.
    #[error("{0} has not been built yet")]
    NotBuilt(&'static str),

    /// An I/O error occurred while reading or writing a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, Error>;
