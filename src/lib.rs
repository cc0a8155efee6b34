//! # Static Huffman Coding for Text
//!
//! *Optimal prefix codes from a single frequency count.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letter, `E`, a single dot. Huffman coding does the same
//! thing systematically: it measures how often each symbol appears, then hands the shortest
//! bit strings to the most frequent symbols. Because no code is the prefix of another, the bits
//! can be run together without separators and still be read back unambiguously.
//!
//! ## The Problem
//!
//! Plain ASCII spends 8 bits on every character whether it is `e` or `~`.
//! Given the empirical distribution of a text, we want the binary prefix code with the smallest
//! expected length, then a byte-aligned file format that preserves the exact bit count.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon      Entropy bounds the expected code length
//! 1949  Fano         Shannon-Fano coding: top-down splits, not always optimal
//! 1952  Huffman      Bottom-up merging: provably optimal prefix codes
//! 1976  van Leeuwen  Two-queue construction in linear time for sorted weights
//! ```
//!
//! ## Mathematical Formulation
//!
//! For symbols $s$ with probabilities $p_s$ and code lengths $\ell_s$, Huffman's construction
//! minimises
//!
//! ```text
//! L = Σ p_s · ℓ_s,   subject to Σ 2^(-ℓ_s) ≤ 1   (Kraft)
//! ```
//!
//! and achieves $H(p) \le L < H(p) + 1$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n)$ to count, $O(k \log k)$ to sort $k$ distinct symbols, $O(k)$ to build the tree.
//! - **Space**: $O(n)$; the whole text is held in memory.
//!
//! ## Failure Modes
//!
//! 1. **No side channel**: the encoded file carries no tree. It only decodes against the tree
//!    rebuilt from its own source text.
//! 2. **Alphabet**: only the 128 symbols `0..128` are accepted; other bytes are rejected.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`FrequencyTable`]: sorted symbol probabilities.
//! - [`HuffmanTree`] and [`CodeTable`]: two-queue construction and path codes.
//! - [`bits`]: padding-marker packing to and from bytes.
//! - [`HuffmanCoder`]: file-level driver tying the stages together.
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - van Leeuwen, J. (1976). "On the construction of Huffman trees."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod coder;
pub mod config;
pub mod error;
pub mod frequency;
pub mod huffman;

pub use coder::HuffmanCoder;
pub use config::CoderConfig;
pub use error::{Error, Result};
pub use frequency::{FrequencyTable, SymbolFreq};
pub use huffman::{CodeTable, HuffmanTree, Node};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 128;
