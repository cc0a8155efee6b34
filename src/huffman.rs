//! Huffman tree construction, code tables and tree-walk decoding.
//!
//! The tree is built with the two-queue method: leaves wait in a *source*
//! queue in sorted order, merged nodes are appended to a *target* queue in
//! creation order. Both queues stay sorted, so the two cheapest nodes are
//! always found at their fronts and no priority queue is needed.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! Van Leeuwen (1976) observed that presorted weights allow the linear-time
//! two-queue variant used here.

use std::collections::VecDeque;

use crate::bits::format_bits;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::ALPHABET_SIZE;

/// Front value reported by an empty queue; larger than any probability.
const EMPTY_QUEUE_SENTINEL: f64 = 2.0;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A symbol with no children.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: u8,
        /// Occurrence probability of the symbol.
        probability: f64,
    },
    /// A merge point with exactly two children.
    Internal {
        /// Child reached by a 0 bit.
        left: Box<Node>,
        /// Child reached by a 1 bit.
        right: Box<Node>,
        /// Sum of the children's probabilities.
        probability: f64,
    },
}

impl Node {
    /// Probability mass under this node.
    pub fn probability(&self) -> f64 {
        match self {
            Node::Leaf { probability, .. } => *probability,
            Node::Internal { probability, .. } => *probability,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Node {
        let probability = left.probability() + right.probability();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            probability,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Pop the cheaper of the two queue fronts. Ties go to `source`.
fn pop_lowest(source: &mut VecDeque<Node>, target: &mut VecDeque<Node>) -> Option<Node> {
    let p = source
        .front()
        .map_or(EMPTY_QUEUE_SENTINEL, Node::probability);
    let q = target
        .front()
        .map_or(EMPTY_QUEUE_SENTINEL, Node::probability);
    if p <= q {
        source.pop_front()
    } else {
        target.pop_front()
    }
}

/// A Huffman coding tree. Empty when built from an empty text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    /// Build the tree from a sorted frequency table.
    ///
    /// A `FrequencyTable` holds zero or at least two entries, so the root is
    /// never a lone leaf; `decode` relies on this.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let mut source: VecDeque<Node> = table
            .iter()
            .map(|e| Node::Leaf {
                symbol: e.symbol,
                probability: e.probability,
            })
            .collect();
        let mut target: VecDeque<Node> = VecDeque::with_capacity(source.len());

        while source.len() + target.len() > 1 {
            let left = pop_lowest(&mut source, &mut target);
            let right = pop_lowest(&mut source, &mut target);
            let (Some(left), Some(right)) = (left, right) else {
                break;
            };
            target.push_back(Node::merge(left, right));
        }

        let root = target.pop_front().or_else(|| source.pop_front());
        let tree = Self { root };
        log::debug!(
            "built huffman tree: {} leaves, depth {}",
            tree.leaf_count(),
            tree.depth()
        );
        tree
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves (symbols, placeholder included).
    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Decode a payload bit sequence by walking from the root to a leaf
    /// once per symbol.
    ///
    /// # Errors
    /// - `Error::InvalidBit` for an element other than 0 or 1.
    /// - `Error::TruncatedCode` if the bits end part-way down the tree.
    /// - `Error::EmptyTree` if `bits` is non-empty but the tree is empty.
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<u8>> {
        let root = match self.root {
            Some(ref r) => r,
            None if bits.is_empty() => return Ok(Vec::new()),
            None => return Err(Error::EmptyTree),
        };

        let mut out = Vec::new();
        let mut curr = root;
        let mut pending = 0usize;
        for (index, &bit) in bits.iter().enumerate() {
            let Node::Internal { left, right, .. } = curr else {
                unreachable!("frequency tables never yield a single-leaf tree");
            };
            curr = match bit {
                0 => left.as_ref(),
                1 => right.as_ref(),
                value => {
                    return Err(Error::InvalidBit {
                        index,
                        value: value as u32,
                    })
                }
            };
            pending += 1;

            if let Node::Leaf { symbol, .. } = curr {
                out.push(*symbol);
                curr = root;
                pending = 0;
            }
        }

        if pending > 0 {
            return Err(Error::TruncatedCode {
                consumed: bits.len(),
            });
        }
        Ok(out)
    }
}

/// Per-symbol codes derived from a tree; absent symbols have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable {
    codes: Vec<Option<Vec<u8>>>, // symbol -> bit sequence
}

impl CodeTable {
    /// Derive codes by path: 0 for each left turn, 1 for each right turn.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        if let Some(root) = tree.root() {
            Self::build_codes(root, Vec::new(), &mut codes);
        }
        let table = Self { codes };
        log::trace!(
            "code table: {:?}",
            table
                .iter()
                .map(|(s, code)| (s as char, format_bits(code)))
                .collect::<Vec<_>>()
        );
        table
    }

    fn build_codes(node: &Node, prefix: Vec<u8>, codes: &mut [Option<Vec<u8>>]) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some(prefix);
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(0);
                Self::build_codes(left, left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(1);
                Self::build_codes(right, right_prefix, codes);
            }
        }
    }

    /// Code for `symbol`, if it occurs in the tree.
    pub fn get(&self, symbol: u8) -> Option<&[u8]> {
        self.codes.get(symbol as usize)?.as_deref()
    }

    /// Code for `symbol` as a string of '0' and '1'.
    pub fn code_string(&self, symbol: u8) -> Option<String> {
        self.get(symbol).map(format_bits)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, code)| code.as_deref().map(|c| (s as u8, c)))
    }

    /// Expected code length in bits per symbol under `table`.
    pub fn average_length(&self, table: &FrequencyTable) -> f64 {
        table
            .iter()
            .map(|e| e.probability * self.get(e.symbol).map_or(0, <[u8]>::len) as f64)
            .sum()
    }

    /// Concatenate the codes of every symbol in `text`.
    ///
    /// # Errors
    /// Returns `Error::MissingCode` for a symbol absent from the table.
    pub fn encode(&self, text: &[u8]) -> Result<Vec<u8>> {
        let mut bits = Vec::new();
        for &s in text {
            let code = self.get(s).ok_or(Error::MissingCode(s))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}
