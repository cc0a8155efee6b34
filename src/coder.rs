//! File-level driver: frequency list, tree, code table, encode and decode.
//!
//! A [`HuffmanCoder`] is bound to one source file. Its stages run in order:
//! [`make_sorted_list`](HuffmanCoder::make_sorted_list) reads the source once,
//! [`make_tree`](HuffmanCoder::make_tree) and
//! [`make_encodings`](HuffmanCoder::make_encodings) derive the code. The
//! encoded file stores no tree, so decoding needs the coder that encoded it
//! (or one rebuilt from the same source).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::bits::{read_bit_string, write_bit_string};
use crate::config::CoderConfig;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::huffman::{CodeTable, HuffmanTree};

/// Static Huffman coder for one source file.
#[derive(Debug, Clone)]
pub struct HuffmanCoder {
    file_name: PathBuf,
    config: CoderConfig,
    text: Vec<u8>,
    sorted_list: Option<FrequencyTable>,
    tree: Option<HuffmanTree>,
    encodings: Option<CodeTable>,
}

impl HuffmanCoder {
    /// Bind a coder to the file at `path`. Nothing is read yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, CoderConfig::default())
    }

    /// Bind a coder to `path` with explicit options.
    pub fn with_config(path: impl AsRef<Path>, config: CoderConfig) -> Self {
        Self {
            file_name: path.as_ref().to_path_buf(),
            config,
            text: Vec::new(),
            sorted_list: None,
            tree: None,
            encodings: None,
        }
    }

    /// Bind to `path` and run every build stage.
    pub fn build(path: impl AsRef<Path>) -> Result<Self> {
        let mut coder = Self::new(path);
        coder.make_sorted_list()?;
        coder.make_tree()?;
        coder.make_encodings()?;
        Ok(coder)
    }

    /// Read the source file and compute its sorted frequency list.
    ///
    /// Any tree or code table from an earlier run is discarded.
    pub fn make_sorted_list(&mut self) -> Result<()> {
        let text = fs::read(&self.file_name)?;
        let list = FrequencyTable::from_text(&text, &self.config)?;
        log::debug!(
            "{}: {} symbols, {} distinct",
            self.file_name.display(),
            text.len(),
            list.len()
        );
        self.text = text;
        self.sorted_list = Some(list);
        self.tree = None;
        self.encodings = None;
        Ok(())
    }

    /// Build the Huffman tree from the sorted frequency list.
    pub fn make_tree(&mut self) -> Result<()> {
        let list = self
            .sorted_list
            .as_ref()
            .ok_or(Error::NotBuilt("sorted frequency list"))?;
        self.tree = Some(HuffmanTree::from_frequencies(list));
        self.encodings = None;
        Ok(())
    }

    /// Derive every symbol's code from the tree.
    pub fn make_encodings(&mut self) -> Result<()> {
        let tree = self.tree.as_ref().ok_or(Error::NotBuilt("huffman tree"))?;
        self.encodings = Some(CodeTable::from_tree(tree));
        Ok(())
    }

    /// The concatenated codes of the source text, without padding.
    pub fn encode_bits(&self) -> Result<Vec<u8>> {
        let codes = self
            .encodings
            .as_ref()
            .ok_or(Error::NotBuilt("code table"))?;
        codes.encode(&self.text)
    }

    /// Encode the source text into `encoded_file`. Returns bytes written.
    pub fn encode(&self, encoded_file: impl AsRef<Path>) -> Result<usize> {
        let encoded_file = encoded_file.as_ref();
        let bits = self.encode_bits()?;
        let written = write_bit_string(encoded_file, &bits)?;
        log::debug!(
            "encoded {} symbols as {} payload bits into {} ({} bytes)",
            self.text.len(),
            bits.len(),
            encoded_file.display(),
            written
        );
        Ok(written)
    }

    /// Decode `encoded_file` with this coder's tree into `decoded_file`.
    ///
    /// The output file is only created once the whole payload has decoded.
    /// Returns the number of symbols written.
    pub fn decode(
        &self,
        encoded_file: impl AsRef<Path>,
        decoded_file: impl AsRef<Path>,
    ) -> Result<usize> {
        let tree = self.tree.as_ref().ok_or(Error::NotBuilt("huffman tree"))?;
        let bits = read_bit_string(encoded_file.as_ref())?;
        let text = tree.decode(&bits)?;

        let decoded_file = decoded_file.as_ref();
        let mut out = BufWriter::new(File::create(decoded_file)?);
        out.write_all(&text)?;
        out.flush()?;
        log::debug!(
            "decoded {} payload bits into {} symbols at {}",
            bits.len(),
            text.len(),
            decoded_file.display()
        );
        Ok(text.len())
    }

    /// Path of the source file.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Options in effect.
    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    /// The sorted frequency list, once built.
    pub fn sorted_list(&self) -> Option<&FrequencyTable> {
        self.sorted_list.as_ref()
    }

    /// The Huffman tree, once built.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    /// The code table, once built.
    pub fn encodings(&self) -> Option<&CodeTable> {
        self.encodings.as_ref()
    }
}
