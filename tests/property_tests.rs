use std::fs;

use hufftext::bits::{pack, unpack};
use hufftext::{CoderConfig, CodeTable, FrequencyTable, HuffmanCoder, HuffmanTree};
use proptest::prelude::*;

fn roundtrip_file(text: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("source.txt");
    let enc = dir.path().join("source.huff");
    let dec = dir.path().join("decoded.txt");
    fs::write(&src, text).unwrap();

    let coder = HuffmanCoder::build(&src).unwrap();
    coder.encode(&enc).unwrap();
    coder.decode(&enc, &dec).unwrap();
    (fs::read(&enc).unwrap(), fs::read(&dec).unwrap())
}

#[test]
fn two_symbol_file_packs_into_one_byte() {
    let (encoded, decoded) = roundtrip_file(b"ab");
    // marker 0000001, then a=0 b=1
    assert_eq!(encoded, vec![0b0000_0101]);
    assert_eq!(decoded, b"ab".to_vec());
}

#[test]
fn single_symbol_file_roundtrips() {
    let (encoded, decoded) = roundtrip_file(b"aaaa");
    assert_eq!(encoded, vec![0b0001_1111]);
    assert_eq!(decoded, b"aaaa".to_vec());
}

#[test]
fn empty_file_encodes_to_marker_only() {
    let (encoded, decoded) = roundtrip_file(b"");
    assert_eq!(encoded, vec![0b0000_0001]);
    assert!(decoded.is_empty());
}

#[test]
fn multiline_text_keeps_whitespace() {
    let text = b"The quick brown fox\n\tjumps over  the lazy dog.\r\n\n";
    let (encoded, decoded) = roundtrip_file(text);
    assert_eq!(decoded, text.to_vec());
    assert!(encoded.len() < text.len());
}

#[test]
fn non_ascii_source_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("source.txt");
    fs::write(&src, "café").unwrap();
    assert!(matches!(
        HuffmanCoder::build(&src),
        Err(hufftext::Error::SymbolOutOfRange(0xC3))
    ));
}

#[test]
fn accessors_expose_each_stage() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("source.txt");
    fs::write(&src, "mississippi").unwrap();

    let coder = HuffmanCoder::build(&src).unwrap();
    let list = coder.sorted_list().unwrap();
    let tree = coder.tree().unwrap();
    let codes = coder.encodings().unwrap();

    assert_eq!(list.len(), 4);
    assert_eq!(tree.leaf_count(), 4);
    assert_eq!(codes.len(), 4);
    assert!((tree.root().unwrap().probability() - 1.0).abs() < 1e-12);
    // m+p (3/11) is merged with i (4/11) before s is taken from the source queue.
    assert_eq!(codes.code_string(b's').as_deref(), Some("0"));
    assert_eq!(codes.code_string(b'i').as_deref(), Some("11"));
    assert_eq!(codes.code_string(b'm').as_deref(), Some("100"));
    assert_eq!(codes.code_string(b'p').as_deref(), Some("101"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_file_roundtrip(text in prop::collection::vec(0u8..128, 0..200)) {
        let (_, decoded) = roundtrip_file(&text);
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn test_average_length_within_entropy_bound(
        text in prop::collection::vec(b'a'..=b'h', 2..400),
    ) {
        let freqs = FrequencyTable::from_text(&text, &CoderConfig::default()).unwrap();
        prop_assume!(freqs.iter().all(|e| e.probability > 0.0));
        let codes = CodeTable::from_tree(&HuffmanTree::from_frequencies(&freqs));

        let entropy: f64 = freqs
            .iter()
            .map(|e| -e.probability * e.probability.log2())
            .sum();
        let avg = codes.average_length(&freqs);
        prop_assert!(avg >= entropy - 1e-9);
        prop_assert!(avg < entropy + 1.0);
    }

    #[test]
    fn test_packed_length_matches_payload(text in prop::collection::vec(0u8..128, 1..200)) {
        let freqs = FrequencyTable::from_text(&text, &CoderConfig::default()).unwrap();
        let tree = HuffmanTree::from_frequencies(&freqs);
        let codes = CodeTable::from_tree(&tree);

        let bits = codes.encode(&text).unwrap();
        let packed = pack(&bits).unwrap();
        prop_assert_eq!(packed.len(), bits.len() / 8 + 1);
        prop_assert_eq!(tree.decode(&unpack(&packed).unwrap()).unwrap(), text);
    }
}
