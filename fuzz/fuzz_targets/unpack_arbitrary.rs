#![no_main]
use hufftext::bits::unpack;
use hufftext::{CoderConfig, CodeTable, FrequencyTable, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (source, packed) = data;
    let source: Vec<u8> = source.iter().map(|b| b & 0x7F).collect();

    let freqs = match FrequencyTable::from_text(&source, &CoderConfig::default()) {
        Ok(f) => f,
        Err(_) => return,
    };
    let tree = HuffmanTree::from_frequencies(&freqs);
    let codes = CodeTable::from_tree(&tree);

    // Arbitrary packed bytes may fail to decode, but must never panic.
    if let Ok(bits) = unpack(&packed) {
        if let Ok(text) = tree.decode(&bits) {
            assert_eq!(codes.encode(&text).unwrap(), bits);
        }
    }
});
