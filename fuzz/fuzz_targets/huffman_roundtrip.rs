#![no_main]
use hufftext::bits::{pack, unpack};
use hufftext::{CoderConfig, CodeTable, FrequencyTable, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fold arbitrary bytes into the 128-symbol alphabet.
    let text: Vec<u8> = data.iter().map(|b| b & 0x7F).collect();

    let freqs = match FrequencyTable::from_text(&text, &CoderConfig::default()) {
        Ok(f) => f,
        Err(_) => return,
    };
    let tree = HuffmanTree::from_frequencies(&freqs);
    let codes = CodeTable::from_tree(&tree);

    let bits = codes.encode(&text).unwrap();
    let packed = pack(&bits).unwrap();
    let decoded = tree.decode(&unpack(&packed).unwrap()).unwrap();

    assert_eq!(text, decoded);
});
