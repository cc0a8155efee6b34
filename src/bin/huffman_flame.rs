use hufftext::bits::{pack, unpack};
use hufftext::{CoderConfig, CodeTable, FrequencyTable, HuffmanTree};

fn main() {
    let text: Vec<u8> = (0..100_000u32)
        .map(|i| b"etaoin shrdlu\n"[((i * 7 + i / 3) % 14) as usize])
        .collect();

    for _ in 0..200 {
        let freqs = FrequencyTable::from_text(&text, &CoderConfig::default()).unwrap();
        let tree = HuffmanTree::from_frequencies(&freqs);
        let codes = CodeTable::from_tree(&tree);

        let packed = pack(&codes.encode(&text).unwrap()).unwrap();
        let decoded = tree.decode(&unpack(&packed).unwrap()).unwrap();
        assert_eq!(decoded.len(), text.len());
    }
}
