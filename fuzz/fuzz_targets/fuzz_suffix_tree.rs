#![no_main]

use arbitrary::Arbitrary;
use fts::index::{NaiveIndex, SuffixTree};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    queries: Vec<String>,
}

fuzz_target!(|input: Input| {
    let tree = SuffixTree::new(&input.text);
    let scan = NaiveIndex::new(input.text.as_str());

    let len = input.text.chars().count();
    assert_eq!(tree.leaf_count(), len + 1);

    for query in input.queries.iter().take(16) {
        assert_eq!(tree.find_offsets(query), scan.find_offsets(query));
    }

    // Every suffix of the text must be found where it starts
    for (offset, (byte, _)) in input.text.char_indices().enumerate().take(32) {
        assert!(tree.find_offsets(&input.text[byte..]).contains(&offset));
    }
});
