//! Fuzz target for message segmentation.
//!
//! Feeds arbitrary text and arbitrary (hostile) highlight ranges through the
//! full sanitize-and-segment pipeline and checks the partition invariant.

#![no_main]

use charade_ui::highlight::{Highlight, segment_message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, Vec<(i64, i64)>)| {
    let (text, pairs) = input;
    let raw: Vec<Highlight> = pairs
        .into_iter()
        .map(|(start, end)| Highlight::new(start, end))
        .collect();

    let spans = segment_message(&text, &raw);

    // Spans must reproduce the message exactly, whatever the ranges were.
    let joined: String = spans.iter().map(|s| s.text).collect();
    assert_eq!(joined, text);
});
