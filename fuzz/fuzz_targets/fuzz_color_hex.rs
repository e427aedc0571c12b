//! Fuzz target for color hex parsing.
//!
//! Tests that Rgba::from_hex handles arbitrary strings without panicking.

#![no_main]

use charade_ui::color::Rgba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Try to parse the string as a hex color
    // This should never panic, just return None for invalid input
    let _ = Rgba::from_hex(data);

    // Also try with a # prefix if not already present
    if !data.starts_with('#') {
        let with_hash = format!("#{data}");
        let _ = Rgba::from_hex(&with_hash);
    }
});
