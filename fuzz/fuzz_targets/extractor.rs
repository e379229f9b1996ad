#![no_main]

use libfuzzer_sys::fuzz_target;

use stickerboard::extractor::{MarkupParser, ScraperParser, extract, parse_dimension};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Neither stage may panic on arbitrary input
    let _ = parse_dimension(&text);
    if let Ok(root) = ScraperParser.parse(&text) {
        let _ = extract(&root);
    }
});
