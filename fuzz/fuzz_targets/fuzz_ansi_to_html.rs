#![no_main]

use libfuzzer_sys::fuzz_target;
use logview::AnsiConverter;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = AnsiConverter::new().convert(text);
        let _ = AnsiConverter::new().with_html_escaping(true).convert(text);
    }
});
