#![no_main]

use hexlist::domain::services::{split_lines, write_listing};
use hexlist::{annotate, OutputFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let expected = split_lines(content).count();

        for format in [OutputFormat::Text, OutputFormat::Json] {
            let mut out = Vec::new();
            let written = write_listing(&mut out, annotate(content), format)
                .expect("writing to a Vec cannot fail");
            assert_eq!(written, expected);
        }
    }
});
