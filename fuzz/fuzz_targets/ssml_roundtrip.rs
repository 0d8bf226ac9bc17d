#![no_main]
use libfuzzer_sys::fuzz_target;
use ssmlparse::{formatter::SsmlFormatter, parse, FormatConfig, Formatter};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(document) = parse(s) {
            let output = SsmlFormatter.format(&document, &FormatConfig::compact());
            let reparsed = parse(&output);
            assert_eq!(reparsed.ok(), Some(document));
        }
    }
});
