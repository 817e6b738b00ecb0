//! Fuzz both parse modes; any accepted input must round-trip through the
//! canonical formatter.

#![no_main]

use libfuzzer_sys::fuzz_target;

use uts_text::{format, parse_lenient, parse_strict};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Strict acceptance implies lenient acceptance with the same instant
    let strict = parse_strict(input);
    let lenient = parse_lenient(input);
    if let Ok(ts) = strict {
        assert_eq!(lenient, Ok(ts));
    }

    // Anything accepted must survive a format/parse cycle
    if let Ok(ts) = lenient {
        let canonical = format(ts, true);
        assert_eq!(parse_strict(&canonical), Ok(ts));
    }
});
