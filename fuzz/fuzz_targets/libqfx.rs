#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Whatever parses must dump to text that parses back to the same document.
    if let Ok(document) = libqfx::parse(input) {
        let reparsed = libqfx::parse(&document.to_string()).expect("dumped document must parse");
        assert_eq!(document, reparsed);
    }
});
