#![no_main]

use libfuzzer_sys::fuzz_target;

use ipclass_core::validator::{classify, is_ipv4, is_ipv6, Classification};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let v4 = is_ipv4(line);
    let v6 = is_ipv6(line);
    assert!(!(v4 && v6), "line matched both grammars: {line:?}");

    match classify(line) {
        Classification::Ipv4 => assert!(v4),
        Classification::Ipv6 => assert!(v6 && !v4),
        Classification::Invalid => assert!(!v4 && !v6),
    }
});
