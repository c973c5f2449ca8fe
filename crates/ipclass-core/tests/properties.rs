//! Property-based tests for the validator, partitioner and aggregator.

use proptest::prelude::*;

use ipclass_core::aggregator::GlobalResult;
use ipclass_core::partition::{chunks, partition};
use ipclass_core::validator::{classify, is_ipv4, is_ipv6, Classification};
use ipclass_core::worker::process;

/// Lines biased towards both grammars so that all three outcomes show up.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u16..300, 0u16..300, 0u16..300, 0u16..300)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
        prop::collection::vec("[0-9a-fA-F]{1,5}", 6..10).prop_map(|s| s.join(":")),
        "[0-9a-z.:]{0,20}",
        ".*",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// No line matches both grammars, and `classify` agrees with them.
    #[test]
    fn grammars_are_exclusive(line in line_strategy()) {
        let v4 = is_ipv4(&line);
        let v6 = is_ipv6(&line);
        prop_assert!(!(v4 && v6), "{:?} matched both grammars", line);

        let expected = if v4 {
            Classification::Ipv4
        } else if v6 {
            Classification::Ipv6
        } else {
            Classification::Invalid
        };
        prop_assert_eq!(classify(&line), expected);
    }

    /// Dotted quads are valid exactly when every octet is at most 255.
    #[test]
    fn ipv4_range_rule(a in 0u16..1000, b in 0u16..256, c in 0u16..256, d in 0u16..256) {
        let line = format!("{a}.{b}.{c}.{d}");
        prop_assert_eq!(is_ipv4(&line), a <= 255);
    }

    /// One trailing dot is accepted, two are not.
    #[test]
    fn ipv4_single_trailing_dot(a in 0u16..256, b in 0u16..256, c in 0u16..256, d in 0u16..256) {
        let line = format!("{a}.{b}.{c}.{d}");
        let single = format!("{line}.");
        let double = format!("{line}..");
        prop_assert!(is_ipv4(&single));
        prop_assert!(!is_ipv4(&double));
    }

    /// Eight hex groups of 1..=4 digits are always IPv6.
    #[test]
    fn full_ipv6_accepted(groups in prop::collection::vec(0u16..=u16::MAX, 8)) {
        let line = groups.iter().map(|g| format!("{g:x}")).collect::<Vec<_>>().join(":");
        prop_assert!(is_ipv6(&line));
        prop_assert_eq!(classify(&line), Classification::Ipv6);
    }

    /// Partition ranges tile the input for any length and worker count.
    #[test]
    fn partition_tiles(len in 0usize..5000, workers in 1usize..64) {
        let ranges = partition(len, workers);
        prop_assert_eq!(ranges.len(), workers);
        let covered: usize = ranges.iter().map(std::ops::Range::len).sum();
        prop_assert_eq!(covered, len);
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    /// Splitting into chunks and merging gives the same result as one tally.
    #[test]
    fn chunked_merge_matches_single_pass(
        lines in prop::collection::vec(line_strategy(), 0..200),
        workers in 1usize..16,
    ) {
        let mut single = GlobalResult::default();
        single.absorb(process(&lines));

        let mut merged = GlobalResult::default();
        for chunk in chunks(&lines, workers) {
            merged.absorb(process(chunk));
        }

        prop_assert_eq!(merged.report(), single.report());
        prop_assert_eq!(merged.total(), lines.len() as u64);
        prop_assert!(merged.unique_ipv4.len() as u64 <= merged.ipv4);
        prop_assert!(merged.unique_ipv6.len() as u64 <= merged.ipv6);
        prop_assert!(merged.unique_ipv4.is_disjoint(&merged.unique_ipv6));
    }
}
