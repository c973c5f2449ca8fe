//! Syntactic validation of a single line against the dotted-quad (IPv4) and
//! full colon-hex (IPv6) grammars.
//!
//! Splitting follows line-reader semantics: a single trailing delimiter closes
//! the last segment instead of opening an empty one, so `1.2.3.4.` has four
//! segments and the empty string has none. Any other empty segment fails.
//! Zero-run compression (`::`) is not part of the colon-hex grammar.

use serde::{Deserialize, Serialize};

use crate::constants::{
    IPV4_DELIMITER, IPV4_MAX_SEGMENT_LEN, IPV4_MAX_SEGMENT_VALUE, IPV4_SEGMENTS,
    IPV6_DELIMITER, IPV6_MAX_SEGMENT_LEN, IPV6_SEGMENTS,
};

/// Outcome of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Ipv4,
    Ipv6,
    Invalid,
}

/// Returns `true` if `line` is four dot-separated decimal segments, each one to
/// three digits with a value in `0..=255`.
#[must_use]
pub fn is_ipv4(line: &str) -> bool {
    segments_match(line, IPV4_DELIMITER, IPV4_SEGMENTS, is_decimal_segment)
}

/// Returns `true` if `line` is eight colon-separated segments, each one to four
/// hex digits.
#[must_use]
pub fn is_ipv6(line: &str) -> bool {
    segments_match(line, IPV6_DELIMITER, IPV6_SEGMENTS, is_hex_segment)
}

/// Classify a line. The dotted-quad grammar is tried first, so a line is never
/// reported under both families.
#[must_use]
pub fn classify(line: &str) -> Classification {
    if is_ipv4(line) {
        Classification::Ipv4
    } else if is_ipv6(line) {
        Classification::Ipv6
    } else {
        Classification::Invalid
    }
}

/// Walk the segments of `line`, bailing out as soon as one is rejected or
/// the count goes past `expected`.
fn segments_match(
    line: &str,
    delimiter: char,
    expected: usize,
    accept: impl Fn(&str) -> bool,
) -> bool {
    let body = line.strip_suffix(delimiter).unwrap_or(line);
    let mut count = 0;
    for segment in body.split(delimiter) {
        count += 1;
        if count > expected || !accept(segment) {
            return false;
        }
    }
    count == expected
}

fn is_decimal_segment(segment: &str) -> bool {
    if segment.is_empty() || segment.len() > IPV4_MAX_SEGMENT_LEN {
        return false;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // At most three ASCII digits, so the parse cannot fail or go negative.
    segment
        .parse::<u16>()
        .is_ok_and(|value| value <= IPV4_MAX_SEGMENT_VALUE)
}

fn is_hex_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment.len() <= IPV6_MAX_SEGMENT_LEN
        && segment.bytes().all(|b| b.is_ascii_hexdigit())
}
