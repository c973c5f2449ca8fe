//! Per-worker classification of one chunk.

use std::collections::HashSet;

use crate::validator::{classify, Classification};

/// Counts and uniqueness sets accumulated by one worker.
///
/// The sets borrow from the input lines, so a tally never outlives the data
/// it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally<'a> {
    /// Lines that matched the dotted-quad grammar.
    pub ipv4: u64,
    /// Lines that matched the colon-hex grammar.
    pub ipv6: u64,
    /// Lines that matched neither grammar.
    pub invalid: u64,
    /// Distinct IPv4 lines.
    pub unique_ipv4: HashSet<&'a str>,
    /// Distinct IPv6 lines.
    pub unique_ipv6: HashSet<&'a str>,
}

impl<'a> Tally<'a> {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and record it. Invalid lines are counted but not
    /// kept.
    pub fn record(&mut self, line: &'a str) -> Classification {
        let class = classify(line);
        match class {
            Classification::Ipv4 => {
                self.ipv4 += 1;
                self.unique_ipv4.insert(line);
            }
            Classification::Ipv6 => {
                self.ipv6 += 1;
                self.unique_ipv6.insert(line);
            }
            Classification::Invalid => self.invalid += 1,
        }
        class
    }

    /// Number of lines recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.ipv4 + self.ipv6 + self.invalid
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Classify every line of `chunk` into a fresh tally.
///
/// Runs without touching any shared state; the caller hands the result to an
/// aggregator afterwards.
pub fn process<S: AsRef<str>>(chunk: &[S]) -> Tally<'_> {
    let mut tally = Tally::new();
    for line in chunk {
        tally.record(line.as_ref());
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chunk_yields_zero_tally() {
        let chunk: [&str; 0] = [];
        let tally = process(&chunk);
        assert!(tally.is_empty());
        assert!(tally.unique_ipv4.is_empty());
        assert!(tally.unique_ipv6.is_empty());
    }

    #[test]
    fn duplicates_count_but_are_unique_once() {
        let chunk = ["10.0.0.1", "10.0.0.1", "10.0.0.2"];
        let tally = process(&chunk);
        assert_eq!(tally.ipv4, 3);
        assert_eq!(tally.unique_ipv4.len(), 2);
    }

    #[test]
    fn invalid_lines_are_not_kept() {
        let chunk = ["nope", "", "1.2.3"];
        let tally = process(&chunk);
        assert_eq!(tally.invalid, 3);
        assert!(tally.unique_ipv4.is_empty());
        assert!(tally.unique_ipv6.is_empty());
    }

    #[test]
    fn mixed_chunk_conserves_total() {
        let chunk: Vec<String> = vec![
            "192.168.1.1".into(),
            "192.168.1.1".into(),
            "10.0.0.256".into(),
            "2001:0db8:0000:0042:0000:8a2e:0370:7334".into(),
            "not.an.ip".into(),
            String::new(),
        ];
        let tally = process(&chunk);
        assert_eq!(tally.ipv4, 2);
        assert_eq!(tally.ipv6, 1);
        assert_eq!(tally.invalid, 3);
        assert_eq!(tally.total(), chunk.len() as u64);
        assert_eq!(tally.unique_ipv4.len(), 1);
        assert_eq!(tally.unique_ipv6.len(), 1);
    }

    #[test]
    fn record_returns_classification() {
        let mut tally = Tally::new();
        assert_eq!(tally.record("1:2:3:4:5:6:7:8"), Classification::Ipv6);
        assert_eq!(tally.record("1.1.1.1"), Classification::Ipv4);
        assert_eq!(tally.record("x"), Classification::Invalid);
        assert_eq!(tally.total(), 3);
    }
}
