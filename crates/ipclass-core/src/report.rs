//! Final per-run summary handed to presenters.

use serde::{Deserialize, Serialize};

/// The five counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Lines classified as IPv4, duplicates included.
    pub total_ipv4: u64,
    /// Lines classified as IPv6, duplicates included.
    pub total_ipv6: u64,
    /// Distinct IPv4 lines.
    pub unique_ipv4: u64,
    /// Distinct IPv6 lines.
    pub unique_ipv6: u64,
    /// Lines that matched neither grammar.
    pub invalid: u64,
}

impl Report {
    /// Number of lines the report accounts for.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.total_ipv4 + self.total_ipv6 + self.invalid
    }

    /// Serialize as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
