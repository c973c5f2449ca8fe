//! Grammar limits and process exit codes.

/// Segment delimiter of the dotted-quad grammar.
pub const IPV4_DELIMITER: char = '.';

/// Number of segments in a dotted-quad address.
pub const IPV4_SEGMENTS: usize = 4;

/// Maximum digits in one dotted-quad segment.
pub const IPV4_MAX_SEGMENT_LEN: usize = 3;

/// Largest value a dotted-quad segment may hold.
pub const IPV4_MAX_SEGMENT_VALUE: u16 = 255;

/// Segment delimiter of the colon-hex grammar.
pub const IPV6_DELIMITER: char = ':';

/// Number of segments in a full (uncompressed) colon-hex address.
pub const IPV6_SEGMENTS: usize = 8;

/// Maximum hex digits in one colon-hex segment.
pub const IPV6_MAX_SEGMENT_LEN: usize = 4;

/// Input file read when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "ip_addresses.txt";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The input source could not be opened or read.
    pub const ERROR_INPUT: i32 = 2;
    /// Sequential and parallel reports did not match during verification.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
