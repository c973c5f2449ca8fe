//! Shared fixtures for the workspace-level integration tests.

/// Build a deterministic mixed corpus of `n` lines.
///
/// Roughly a third of the lines are dotted quads (some out of range), a third
/// are colon-hex addresses (some compressed or short), and the rest are
/// noise. Values repeat so that unique counts stay below totals.
#[must_use]
pub fn corpus(n: usize, seed: u64) -> Vec<String> {
    let mut state = seed | 1;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..n)
        .map(|_| {
            let r = next();
            let pick = |shift: u32, modulo: u64| (r >> shift) % modulo;
            match r % 9 {
                0..=2 => format!(
                    "{}.{}.{}.{}",
                    pick(8, 260),
                    pick(20, 4),
                    pick(28, 4),
                    pick(36, 4)
                ),
                3..=5 => format!(
                    "2001:db8:{:x}:0:0:0:{:x}:{:x}",
                    pick(8, 4),
                    pick(16, 8),
                    pick(24, 0x10000)
                ),
                6 => format!("fe80::{:x}", pick(8, 64)),
                7 => format!("1:2:3:4:5:6:{:x}", pick(8, 16)),
                _ => format!("host-{}.example", pick(8, 50)),
            }
        })
        .collect()
}
