//! Merging per-worker tallies into one global result.
//!
//! Two strategies share the [`MergeSink`] seam:
//!
//! - [`LockedAggregator`] guards the global state with a single mutex that
//!   covers both the counter sums and the set unions.
//! - [`ChannelAggregator`] owns the global state on one dedicated thread and
//!   receives tallies from [`ChannelSink`]s over a channel.
//!
//! Either way a merge is atomic with respect to other merges, and since sum
//! and union commute the final state does not depend on merge order.

use std::collections::HashSet;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::report::Report;
use crate::worker::Tally;

/// Aggregated state of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalResult<'a> {
    /// Sum of all tallies' IPv4 counts.
    pub ipv4: u64,
    /// Sum of all tallies' IPv6 counts.
    pub ipv6: u64,
    /// Sum of all tallies' invalid counts.
    pub invalid: u64,
    /// Union of all tallies' IPv4 sets.
    pub unique_ipv4: HashSet<&'a str>,
    /// Union of all tallies' IPv6 sets.
    pub unique_ipv6: HashSet<&'a str>,
    /// Number of tallies absorbed.
    pub merges: usize,
}

impl<'a> GlobalResult<'a> {
    /// Fold one tally into this result.
    pub fn absorb(&mut self, tally: Tally<'a>) {
        self.ipv4 += tally.ipv4;
        self.ipv6 += tally.ipv6;
        self.invalid += tally.invalid;
        union_into(&mut self.unique_ipv4, tally.unique_ipv4);
        union_into(&mut self.unique_ipv6, tally.unique_ipv6);
        self.merges += 1;
    }

    /// Number of lines accounted for.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.ipv4 + self.ipv6 + self.invalid
    }

    /// Reduce to the five reported counts.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            total_ipv4: self.ipv4,
            total_ipv6: self.ipv6,
            unique_ipv4: self.unique_ipv4.len() as u64,
            unique_ipv6: self.unique_ipv6.len() as u64,
            invalid: self.invalid,
        }
    }
}

/// Extend `into` with `from`, iterating whichever side is smaller.
fn union_into<'a>(into: &mut HashSet<&'a str>, mut from: HashSet<&'a str>) {
    if from.len() > into.len() {
        std::mem::swap(into, &mut from);
    }
    into.extend(from);
}

/// Destination for finished tallies.
pub trait MergeSink<'a>: Send + Sync {
    /// Hand over one worker's tally. Called exactly once per worker.
    fn merge(&self, tally: Tally<'a>);
}

/// Mutex-guarded aggregator.
#[derive(Debug, Default)]
pub struct LockedAggregator<'a> {
    state: Mutex<GlobalResult<'a>>,
}

impl<'a> LockedAggregator<'a> {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the current state.
    ///
    /// Only meaningful once every worker has merged; intermediate states are
    /// unspecified.
    #[must_use]
    pub fn snapshot(&self) -> GlobalResult<'a> {
        self.state.lock().clone()
    }

    /// Consume the aggregator and return its state. Taking `self` by value
    /// guarantees no merge is still in flight.
    #[must_use]
    pub fn into_result(self) -> GlobalResult<'a> {
        self.state.into_inner()
    }
}

impl<'a> MergeSink<'a> for LockedAggregator<'a> {
    fn merge(&self, tally: Tally<'a>) {
        let lines = tally.total();
        let mut state = self.state.lock();
        state.absorb(tally);
        debug!(lines, merges = state.merges, "merged tally");
    }
}

/// Create a connected sink/aggregator pair.
///
/// Run [`ChannelAggregator::run`] on its own thread, clone or share the sink
/// among workers, and drop every sink once they are done so the aggregator
/// sees the channel close.
#[must_use]
pub fn channel<'a>() -> (ChannelSink<'a>, ChannelAggregator<'a>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (ChannelSink { tx }, ChannelAggregator { rx })
}

/// Sending half used by workers.
#[derive(Debug, Clone)]
pub struct ChannelSink<'a> {
    tx: Sender<Tally<'a>>,
}

impl<'a> MergeSink<'a> for ChannelSink<'a> {
    fn merge(&self, tally: Tally<'a>) {
        if self.tx.send(tally).is_err() {
            warn!("aggregator is gone, dropping tally");
        }
    }
}

/// Receiving half that owns the global state.
#[derive(Debug)]
pub struct ChannelAggregator<'a> {
    rx: Receiver<Tally<'a>>,
}

impl<'a> ChannelAggregator<'a> {
    /// Merge tallies sequentially until every sink has been dropped.
    #[must_use]
    pub fn run(self) -> GlobalResult<'a> {
        let mut state = GlobalResult::default();
        for tally in self.rx {
            let lines = tally.total();
            state.absorb(tally);
            debug!(lines, merges = state.merges, "merged tally");
        }
        state
    }
}
