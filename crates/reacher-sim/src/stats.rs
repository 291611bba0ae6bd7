//! Run statistics.
//!
//! [`SimStats`] counts frames, commands and settles, and remembers the frame
//! at which the arm last came to rest.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// SimStats
// ---------------------------------------------------------------------------

/// Bevy resource with cumulative loop statistics.
#[derive(Resource, Clone, Debug)]
pub struct SimStats {
    /// Animation frames run so far.
    pub frames: u64,
    /// Commands the controller accepted.
    pub accepted: u32,
    /// Commands the controller rejected.
    pub rejected: u32,
    /// Moving → settled transitions so far.
    pub settles: u32,
    /// Frame of the most recent moving → settled transition.
    last_settle_frame: Option<u64>,
    /// Human-readable result of the most recent command.
    pub last_outcome: Option<String>,
    /// Whether the arm was settled after the previous frame (edge detection).
    was_settled: bool,
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStats {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            accepted: 0,
            rejected: 0,
            settles: 0,
            last_settle_frame: None,
            last_outcome: None,
            was_settled: true,
        }
    }

    /// Record one animated frame. Returns `true` on a moving → settled edge.
    pub fn record_frame(&mut self, settled: bool) -> bool {
        self.frames += 1;
        let just_settled = settled && !self.was_settled;
        if just_settled {
            self.settles += 1;
            self.last_settle_frame = Some(self.frames);
        }
        self.was_settled = settled;
        just_settled
    }

    pub fn record_accepted(&mut self, outcome: impl ToString) {
        self.accepted += 1;
        self.last_outcome = Some(outcome.to_string());
    }

    pub fn record_rejected(&mut self, error: impl ToString) {
        self.rejected += 1;
        self.last_outcome = Some(error.to_string());
    }

    /// Frame at which the most recent move settled.
    pub const fn last_settle_frame(&self) -> Option<u64> {
        self.last_settle_frame
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_default_empty() {
        let stats = SimStats::new();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.accepted, 0);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.settles, 0);
        assert!(stats.last_outcome.is_none());
        assert!(stats.last_settle_frame().is_none());
    }

    #[test]
    fn settle_edge_recorded_once() {
        let mut stats = SimStats::new();
        assert!(!stats.record_frame(true));
        assert!(!stats.record_frame(false));
        assert!(!stats.record_frame(false));
        assert!(stats.record_frame(true));
        assert!(!stats.record_frame(true));

        assert_eq!(stats.frames, 5);
        assert_eq!(stats.settles, 1);
        assert_eq!(stats.last_settle_frame(), Some(4));
    }

    #[test]
    fn repeated_settles_keep_only_the_latest_frame() {
        let mut stats = SimStats::new();
        for _ in 0..1000 {
            stats.record_frame(false);
            stats.record_frame(true);
        }
        assert_eq!(stats.settles, 1000);
        assert_eq!(stats.last_settle_frame(), Some(2000));
    }

    #[test]
    fn outcomes_counted() {
        let mut stats = SimStats::new();
        stats.record_accepted("ok");
        stats.record_rejected("nope");
        stats.record_rejected("still nope");
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.last_outcome.as_deref(), Some("still nope"));
    }

    #[test]
    fn reset_clears_stats() {
        let mut stats = SimStats::new();
        stats.record_frame(false);
        stats.record_frame(true);
        stats.record_accepted("ok");
        stats.reset();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.settles, 0);
        assert!(stats.last_settle_frame().is_none());
        assert!(stats.last_outcome.is_none());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn stats_is_send_sync() {
        assert_send_sync::<SimStats>();
    }
}
