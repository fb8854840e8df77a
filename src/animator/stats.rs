//! Session statistics for the idle animator.
//!
//! Counts ticks and fired actions for the running session only; nothing is
//! written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::animator::behavior::IdleAction;

/// Per-session counters.
#[derive(Debug, Clone)]
pub struct AnimatorStats {
    /// Number of ticks completed
    ticks: u64,
    /// Fired count per action, indexed by `IdleAction::index`
    actions: [u64; IdleAction::COUNT],
    /// Session start time
    session_start: DateTime<Utc>,
}

impl AnimatorStats {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            actions: [0; IdleAction::COUNT],
            session_start: Utc::now(),
        }
    }

    /// Record a completed tick.
    pub fn record_tick(&mut self) {
        self.ticks += 1;
    }

    /// Record a fired action.
    pub fn record_action(&mut self, action: IdleAction) {
        self.actions[action.index()] += 1;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn action_count(&self, action: IdleAction) -> u64 {
        self.actions[action.index()]
    }

    /// Get a point-in-time snapshot.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            ticks: self.ticks,
            actions: IdleAction::ALL
                .iter()
                .map(|&a| (a, self.action_count(a)))
                .filter(|&(_, count)| count > 0)
                .collect(),
            session_start: self.session_start,
            session_duration_secs: (Utc::now() - self.session_start).num_seconds().max(0) as u64,
        }
    }

    /// Get a summary string for display.
    pub fn summary(&self) -> String {
        let stats = self.snapshot();
        let mut out = format!(
            "Session Statistics:\n\
             - Ticks: {}\n\
             - Session duration: {} seconds\n\
             - Actions fired:",
            stats.ticks, stats.session_duration_secs
        );

        if stats.actions.is_empty() {
            out.push_str(" none");
        }
        for (action, count) in &stats.actions {
            out.push_str(&format!("\n    {action}: {count}"));
        }
        out
    }
}

impl Default for AnimatorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of animator statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub ticks: u64,
    /// Actions that fired at least once, in application order
    pub actions: Vec<(IdleAction, u64)>,
    pub session_start: DateTime<Utc>,
    pub session_duration_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counting() {
        let mut stats = AnimatorStats::new();

        stats.record_tick();
        stats.record_tick();
        stats.record_action(IdleAction::Blink);
        stats.record_action(IdleAction::Blink);
        stats.record_action(IdleAction::Smile);

        assert_eq!(stats.ticks(), 2);
        assert_eq!(stats.action_count(IdleAction::Blink), 2);
        assert_eq!(stats.action_count(IdleAction::Wink), 0);

        let snapshot = stats.snapshot();
        assert_eq!(
            snapshot.actions,
            vec![(IdleAction::Blink, 2), (IdleAction::Smile, 1)]
        );
    }

    #[test]
    fn test_summary_format() {
        let mut stats = AnimatorStats::new();
        assert!(stats.summary().contains("Actions fired: none"));

        stats.record_tick();
        stats.record_action(IdleAction::StopWinking);
        let summary = stats.summary();

        assert!(summary.contains("Ticks: 1"));
        assert!(summary.contains("stop_winking: 1"));
    }
}
