//! Progress phase tracking for trip generation.
//!
//! The planning backend exposes no intermediate progress, so the front-end
//! shows a fixed sequence of phase labels advanced on a timer. The phase
//! animation and the real network request are two independent tasks; the
//! caller joins them once the request settles.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;

/// Phase labels shown while a plan is being generated, in display order.
pub const GENERATION_PHASES: [&str; 3] = [
    "Fetching flight details...",
    "Fetching hotel details...",
    "Combining results...",
];

/// How long the tracker dwells on each phase.
pub const PHASE_DWELL: Duration = Duration::from_millis(900);

/// Position in the phase sequence.
///
/// Transitions only move forward: `Idle` to `Active(0)` through
/// `Active(n-1)` to `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseState {
    /// No generation in progress.
    Idle,
    /// The phase at this index is active.
    Active(usize),
    /// The sequence finished or the operation failed; the indicator is gone.
    Hidden,
}

/// Drives the phase sequence and publishes state to any number of observers.
#[derive(Debug)]
pub struct ProgressTracker {
    labels: Vec<String>,
    dwell: Duration,
    tx: watch::Sender<PhaseState>,
}

impl ProgressTracker {
    /// Tracker over the standard generation phases at the standard cadence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_phases(GENERATION_PHASES, PHASE_DWELL)
    }

    /// Tracker over a custom label sequence and cadence.
    #[must_use]
    pub fn with_phases(
        labels: impl IntoIterator<Item = impl Into<String>>,
        dwell: Duration,
    ) -> Self {
        let (tx, _rx) = watch::channel(PhaseState::Idle);
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            dwell,
            tx,
        }
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PhaseState> {
        self.tx.subscribe()
    }

    /// Phase labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PhaseState {
        *self.tx.borrow()
    }

    /// Run the sequence once: every phase in order, ending hidden.
    ///
    /// Advances on the fixed cadence regardless of how the surrounding
    /// request is doing; the two settle independently.
    pub async fn run(&self) {
        for index in 0..self.labels.len() {
            self.tx.send_replace(PhaseState::Active(index));
            sleep(self.dwell).await;
        }
        self.tx.send_replace(PhaseState::Hidden);
    }

    /// Hide the indicator immediately (the operation failed or was
    /// abandoned).
    pub fn hide(&self) {
        self.tx.send_replace(PhaseState::Hidden);
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_tracker_uses_generation_phases() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.labels(), &GENERATION_PHASES);
        assert_eq!(tracker.state(), PhaseState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn run_visits_every_phase_in_order_then_hides() {
        let tracker = ProgressTracker::new();
        let mut rx = tracker.subscribe();

        let collector = async {
            let mut seen = Vec::new();
            loop {
                rx.changed().await.unwrap();
                let state = *rx.borrow();
                seen.push(state);
                if state == PhaseState::Hidden {
                    break;
                }
            }
            seen
        };

        let ((), seen) = tokio::join!(tracker.run(), collector);
        assert_eq!(
            seen,
            vec![
                PhaseState::Active(0),
                PhaseState::Active(1),
                PhaseState::Active(2),
                PhaseState::Hidden,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn run_ends_hidden_even_with_no_subscribers() {
        let tracker = ProgressTracker::with_phases(["one", "two"], Duration::from_millis(10));
        tracker.run().await;
        assert_eq!(tracker.state(), PhaseState::Hidden);
    }

    #[test]
    fn hide_jumps_straight_to_hidden() {
        let tracker = ProgressTracker::new();
        tracker.hide();
        assert_eq!(tracker.state(), PhaseState::Hidden);
    }
}
