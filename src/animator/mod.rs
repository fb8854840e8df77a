//! Idle animator.
//!
//! Drives the face on a fixed period. Every tick draws the idle triggers,
//! applies the actions that fired, renders the face and settles transient
//! states so a blink lasts exactly one tick:
//!
//! ```text
//! sample triggers ──▶ apply actions ──▶ render ──▶ settle ──▶ sleep
//! ```
//!
//! The animator owns the face, the display and the sampler for its whole
//! lifetime. The loop only stops when the shared `running` flag is cleared
//! (or a tick limit is reached) and always clears the display on the way out.

pub mod behavior;
pub mod sampler;
pub mod stats;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::display::{Display, DisplayError};
use crate::face::{Face, LAYOUT};

// Re-export commonly used types
pub use behavior::{Behavior, BehaviorError, IdleAction, Profile, Trigger};
pub use sampler::{RandomSampler, Sampler, ScriptedSampler};
pub use stats::{AnimatorStats, StatsSnapshot};

/// Default time between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(200);

/// Drives a face with idle behavior.
pub struct IdleAnimator<D: Display, S: Sampler> {
    face: Face,
    display: D,
    sampler: S,
    behavior: Behavior,
    period: Duration,
    stats: AnimatorStats,
}

impl<D: Display, S: Sampler> IdleAnimator<D, S> {
    /// Create an animator with a fresh face and the default tick period.
    pub fn new(display: D, sampler: S, behavior: Behavior) -> Self {
        Self {
            face: Face::new(),
            display,
            sampler,
            behavior,
            period: DEFAULT_TICK_PERIOD,
            stats: AnimatorStats::new(),
        }
    }

    /// Set the time between ticks.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Power up the display: backlight on, then geometry.
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.display.set_backlight(true)?;
        self.display.initialize(LAYOUT.columns, LAYOUT.rows)?;
        tracing::info!(
            "Idle animator started ({} triggers, {}ms period)",
            self.behavior.triggers().len(),
            self.period.as_millis()
        );
        Ok(())
    }

    /// Run one tick without sleeping. Returns the actions that fired.
    pub fn tick(&mut self) -> Result<Vec<IdleAction>, DisplayError> {
        let fired = self.behavior.evaluate(&mut self.sampler);
        for &action in &fired {
            action.apply(&mut self.face);
            self.stats.record_action(action);
        }
        if !fired.is_empty() {
            tracing::debug!("Tick {}: {:?}", self.stats.ticks() + 1, fired);
        }

        self.face.render(&mut self.display)?;
        self.face.settle();
        self.stats.record_tick();

        Ok(fired)
    }

    /// Start the display and tick until `running` is cleared or `max_ticks`
    /// ticks have run, sleeping one period between ticks.
    ///
    /// The display is cleared before returning, also when a tick fails; the
    /// first error encountered is returned.
    pub fn run(&mut self, running: &AtomicBool, max_ticks: Option<u64>) -> Result<(), DisplayError> {
        let result = self.run_loop(running, max_ticks);

        match (result, self.shutdown()) {
            (Err(e), Err(cleanup)) => {
                tracing::error!("Could not clear display after failure: {}", cleanup);
                Err(e)
            }
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Ok(()), Ok(())) => Ok(()),
        }
    }

    fn run_loop(&mut self, running: &AtomicBool, max_ticks: Option<u64>) -> Result<(), DisplayError> {
        self.start()?;

        let mut ticks = 0u64;
        while running.load(Ordering::SeqCst) {
            self.tick()?;
            ticks += 1;

            if max_ticks.is_some_and(|max| ticks >= max) {
                tracing::info!("Tick limit of {} reached", ticks);
                break;
            }
            thread::sleep(self.period);
        }
        Ok(())
    }

    /// Blank the display.
    pub fn shutdown(&mut self) -> Result<(), DisplayError> {
        tracing::info!("Clearing display after {} ticks", self.stats.ticks());
        self.display.clear()
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Mutable access to the face, for driving expressions from outside.
    pub fn face_mut(&mut self) -> &mut Face {
        &mut self.face
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn stats(&self) -> &AnimatorStats {
        &self.stats
    }

    /// Take back the display and sampler.
    pub fn into_parts(self) -> (D, S) {
        (self.display, self.sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{DisplayOp, MemoryDisplay};
    use crate::face::FaceMode;

    fn animator(samples: Vec<f64>) -> IdleAnimator<MemoryDisplay, ScriptedSampler> {
        IdleAnimator::new(
            MemoryDisplay::recording(),
            ScriptedSampler::new(samples),
            Behavior::calm(),
        )
        .with_period(Duration::ZERO)
    }

    #[test]
    fn test_start_turns_on_backlight_then_geometry() {
        let mut animator = animator(vec![]);
        animator.start().unwrap();

        assert_eq!(
            animator.display().ops(),
            &[
                DisplayOp::Backlight(true),
                DisplayOp::Initialize { columns: 16, rows: 2 },
            ]
        );
    }

    #[test]
    fn test_blink_lasts_one_tick() {
        let mut animator = animator(vec![0.96, 0.0, 0.0, 0.0]);

        let fired = animator.tick().unwrap();
        assert_eq!(fired, vec![IdleAction::Blink]);
        assert_eq!(animator.display().char_at(5, 0), Some('-'));
        assert_eq!(animator.display().char_at(9, 0), Some('-'));
        assert_eq!(animator.face().mode(), FaceMode::Default);

        animator.tick().unwrap();
        assert_eq!(animator.display().char_at(5, 0), Some('o'));
        assert_eq!(animator.display().char_at(9, 0), Some('o'));
    }

    #[test]
    fn test_quiet_tick_renders_without_clearing() {
        let mut animator = animator(vec![]);
        animator.tick().unwrap();

        assert!(!animator.display().ops().contains(&DisplayOp::Clear));
        assert_eq!(animator.display().lines()[0], "   $ o   o $    ");
        assert_eq!(animator.display().lines()[1], "       -        ");
    }

    #[test]
    fn test_run_stops_at_tick_limit_and_clears() {
        let running = AtomicBool::new(true);
        let mut animator = animator(vec![]);

        animator.run(&running, Some(3)).unwrap();

        assert_eq!(animator.stats().ticks(), 3);
        assert_eq!(animator.display().ops().last(), Some(&DisplayOp::Clear));
        assert!(animator.display().lines().iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_run_clears_when_interrupted_before_first_tick() {
        let running = AtomicBool::new(false);
        let mut animator = animator(vec![]);

        animator.run(&running, None).unwrap();

        assert_eq!(animator.stats().ticks(), 0);
        assert_eq!(animator.display().ops().last(), Some(&DisplayOp::Clear));
    }

    #[test]
    fn test_headless_display_history_stays_empty_over_long_run() {
        let running = AtomicBool::new(true);
        let mut animator = IdleAnimator::new(
            MemoryDisplay::new(),
            RandomSampler::with_seed(1),
            Behavior::lively(),
        )
        .with_period(Duration::ZERO);

        animator.run(&running, Some(5000)).unwrap();

        assert_eq!(animator.stats().ticks(), 5000);
        assert!(animator.display().ops().is_empty());
    }
}
