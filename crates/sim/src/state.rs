//! Run lifecycle state machine and timing.

use std::time::Duration;

/// Lifecycle phase of the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    /// Waiting for the start trigger; the pipeline does not step.
    #[default]
    Idle,
    /// Full per-tick pipeline active.
    Running,
    /// Terminal for this run; an explicit restart is required.
    Crashed,
    /// Terminal for this run; an explicit restart is required.
    Completed,
}

/// Phase and timing for the session.
///
/// `best` survives resets within the session but is never persisted to disk.
/// All timestamps are durations on the caller's clock (the shell passes the
/// engine's elapsed time), which keeps the machine deterministic in tests.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    phase: RunPhase,
    started_at: Duration,
    last_finish: Option<Duration>,
    best: Option<Duration>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Begin a run. Valid from Idle, Crashed, or Completed; a trigger while
    /// Running is silently ignored. Returns whether the run started.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.phase == RunPhase::Running {
            return false;
        }
        self.phase = RunPhase::Running;
        self.started_at = now;
        true
    }

    /// Running -> Crashed. Ignored in any other phase.
    pub fn crash(&mut self) {
        if self.phase == RunPhase::Running {
            self.phase = RunPhase::Crashed;
        }
    }

    /// Running -> Completed. Records the finish time and updates the best on
    /// strict improvement. Returns the finish duration and whether it set a
    /// new best.
    pub fn complete(&mut self, now: Duration) -> (Duration, bool) {
        let finish = now.saturating_sub(self.started_at);
        self.last_finish = Some(finish);
        let new_best = self.best.map_or(true, |best| finish < best);
        if new_best {
            self.best = Some(finish);
        }
        self.phase = RunPhase::Completed;
        (finish, new_best)
    }

    /// Time since the current run started.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Finish time of the most recently completed run.
    pub fn last_finish(&self) -> Option<Duration> {
        self.last_finish
    }

    /// Best finish time this session.
    pub fn best(&self) -> Option<Duration> {
        self.best
    }
}
