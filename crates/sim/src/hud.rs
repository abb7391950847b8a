//! HUD text models and overlay selection for the presentation adapter.

use crate::state::RunPhase;
use std::time::Duration;

/// Per-tick HUD data. The shell turns this into whatever text surface it
/// has available.
#[derive(Debug, Clone, PartialEq)]
pub struct HudModel {
    /// Time since run start (frozen at the last finish once not Running).
    pub elapsed: Duration,
    pub collected: usize,
    pub total: usize,
    pub best: Option<Duration>,
}

impl HudModel {
    pub fn time_text(&self) -> String {
        format!("Time: {:.2}s", self.elapsed.as_secs_f64())
    }

    pub fn targets_text(&self) -> String {
        format!("Targets: {} / {}", self.collected, self.total)
    }

    /// "NAN" placeholder until a first run finishes, as in the reference HUD.
    pub fn best_text(&self) -> String {
        match self.best {
            Some(best) => format!("Best Run Time: {:.2}s", best.as_secs_f64()),
            None => "Best Run Time: NAN".to_string(),
        }
    }
}

/// Which full-screen overlay the shell should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Start,
    Death,
    Completion,
}

/// Overlay for the current phase; none while Running.
pub fn overlay_for_phase(phase: RunPhase) -> Option<Overlay> {
    match phase {
        RunPhase::Idle => Some(Overlay::Start),
        RunPhase::Running => None,
        RunPhase::Crashed => Some(Overlay::Death),
        RunPhase::Completed => Some(Overlay::Completion),
    }
}

/// Completion overlay message, built from the finish time of the run that
/// just ended.
pub fn completion_message(finish: Duration) -> String {
    format!(
        "What a skilled player!\nYou finished the race in {:.2}s!\nClick to Play Again",
        finish.as_secs_f64()
    )
}
