//! Checkpoint collection tracking and the win condition.

use engine_core::Vec3;

/// Radius of a checkpoint volume.
pub const CHECKPOINT_RADIUS: f32 = 1.0;

/// One collectible checkpoint. Position is fixed for the lifetime of the
/// course; only the `collected` flag changes, and only through the tracker.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub id: String,
    pub position: Vec3,
    pub collected: bool,
}

impl Checkpoint {
    pub fn new(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            collected: false,
        }
    }
}

/// Tracks which checkpoints the drone has passed through.
#[derive(Debug, Clone)]
pub struct CheckpointTracker {
    checkpoints: Vec<Checkpoint>,
    /// Sum of actor and checkpoint radii; collection is strictly inside.
    collect_distance: f32,
}

impl CheckpointTracker {
    pub fn new(checkpoints: Vec<Checkpoint>, actor_radius: f32) -> Self {
        Self {
            checkpoints,
            collect_distance: actor_radius + CHECKPOINT_RADIUS,
        }
    }

    /// Mark every uncollected checkpoint within collection distance of the
    /// actor. Returns the ids newly collected this tick; re-entering an
    /// already-collected volume is a no-op.
    pub fn update(&mut self, actor_position: Vec3) -> Vec<String> {
        let mut collected = Vec::new();
        for checkpoint in &mut self.checkpoints {
            if !checkpoint.collected
                && checkpoint.position.distance(actor_position) < self.collect_distance
            {
                checkpoint.collected = true;
                collected.push(checkpoint.id.clone());
            }
        }
        collected
    }

    pub fn collected_count(&self) -> usize {
        self.checkpoints.iter().filter(|c| c.collected).count()
    }

    pub fn total(&self) -> usize {
        self.checkpoints.len()
    }

    /// Win condition: every checkpoint collected. An empty course never
    /// wins, which also guards the not-yet-configured case.
    pub fn all_collected(&self) -> bool {
        !self.checkpoints.is_empty() && self.checkpoints.iter().all(|c| c.collected)
    }

    /// Clear every collected flag.
    pub fn reset(&mut self) {
        for checkpoint in &mut self.checkpoints {
            checkpoint.collected = false;
        }
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
}
