//! Short-range directional probing against the terrain.
//!
//! Instead of testing every direction each frame, a round-robin schedule
//! casts one probe per check. The default schedule alternates between the
//! forward and down directions.

use crate::terrain::TerrainCollision;
use engine_core::{Quat, Vec3};

/// Default probe length in world units.
pub const DEFAULT_PROBE_LENGTH: f32 = 0.5;

/// Actor-local probe directions (right-handed, forward is negative Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeDirection {
    Forward,
    Back,
    Right,
    Left,
    Down,
}

impl ProbeDirection {
    /// Local-space unit vector for this direction.
    pub fn local_dir(self) -> Vec3 {
        match self {
            ProbeDirection::Forward => Vec3::new(0.0, 0.0, -1.0),
            ProbeDirection::Back => Vec3::new(0.0, 0.0, 1.0),
            ProbeDirection::Right => Vec3::new(1.0, 0.0, 0.0),
            ProbeDirection::Left => Vec3::new(-1.0, 0.0, 0.0),
            ProbeDirection::Down => Vec3::new(0.0, -1.0, 0.0),
        }
    }
}

/// A terrain hit within the probe length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    /// The local direction that was probed.
    pub direction: ProbeDirection,
    /// Distance to the terrain along the probe ray.
    pub distance: f32,
}

/// Rotating single-probe-per-frame collision scheduler.
///
/// The cursor advances before indexing, so with the default
/// `[Forward, Down]` schedule the first probed direction of a run is Down.
/// Sampling only a subset of directions per frame is a deliberate tradeoff:
/// fast lateral or diagonal approaches can slip between probes.
#[derive(Debug, Clone)]
pub struct CollisionProbe {
    directions: Vec<ProbeDirection>,
    cursor: usize,
    length: f32,
}

impl Default for CollisionProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionProbe {
    /// The default alternating forward/down schedule.
    pub fn new() -> Self {
        Self::with_schedule(
            vec![ProbeDirection::Forward, ProbeDirection::Down],
            DEFAULT_PROBE_LENGTH,
        )
    }

    /// A custom direction schedule and probe length.
    pub fn with_schedule(directions: Vec<ProbeDirection>, length: f32) -> Self {
        Self {
            directions,
            cursor: 0,
            length,
        }
    }

    /// Probe length in world units.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Rewind the schedule to its initial position. Called on run start so
    /// every run probes the same direction sequence.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Advance the schedule and cast the next probe from `position` in the
    /// scheduled direction rotated by `rotation`. Returns a hit when terrain
    /// lies within the probe length.
    pub fn check(
        &mut self,
        terrain: &TerrainCollision,
        position: Vec3,
        rotation: Quat,
    ) -> Option<ProbeHit> {
        if self.directions.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.directions.len();
        let direction = self.directions[self.cursor];
        let world_dir = (rotation * direction.local_dir()).normalize();

        terrain
            .raycast(position, world_dir, self.length)
            .map(|hit| ProbeHit {
                direction,
                distance: hit.distance,
            })
    }
}
