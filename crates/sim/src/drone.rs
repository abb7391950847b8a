//! The player-controlled drone actor.

use crate::course;
use engine_core::Transform;

/// Collision radius used for checkpoint collection.
pub const DRONE_RADIUS: f32 = 1.0;

/// Presentation scale for the drone model. Never affects simulation radii.
pub const DRONE_MODEL_SCALE: f32 = 0.05;

/// The single controllable actor.
///
/// Created once when its model finishes loading; repositioned on crash or
/// finish, never destroyed. Its collection radius is [`DRONE_RADIUS`].
#[derive(Debug, Clone)]
pub struct Drone {
    pub transform: Transform,
}

impl Drone {
    /// Create the drone at the spawn pose.
    pub fn at_spawn() -> Self {
        Self {
            transform: course::spawn_transform(),
        }
    }

    /// Reset position and orientation to the spawn pose. Scale is left
    /// alone (presentation only).
    pub fn reset_to_spawn(&mut self) {
        let spawn = course::spawn_transform();
        self.transform.position = spawn.position;
        self.transform.rotation = spawn.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Vec3;

    #[test]
    fn reset_restores_spawn_pose_but_keeps_scale() {
        let mut drone = Drone::at_spawn();
        drone.transform.position = Vec3::new(1.0, 2.0, 3.0);
        drone.transform.rotate_local_x(0.7);
        drone.transform.scale = Vec3::splat(DRONE_MODEL_SCALE);

        drone.reset_to_spawn();
        assert_eq!(drone.transform.position, course::SPAWN_POSITION);
        assert_eq!(drone.transform.rotation, course::spawn_rotation());
        assert_eq!(drone.transform.scale, Vec3::splat(DRONE_MODEL_SCALE));
    }
}
