//! Reference course data: spawn pose and checkpoint layout.

use crate::checkpoint::Checkpoint;
use engine_core::{Quat, Transform, Vec3};

/// Fixed spawn position used at run start and after a crash or finish.
pub const SPAWN_POSITION: Vec3 = Vec3::new(63.0, -12.5, 36.0);

/// Spawn orientation: half a turn about +Y, facing back into the course.
pub fn spawn_rotation() -> Quat {
    Quat::from_rotation_y(std::f32::consts::PI)
}

/// The full spawn pose.
pub fn spawn_transform() -> Transform {
    Transform::from_position_rotation(SPAWN_POSITION, spawn_rotation())
}

/// The 15 reference checkpoints, ids "t0" through "t14", in authoring order.
/// Collection order is free; only the count matters for the win.
pub fn reference_checkpoints() -> Vec<Checkpoint> {
    const POSITIONS: [(f32, f32, f32); 15] = [
        (64.45, -15.1, 26.24),
        (65.75, -17.01, 4.65),
        (81.83, -18.98, -26.26),
        (53.79, -15.94, -13.38),
        (23.83, -3.35, 25.3),
        (10.21, 4.14, 29.88),
        (-2.79, -0.31, 33.47),
        (-17.61, -10.76, 7.53),
        (-10.51, -15.22, -18.98),
        (-1.38, -17.77, -38.71),
        (-7.44, -18.53, -50.75),
        (-49.14, -18.46, -52.1),
        (-65.96, -14.7, -25.38),
        (-76.32, -10.9, -1.36),
        (-65.34, -1.31, 36.26),
    ];

    POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &(x, y, z))| Checkpoint::new(format!("t{i}"), Vec3::new(x, y, z)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_course_has_fifteen_checkpoints_with_unique_ids() {
        let checkpoints = reference_checkpoints();
        assert_eq!(checkpoints.len(), 15);
        assert_eq!(checkpoints[0].id, "t0");
        assert_eq!(checkpoints[14].id, "t14");
        let mut ids: Vec<_> = checkpoints.iter().map(|c| c.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn spawn_faces_positive_z() {
        let spawn = spawn_transform();
        let forward = spawn.forward();
        assert!(forward.z > 0.99, "yaw pi turns -Z forward into +Z");
        assert!(forward.x.abs() < 1e-5);
    }
}
