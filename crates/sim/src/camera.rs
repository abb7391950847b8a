//! Third-person follow camera math.

use engine_core::{Transform, Vec3};

/// Camera offset behind and above the drone, in actor-local space.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 2.0, -5.0);

/// Eye position and look-at target for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Pure function of the drone pose: the local offset rotated into world
/// space, looking back at the drone.
pub fn follow_camera(pose: &Transform) -> CameraPose {
    CameraPose {
        eye: pose.position + pose.rotation * FOLLOW_OFFSET,
        target: pose.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Quat;

    #[test]
    fn unrotated_drone_camera_sits_behind_and_above() {
        let pose = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
        let cam = follow_camera(&pose);
        assert_eq!(cam.eye, Vec3::new(10.0, 2.0, -5.0));
        assert_eq!(cam.target, pose.position);
    }

    #[test]
    fn offset_rotates_with_the_drone() {
        let pose = Transform::from_position_rotation(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::PI),
        );
        let cam = follow_camera(&pose);
        // Half a turn flips the local -Z offset onto +Z.
        assert!((cam.eye - Vec3::new(0.0, 2.0, 5.0)).length() < 1e-4);
    }
}
