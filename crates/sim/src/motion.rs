//! Kinematic motion integration from control axes.

use engine_core::{ControlAxes, Transform};

/// Flight speed tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTuning {
    /// World units per second at full translation intent.
    pub speed_multiplier: f32,
    /// Radians per second at full roll intent.
    pub rot_speed_multiplier: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            speed_multiplier: 120.0,
            rot_speed_multiplier: 170.0,
        }
    }
}

/// Advance the pose by one frame of control input.
///
/// Translation uses the local basis as it stands at the start of the tick;
/// the two roll rotations are then composed in local space, yaw-roll first,
/// pitch-roll second. Lift moves at half the translation speed.
///
/// No velocity carries across frames: each frame's displacement is a pure
/// function of the current axes. That "no inertia" behavior is intentional,
/// not a missing feature.
pub fn integrate(pose: &mut Transform, axes: &ControlAxes, dt: f32, tuning: &FlightTuning) {
    let forward = pose.forward();
    let up = pose.up();
    let right = pose.right();

    if axes.pitch != 0.0 {
        pose.translate(forward * (axes.pitch * dt * tuning.speed_multiplier));
    }
    if axes.lift != 0.0 {
        pose.translate(up * (axes.lift * dt * tuning.speed_multiplier / 2.0));
    }
    if axes.yaw != 0.0 {
        pose.translate(right * (axes.yaw * dt * tuning.speed_multiplier));
    }
    if axes.roll_y != 0.0 {
        pose.rotate_local_y(-axes.roll_y * dt * tuning.rot_speed_multiplier);
    }
    if axes.roll_x != 0.0 {
        pose.rotate_local_x(axes.roll_x * dt * tuning.rot_speed_multiplier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{Quat, Vec3};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn zero_axes_leave_pose_unchanged() {
        let axes = ControlAxes::default();
        let tuning = FlightTuning::default();
        for dt in [0.0, 0.001, 0.016, 1.0, 10.0] {
            let mut pose = Transform::from_position_rotation(
                Vec3::new(5.0, -2.0, 9.0),
                Quat::from_rotation_y(1.2),
            );
            let before = pose;
            integrate(&mut pose, &axes, dt, &tuning);
            assert_eq!(pose, before, "dt = {dt}");
        }
    }

    #[test]
    fn pitch_moves_along_local_forward() {
        let tuning = FlightTuning::default();
        let mut pose = Transform::default();
        let axes = ControlAxes {
            pitch: -0.1,
            ..Default::default()
        };
        integrate(&mut pose, &axes, 0.5, &tuning);
        // forward is -Z, so -0.1 * 0.5 * 120 = -6 units of forward = +6 on Z.
        assert!(approx(pose.position, Vec3::new(0.0, 0.0, 6.0)));
    }

    #[test]
    fn lift_uses_half_speed() {
        let tuning = FlightTuning::default();
        let mut pose = Transform::default();
        let axes = ControlAxes {
            lift: 0.1,
            ..Default::default()
        };
        integrate(&mut pose, &axes, 1.0, &tuning);
        assert!(approx(pose.position, Vec3::new(0.0, 6.0, 0.0)));
    }

    /// Translation must use the start-of-tick basis even when roll axes are
    /// active in the same tick.
    #[test]
    fn translation_ignores_same_tick_roll() {
        let tuning = FlightTuning::default();
        let mut pose = Transform::default();
        let forward_before = pose.forward();

        let axes = ControlAxes {
            pitch: -0.1,
            roll_y: 0.1,
            ..Default::default()
        };
        integrate(&mut pose, &axes, 0.1, &tuning);

        let expected = forward_before * (-0.1 * 0.1 * tuning.speed_multiplier);
        assert!(approx(pose.position, expected));
        // The rotation itself did change.
        assert_ne!(pose.rotation, Quat::IDENTITY);
    }

    /// Yaw-roll composes before pitch-roll.
    #[test]
    fn roll_order_is_yaw_then_pitch() {
        let tuning = FlightTuning {
            speed_multiplier: 120.0,
            rot_speed_multiplier: 1.0,
        };
        let mut pose = Transform::default();
        let axes = ControlAxes {
            roll_y: 0.1,
            roll_x: 0.1,
            ..Default::default()
        };
        integrate(&mut pose, &axes, 1.0, &tuning);

        let expected = Quat::IDENTITY * Quat::from_rotation_y(-0.1) * Quat::from_rotation_x(0.1);
        assert!(pose.rotation.abs_diff_eq(expected, 1e-5));
    }
}
