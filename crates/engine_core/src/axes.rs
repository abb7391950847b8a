//! Control-intent axes shared between the input layer and the simulation core.

/// Default per-axis bound. Keys step to the full bound; cursor-driven roll
/// scales up to it.
pub const AXIS_LIMIT: f32 = 0.1;

/// Normalized control intent for the drone, one value per axis.
///
/// The input layer writes these from key and cursor events; the simulation
/// core only reads them. Every value is expected to stay within
/// `[-AXIS_LIMIT, AXIS_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlAxes {
    /// Translation intent along the local forward axis (negative = forward).
    pub pitch: f32,
    /// Translation intent along the local right axis.
    pub yaw: f32,
    /// Rotation intent about the local Y axis (cursor horizontal).
    pub roll_y: f32,
    /// Rotation intent about the local X axis (cursor vertical).
    pub roll_x: f32,
    /// Translation intent along the local up axis.
    pub lift: f32,
}

impl ControlAxes {
    /// True when every axis is exactly zero (no input this frame).
    pub fn is_zero(&self) -> bool {
        self.pitch == 0.0
            && self.yaw == 0.0
            && self.roll_y == 0.0
            && self.roll_x == 0.0
            && self.lift == 0.0
    }
}

/// Clamp a single axis value to `[-limit, limit]`.
pub fn clamp_axis(value: f32, limit: f32) -> f32 {
    value.clamp(-limit, limit)
}
