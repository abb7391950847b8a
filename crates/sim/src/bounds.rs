//! Axis-aligned play volume check.

use engine_core::Vec3;

/// Rectangular playable area on the XZ plane. There is no vertical bound;
/// the terrain below and probe collisions cap the usable altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for PlayBounds {
    fn default() -> Self {
        Self::reference()
    }
}

impl PlayBounds {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Bounds of the reference course.
    pub fn reference() -> Self {
        Self::new(-81.0, 91.0, -56.0, 41.0)
    }

    /// True when the position has left the play volume. Inequalities are
    /// strict: a position exactly on the boundary is still in bounds.
    pub fn is_out_of_bounds(&self, position: Vec3) -> bool {
        position.x > self.max_x
            || position.x < self.min_x
            || position.z > self.max_z
            || position.z < self.min_z
    }
}
