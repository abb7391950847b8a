//! Terrain collision queries using Rapier3D for Ridgerun.

pub mod probe;
pub mod terrain;

pub use probe::*;
pub use terrain::*;

// Re-export Rapier for downstream crates
pub use rapier3d;

// Re-export common Rapier types
pub use rapier3d::prelude::ColliderHandle;
