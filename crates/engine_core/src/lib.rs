//! Core engine types and utilities for Ridgerun.
//!
//! This crate provides the foundational types used across all systems:
//! - Transform and spatial helpers
//! - Time management
//! - Control-intent axes shared between input and simulation

pub mod axes;
pub mod time;
pub mod transform;

pub use axes::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
