//! Asset loading for Ridgerun: glTF mesh extraction and a background loader
//! with poll-based completion.

pub mod loader;
pub mod mesh;

pub use loader::*;
pub use mesh::*;
