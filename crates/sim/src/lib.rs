//! Simulation core for Ridgerun: drone flight, terrain probing, checkpoint
//! collection, and the run state machine.
//!
//! Everything in this crate is deterministic and free of windowing or GPU
//! state. The hosting shell feeds in control axes and a clock each tick and
//! reads back one `FrameSnapshot`; all mutable game state lives in
//! [`FlightSession`].

pub mod bounds;
pub mod camera;
pub mod checkpoint;
pub mod course;
pub mod drone;
pub mod hud;
pub mod motion;
pub mod session;
pub mod state;

pub use bounds::*;
pub use camera::*;
pub use checkpoint::*;
pub use course::*;
pub use drone::*;
pub use hud::*;
pub use motion::*;
pub use session::*;
pub use state::*;
