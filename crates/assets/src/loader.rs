//! Background asset loading with poll-based completion.
//!
//! Loading is fire-and-forget: each request runs on its own thread and
//! reports through a channel the shell drains once per tick. Failures are
//! delivered as results, never panics, so the game loop keeps running (in a
//! perpetual "not ready" state) when a model is missing.

use crate::mesh::{load_meshes, AssetError, MeshData};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Which model a load request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Drone,
    Terrain,
}

/// Completion message from a loader thread.
#[derive(Debug)]
pub struct AssetResult {
    pub kind: AssetKind,
    pub outcome: Result<Vec<MeshData>, AssetError>,
}

/// Asynchronous model loader.
pub struct AssetLoader {
    tx: Sender<AssetResult>,
    rx: Receiver<AssetResult>,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Start loading a model in the background.
    pub fn request(&self, kind: AssetKind, path: PathBuf) {
        log::info!("Loading {:?} model from {:?}", kind, path);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = load_meshes(&path);
            // A closed receiver means the shell is shutting down.
            let _ = tx.send(AssetResult { kind, outcome });
        });
    }

    /// Drain any completed loads without blocking.
    pub fn poll(&self) -> Vec<AssetResult> {
        self.rx.try_iter().collect()
    }
}
