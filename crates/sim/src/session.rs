//! The session context and per-tick simulation pipeline.

use engine_core::{ControlAxes, Transform};
use physics::{CollisionProbe, ProbeDirection, TerrainCollision};
use std::time::Duration;

use crate::bounds::PlayBounds;
use crate::camera::{follow_camera, CameraPose};
use crate::checkpoint::{Checkpoint, CheckpointTracker};
use crate::course;
use crate::drone::{Drone, DRONE_RADIUS};
use crate::hud::{overlay_for_phase, HudModel, Overlay};
use crate::motion::{integrate, FlightTuning};
use crate::state::{RunPhase, RunState};

/// Why a run ended in a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// The rotating probe found terrain within the probe length.
    TerrainContact(ProbeDirection),
    /// The drone left the playable volume.
    OutOfBounds,
}

/// Events produced by one tick of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    CheckpointCollected { id: String },
    Crashed { cause: CrashCause },
    Completed { duration: Duration, new_best: bool },
}

/// Consistent per-tick view of the session for the presentation adapter.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Drone pose, absent until the model has loaded.
    pub pose: Option<Transform>,
    pub phase: RunPhase,
    pub hud: HudModel,
    /// Follow camera, absent while the pose is.
    pub camera: Option<CameraPose>,
    pub overlay: Option<Overlay>,
    /// Finish time of the most recent completed run, for the completion
    /// overlay message.
    pub last_finish: Option<Duration>,
}

/// All mutable simulation state for one session.
///
/// The drone and terrain are attached when their assets finish loading;
/// until both are present the session is not ready and `tick` is a no-op.
/// Nothing here touches a window or GPU, so the whole pipeline runs under
/// plain unit tests.
pub struct FlightSession {
    drone: Option<Drone>,
    terrain: Option<TerrainCollision>,
    course: CheckpointTracker,
    bounds: PlayBounds,
    probe: CollisionProbe,
    tuning: FlightTuning,
    run: RunState,
}

impl Default for FlightSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightSession {
    /// A session over the reference course.
    pub fn new() -> Self {
        Self::with_course(
            course::reference_checkpoints(),
            PlayBounds::reference(),
            FlightTuning::default(),
        )
    }

    /// A session over a custom course.
    pub fn with_course(
        checkpoints: Vec<Checkpoint>,
        bounds: PlayBounds,
        tuning: FlightTuning,
    ) -> Self {
        Self {
            drone: None,
            terrain: None,
            course: CheckpointTracker::new(checkpoints, DRONE_RADIUS),
            bounds,
            probe: CollisionProbe::new(),
            tuning,
            run: RunState::new(),
        }
    }

    /// Replace the probe schedule (custom direction lists, test rigs).
    pub fn set_probe(&mut self, probe: CollisionProbe) {
        self.probe = probe;
    }

    /// Attach the actor once its model has loaded.
    pub fn attach_drone(&mut self, drone: Drone) {
        log::info!("Drone attached at spawn");
        self.drone = Some(drone);
    }

    /// Attach the terrain collision world once its model has loaded.
    pub fn attach_terrain(&mut self, terrain: TerrainCollision) {
        log::info!(
            "Terrain attached with {} collider(s)",
            terrain.collider_count()
        );
        self.terrain = Some(terrain);
    }

    /// Both assets present; the pipeline can run.
    pub fn is_ready(&self) -> bool {
        self.drone.is_some() && self.terrain.is_some()
    }

    pub fn phase(&self) -> RunPhase {
        self.run.phase()
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn drone(&self) -> Option<&Drone> {
        self.drone.as_ref()
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        self.course.checkpoints()
    }

    /// Start or restart a run. Ignored while Running or before both assets
    /// are ready. Clears the collected set and stamps the start time.
    pub fn start(&mut self, now: Duration) -> bool {
        if !self.is_ready() {
            log::debug!("Start trigger ignored: assets not ready");
            return false;
        }
        if !self.run.start(now) {
            return false;
        }
        self.course.reset();
        self.probe.reset();
        true
    }

    /// One simulation tick: integrate motion, probe terrain, check bounds,
    /// collect checkpoints, resolve transitions. No-op unless Running with
    /// both assets attached.
    pub fn tick(&mut self, axes: &ControlAxes, dt: f32, now: Duration) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if !self.run.is_running() {
            return events;
        }
        let (Some(drone), Some(terrain)) = (self.drone.as_mut(), self.terrain.as_ref()) else {
            return events;
        };

        integrate(&mut drone.transform, axes, dt, &self.tuning);

        let crash_cause = if let Some(hit) =
            self.probe
                .check(terrain, drone.transform.position, drone.transform.rotation)
        {
            Some(CrashCause::TerrainContact(hit.direction))
        } else if self.bounds.is_out_of_bounds(drone.transform.position) {
            Some(CrashCause::OutOfBounds)
        } else {
            None
        };

        if let Some(cause) = crash_cause {
            drone.reset_to_spawn();
            self.course.reset();
            self.run.crash();
            events.push(TickEvent::Crashed { cause });
            return events;
        }

        for id in self.course.update(drone.transform.position) {
            events.push(TickEvent::CheckpointCollected { id });
        }

        if self.course.all_collected() {
            let (duration, new_best) = self.run.complete(now);
            self.course.reset();
            drone.reset_to_spawn();
            events.push(TickEvent::Completed { duration, new_best });
        }

        events
    }

    /// Build the per-tick view for the presentation adapter.
    pub fn snapshot(&self, now: Duration) -> FrameSnapshot {
        let pose = self.drone.as_ref().map(|d| d.transform);
        let elapsed = if self.run.is_running() {
            self.run.elapsed(now)
        } else {
            self.run.last_finish().unwrap_or(Duration::ZERO)
        };
        FrameSnapshot {
            pose,
            phase: self.run.phase(),
            hud: HudModel {
                elapsed,
                collected: self.course.collected_count(),
                total: self.course.total(),
                best: self.run.best(),
            },
            camera: pose.as_ref().map(follow_camera),
            overlay: overlay_for_phase(self.run.phase()),
            last_finish: self.run.last_finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Vec3;

    fn far_terrain() -> TerrainCollision {
        let mut terrain = TerrainCollision::new();
        let vertices = vec![
            Vec3::new(-1.0, -5000.0, -1.0),
            Vec3::new(1.0, -5000.0, -1.0),
            Vec3::new(0.0, -5000.0, 1.0),
        ];
        terrain.insert_trimesh(&vertices, &[[0, 1, 2]], &Transform::default());
        terrain
    }

    #[test]
    fn tick_is_a_no_op_before_assets_arrive() {
        let mut session = FlightSession::new();
        assert!(!session.is_ready());
        assert!(!session.start(Duration::ZERO));
        let events = session.tick(&ControlAxes::default(), 0.016, Duration::ZERO);
        assert!(events.is_empty());
        assert_eq!(session.phase(), RunPhase::Idle);
    }

    #[test]
    fn tick_is_a_no_op_while_idle() {
        let mut session = FlightSession::new();
        session.attach_drone(Drone::at_spawn());
        session.attach_terrain(far_terrain());
        let axes = ControlAxes {
            pitch: -0.1,
            ..Default::default()
        };
        let events = session.tick(&axes, 0.016, Duration::ZERO);
        assert!(events.is_empty());
        // The pose must not have moved without a started run.
        let pose = session.drone().unwrap().transform;
        assert_eq!(pose.position, course::SPAWN_POSITION);
    }

    #[test]
    fn snapshot_before_assets_has_no_pose_or_camera() {
        let session = FlightSession::new();
        let snapshot = session.snapshot(Duration::ZERO);
        assert!(snapshot.pose.is_none());
        assert!(snapshot.camera.is_none());
        assert_eq!(snapshot.phase, RunPhase::Idle);
        assert_eq!(snapshot.overlay, Some(Overlay::Start));
        assert_eq!(snapshot.hud.total, 15);
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut session = FlightSession::new();
        session.attach_drone(Drone::at_spawn());
        session.attach_terrain(far_terrain());
        assert!(session.start(Duration::from_secs(1)));
        assert!(!session.start(Duration::from_secs(2)));
        assert_eq!(session.phase(), RunPhase::Running);
    }
}
