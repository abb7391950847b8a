//! Ridgerun - pilot a drone through a checkpoint course carved into static
//! terrain. Crash into the mountain or leave the play area and the run ends.
//!
//! This binary is the hosting shell: window, event loop, input routing,
//! asset wiring, and a minimal text presentation (window title + log). The
//! whole game lives in the `sim` crate and never touches any of this.

mod config;

use anyhow::Result;
use assets::{AssetKind, AssetLoader, AssetResult};
use config::GameConfig;
use engine_core::{Quat, Time, Transform, Vec3};
use input::FlightInput;
use physics::TerrainCollision;
use sim::{
    completion_message, Drone, FlightSession, FlightTuning, FrameSnapshot, Overlay, PlayBounds,
    RunPhase, TickEvent, DRONE_MODEL_SCALE,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::KeyCode,
    window::{Window, WindowId},
};

/// Shell state: the window, the clock, input, asset plumbing, and the
/// simulation session.
struct GameShell {
    window: Arc<Window>,
    config: GameConfig,
    time: Time,
    input: FlightInput,
    loader: AssetLoader,
    session: FlightSession,
    /// Overlay currently presented, to log each one once.
    shown_overlay: Option<Overlay>,
    /// Last window title set, to avoid redundant title updates.
    last_title: String,
    running: bool,
}

impl GameShell {
    fn new(window: Arc<Window>, config: GameConfig) -> Self {
        let loader = AssetLoader::new();
        loader.request(AssetKind::Drone, PathBuf::from(&config.drone_model));
        loader.request(AssetKind::Terrain, PathBuf::from(&config.terrain_model));

        let session = FlightSession::with_course(
            sim::reference_checkpoints(),
            PlayBounds::reference(),
            FlightTuning {
                speed_multiplier: config.speed_multiplier,
                rot_speed_multiplier: config.rot_speed_multiplier,
            },
        );

        let input = FlightInput::new(config.window_width, config.window_height);

        Self {
            window,
            config,
            time: Time::new(),
            input,
            loader,
            session,
            shown_overlay: None,
            last_title: String::new(),
            running: true,
        }
    }

    /// Handle a window event. Returns true if the app should exit.
    fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.running = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.input.set_window_size(size.width, size.height);
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state.is_pressed() {
                        self.running = false;
                        return true;
                    }
                    self.input.process_keyboard(key, event.state);
                }
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_position((position.x, position.y));
                false
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                false
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                self.window.request_redraw();
                false
            }
            _ => false,
        }
    }

    /// One frame: drain asset completions, apply triggers, step the
    /// simulation, present the snapshot.
    fn tick(&mut self) {
        self.time.update();
        let now = self.time.elapsed();

        for result in self.loader.poll() {
            self.handle_asset_result(result);
        }

        if self.input.take_start_trigger() && self.session.start(now) {
            log::info!("Run started");
        }

        let axes = self.input.axes();
        for event in self.session.tick(&axes, self.time.delta_seconds(), now) {
            match event {
                TickEvent::CheckpointCollected { id } => {
                    log::info!("Checkpoint {} collected", id);
                }
                TickEvent::Crashed { cause } => {
                    log::info!("Crashed: {:?}", cause);
                }
                TickEvent::Completed { duration, new_best } => {
                    log::info!(
                        "Course complete in {:.2}s{}",
                        duration.as_secs_f64(),
                        if new_best { " (new best)" } else { "" }
                    );
                }
            }
        }

        let snapshot = self.session.snapshot(now);
        self.present(&snapshot);
    }

    fn handle_asset_result(&mut self, result: AssetResult) {
        match (result.kind, result.outcome) {
            (AssetKind::Drone, Ok(meshes)) => {
                log::info!("Drone model ready ({} primitive(s))", meshes.len());
                let mut drone = Drone::at_spawn();
                drone.transform.scale = Vec3::splat(DRONE_MODEL_SCALE);
                self.session.attach_drone(drone);
            }
            (AssetKind::Terrain, Ok(meshes)) => {
                let placement = Transform {
                    position: Vec3::new(0.0, self.config.terrain_offset_y, 0.0),
                    rotation: Quat::IDENTITY,
                    scale: Vec3::splat(self.config.terrain_scale),
                };
                let mut terrain = TerrainCollision::new();
                for mesh in &meshes {
                    terrain.insert_trimesh(&mesh.vertices, &mesh.indices, &placement);
                }
                log::info!(
                    "Terrain ready: {} collider(s), {} triangle(s)",
                    terrain.collider_count(),
                    meshes.iter().map(|m| m.triangle_count()).sum::<usize>()
                );
                self.session.attach_terrain(terrain);
            }
            // A failed load leaves the session not ready forever; the start
            // overlay stays up and the loop keeps running.
            (kind, Err(e)) => {
                log::error!("Failed to load {:?} model: {}", kind, e);
            }
        }
    }

    /// Text presentation: HUD in the window title while running, overlays
    /// logged once on entry.
    fn present(&mut self, snapshot: &FrameSnapshot) {
        let title = if snapshot.phase == RunPhase::Running {
            format!(
                "Ridgerun | {} | {} | {} | {:.0} FPS",
                snapshot.hud.time_text(),
                snapshot.hud.targets_text(),
                snapshot.hud.best_text(),
                self.time.fps()
            )
        } else {
            "Ridgerun".to_string()
        };
        if title != self.last_title {
            self.window.set_title(&title);
            self.last_title = title;
        }

        if snapshot.overlay != self.shown_overlay {
            match snapshot.overlay {
                Some(Overlay::Start) => {
                    log::info!("Click or press Enter to start");
                }
                Some(Overlay::Death) => {
                    log::info!("You crashed! Click or press Enter to retry");
                }
                Some(Overlay::Completion) => {
                    let finish = snapshot.last_finish.unwrap_or(Duration::ZERO);
                    log::info!("{}", completion_message(finish));
                }
                None => {}
            }
            self.shown_overlay = snapshot.overlay;
        }
    }
}

/// Application handler for winit.
struct App {
    shell: Option<GameShell>,
}

impl App {
    fn new() -> Self {
        Self { shell: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_none() {
            let config = GameConfig::load();
            let window_attrs = Window::default_attributes()
                .with_title("Ridgerun")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    config.window_width,
                    config.window_height,
                ));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let shell = GameShell::new(window.clone(), config);
            self.shell = Some(shell);
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(shell) = &mut self.shell {
            if shell.handle_window_event(event) || !shell.running {
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║                     Ridgerun                     ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                       ║");
    println!("║    W/S    - Forward / backward                   ║");
    println!("║    A/D    - Strafe left / right                  ║");
    println!("║    Space  - Climb      │  Shift - Descend        ║");
    println!("║    Mouse  - Roll (offset from window center)     ║");
    println!("║    Click  - Start / restart a run                ║");
    println!("║    Escape - Quit                                 ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  Pass through all 15 targets. Do not crash.      ║");
    println!("╚══════════════════════════════════════════════════╝");

    log::info!("Starting Ridgerun");

    let event_loop = EventLoop::new()?;
    // Poll continuously for lower input latency. Wait blocks until events
    // arrive, which can delay RedrawRequested and makes the flight loop
    // stutter.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
