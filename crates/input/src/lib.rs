//! Flight input handling: keyboard axis steps, cursor-derived roll, and the
//! start/restart trigger.

use engine_core::{clamp_axis, ControlAxes, AXIS_LIMIT};
use glam::Vec2;

/// Discrete axis value applied while an axis key is held.
const KEY_STEP: f32 = AXIS_LIMIT;

/// Cursor offset-to-roll factor, per pixel of distance from window center.
const ROLL_FACTOR: f32 = 0.00002;

/// Manages flight control input state for the current frame.
///
/// Keyboard mapping uses physical key codes, so WASD on QWERTY and ZQSD on
/// AZERTY land on the same keys:
/// - W/S: pitch (forward/backward), A/D: yaw (left/right strafe)
/// - Space/Shift: lift up/down
///
/// Cursor position drives the two roll axes continuously, proportional to the
/// offset from the window center and clamped to the axis bound.
#[derive(Debug)]
pub struct FlightInput {
    axes: ControlAxes,
    window_size: Vec2,
    start_requested: bool,
}

impl Default for FlightInput {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

impl FlightInput {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            axes: ControlAxes::default(),
            window_size: Vec2::new(window_width as f32, window_height as f32),
            start_requested: false,
        }
    }

    /// Update the window size used as the cursor reference frame. Call on
    /// resize events.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = Vec2::new(width as f32, height.max(1) as f32);
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => match key {
                KeyCode::KeyW => self.axes.pitch = -KEY_STEP,
                KeyCode::KeyS => self.axes.pitch = KEY_STEP,
                KeyCode::KeyA => self.axes.yaw = KEY_STEP,
                KeyCode::KeyD => self.axes.yaw = -KEY_STEP,
                KeyCode::Space => self.axes.lift = KEY_STEP,
                KeyCode::ShiftLeft | KeyCode::ShiftRight => self.axes.lift = -KEY_STEP,
                KeyCode::Enter => self.start_requested = true,
                _ => {}
            },
            // Releasing either key of a pair zeroes the whole axis.
            ElementState::Released => match key {
                KeyCode::KeyW | KeyCode::KeyS => self.axes.pitch = 0.0,
                KeyCode::KeyA | KeyCode::KeyD => self.axes.yaw = 0.0,
                KeyCode::Space | KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                    self.axes.lift = 0.0
                }
                _ => {}
            },
        }
    }

    /// Process a mouse button event. A left click requests a start/restart.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.start_requested = true;
        }
    }

    /// Process a cursor position update in window coordinates.
    ///
    /// The horizontal and vertical offsets from the window center map to
    /// yaw-roll and pitch-roll with independent clamps.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        let center = self.window_size / 2.0;
        let offset_x = position.0 as f32 - center.x;
        let offset_y = position.1 as f32 - center.y;
        self.axes.roll_y = clamp_axis(offset_x * ROLL_FACTOR, AXIS_LIMIT);
        self.axes.roll_x = clamp_axis(offset_y * ROLL_FACTOR, AXIS_LIMIT);
    }

    /// Get the current control axes snapshot.
    pub fn axes(&self) -> ControlAxes {
        self.axes
    }

    /// Consume a pending start/restart trigger (edge-detected, one per
    /// press). Returns true at most once per click or Enter press.
    pub fn take_start_trigger(&mut self) -> bool {
        std::mem::take(&mut self.start_requested)
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_sets_axis_release_zeroes_it() {
        let mut input = FlightInput::new(800, 600);
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        assert_eq!(input.axes().pitch, -KEY_STEP);
        input.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert_eq!(input.axes().pitch, 0.0);
    }

    #[test]
    fn releasing_opposite_key_zeroes_shared_axis() {
        let mut input = FlightInput::new(800, 600);
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyD, ElementState::Released);
        assert_eq!(input.axes().yaw, 0.0);
    }

    #[test]
    fn cursor_at_center_gives_no_roll() {
        let mut input = FlightInput::new(800, 600);
        input.process_cursor_position((400.0, 300.0));
        assert_eq!(input.axes().roll_y, 0.0);
        assert_eq!(input.axes().roll_x, 0.0);
    }

    #[test]
    fn cursor_roll_is_proportional_and_clamped() {
        let mut input = FlightInput::new(800, 600);
        input.process_cursor_position((500.0, 300.0));
        let expected = 100.0 * ROLL_FACTOR;
        assert!((input.axes().roll_y - expected).abs() < 1e-7);

        // A huge offset must clamp to the axis bound.
        input.process_cursor_position((1_000_000.0, -1_000_000.0));
        assert_eq!(input.axes().roll_y, AXIS_LIMIT);
        assert_eq!(input.axes().roll_x, -AXIS_LIMIT);
    }

    #[test]
    fn start_trigger_is_consumed_once() {
        let mut input = FlightInput::new(800, 600);
        assert!(!input.take_start_trigger());
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(input.take_start_trigger());
        assert!(!input.take_start_trigger());

        input.process_keyboard(KeyCode::Enter, ElementState::Pressed);
        assert!(input.take_start_trigger());
    }
}
