//! Platform abstraction layer
//!
//! Small pieces shared by the native (winit) and browser front ends:
//! - Frame timing from a monotonic timestamp
//! - Edge-triggered pointer presses

use glam::Vec2;

use crate::consts::{DEFAULT_FRAME_DT, MAX_FRAME_DT};

/// Turns frame timestamps into clamped deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame.
    ///
    /// `now` is any monotonic time in seconds. The first frame reports
    /// `DEFAULT_FRAME_DT`; long stalls are clamped to `MAX_FRAME_DT`.
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now - last).max(0.0) as f32).min(MAX_FRAME_DT),
            None => DEFAULT_FRAME_DT,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous timestamp after the window was hidden
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Tracks the pointer position and presses between frames
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: Vec2,
    pending: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `(x, y)` in surface pixels
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Primary button pressed at the current position.
    ///
    /// Only the first press of a frame is kept.
    pub fn pressed(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.position);
        }
    }

    /// Primary button pressed at `(x, y)`
    pub fn pressed_at(&mut self, x: f32, y: f32) {
        self.moved(x, y);
        self.pressed();
    }

    /// Take this frame's press, if any
    pub fn take_press(&mut self) -> Option<Vec2> {
        self.pending.take()
    }
}
