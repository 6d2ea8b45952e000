//! Remember - a Simon Says memory game
//!
//! Core modules:
//! - `sim`: Pattern generation, layout and the frame-driven game state machine
//! - `renderer`: WebGPU rendering of buttons and text
//! - `platform`: Frame clock and pointer tracking shared by native and web
//! - `settings`: Tunable timing/layout parameters

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (physical pixels at startup)
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;
    pub const WINDOW_TITLE: &str = "Remember";

    /// Number of buttons in the row
    pub const BUTTON_COUNT: usize = 4;

    /// Seconds a button stays lit during playback and after a correct pick
    pub const SHOW_TIME: f32 = 0.5;
    /// Seconds of darkness following each lit period
    pub const WAIT_TIME: f32 = 0.2;

    /// Entries generated up front by a new pattern
    pub const INITIAL_PATTERN_LEN: usize = 8;

    /// Brightness factor applied to idle (unlit) buttons
    pub const DARKNESS: f32 = -0.65;

    /// Prompt shown in the start phase
    pub const START_TEXT: &str = "Press any button to start";
    /// Text height at the reference window height, in pixels
    pub const TEXT_SIZE: f32 = 20.0;

    /// Largest frame delta fed into the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Delta used for the first frame
    pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;
}
