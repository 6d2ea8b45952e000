//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time only advances through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Input arrives as one edge-triggered press per tick

pub mod layout;
pub mod pattern;
pub mod state;
pub mod tick;

pub use layout::{Layout, point_in_circle};
pub use pattern::Pattern;
pub use state::{GameConfig, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
