//! Game state and core simulation types
//!
//! The whole session lives in one `GameState`, reset in place on a mistake.

use super::layout::Layout;
use super::pattern::Pattern;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a press to begin
    Start,
    /// Replaying the first `level` pattern entries
    Playback,
    /// Player repeats the sequence
    Input,
}

/// Something that happened during a tick, for logging/UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start prompt dismissed, playback begins
    Started,
    /// Playback finished, waiting for the player
    PlaybackFinished,
    /// Player picked the right button (`progress` picks made this round)
    Correct { button: usize, progress: usize },
    /// Player picked a wrong button while `level` long sequence was required
    Mistake { level: usize },
    /// Round completed, next playback is `level` long
    LevelUp { level: usize },
}

/// Timing and size parameters of a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub button_count: usize,
    /// Seconds a button is lit
    pub show_time: f32,
    /// Seconds of darkness after each lit period
    pub wait_time: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            button_count: BUTTON_COUNT,
            show_time: SHOW_TIME,
            wait_time: WAIT_TIME,
        }
    }
}

impl GameConfig {
    /// Length of one playback step (lit + dark)
    #[inline]
    pub fn slot(&self) -> f32 {
        self.show_time + self.wait_time
    }

    /// Pause after the last highlight before the next playback
    #[inline]
    pub fn settle(&self) -> f32 {
        self.wait_time * 2.0
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Button geometry for the current viewport
    pub layout: Layout,
    /// Current phase
    pub phase: GamePhase,
    /// Length of the sequence to reproduce (starts at 1)
    pub level: usize,
    /// Correct picks made in the current round
    pub player_choice: usize,
    /// Seconds since entering the current phase
    pub phase_time: f32,
    /// Per-button highlight timers (seconds since the button was picked)
    pub highlights: Vec<f32>,
    /// Buttons drawn lit this frame (computed by the last tick)
    pub lit: Vec<bool>,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    /// Sequence to reproduce
    pub pattern: Pattern,
}

impl GameState {
    /// Create a new session on the default 1280x720 layout
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let pattern = Pattern::new(config.button_count, seed);
        Self::with_pattern(config, pattern)
    }

    /// Create a session around an existing pattern
    pub fn with_pattern(config: GameConfig, pattern: Pattern) -> Self {
        let count = config.button_count.max(1);
        let config = GameConfig {
            button_count: count,
            ..config
        };
        Self {
            config,
            layout: Layout::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32, count),
            phase: GamePhase::Start,
            level: 1,
            player_choice: 0,
            phase_time: 0.0,
            highlights: vec![config.slot(); count],
            lit: vec![false; count],
            events: Vec::new(),
            pattern,
        }
    }

    /// Resize the button row to a new viewport
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.layout = Layout::new(width, height, self.config.button_count);
    }

    /// True while any highlight animation is running
    pub fn animating(&self) -> bool {
        let slot = self.config.slot();
        self.highlights.iter().any(|&t| t < slot)
    }

    /// Discard progress and return to the start prompt with a fresh pattern
    pub fn reset(&mut self) {
        self.phase = GamePhase::Start;
        self.level = 1;
        self.player_choice = 0;
        self.phase_time = 0.0;
        let slot = self.config.slot();
        self.highlights.iter_mut().for_each(|t| *t = slot);
        self.lit.iter_mut().for_each(|l| *l = false);
        self.pattern.randomize();
    }

    /// Move to `phase` with a fresh phase timer
    pub(crate) fn enter(&mut self, phase: GamePhase) {
        log::debug!("Phase {:?} -> {:?} (level {})", self.phase, phase, self.level);
        self.phase = phase;
        self.phase_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.level, 1);
        assert_eq!(state.player_choice, 0);
        assert_eq!(state.highlights.len(), BUTTON_COUNT);
        assert!(!state.animating());
        assert!(state.lit.iter().all(|l| !l));
    }

    #[test]
    fn test_config_derived_times() {
        let config = GameConfig::default();
        assert!((config.slot() - 0.7).abs() < 1e-6);
        assert!((config.settle() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = GamePhase::Input;
        state.level = 5;
        state.player_choice = 3;
        state.phase_time = 1.2;
        state.highlights[2] = 0.1;
        state.lit[2] = true;

        state.reset();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.level, 1);
        assert_eq!(state.player_choice, 0);
        assert_eq!(state.phase_time, 0.0);
        assert!(!state.animating());
        assert!(state.lit.iter().all(|l| !l));
    }

    #[test]
    fn test_zero_buttons_clamped() {
        let config = GameConfig {
            button_count: 0,
            ..Default::default()
        };
        let state = GameState::new(config, 1);
        assert_eq!(state.config.button_count, 1);
        assert_eq!(state.highlights.len(), 1);
    }

    #[test]
    fn test_set_viewport() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.set_viewport(800.0, 600.0);
        assert_eq!(state.layout.width, 800.0);
        assert_eq!(state.layout.center(0).x, 100.0);
    }
}
