//! Per-frame simulation step
//!
//! Advances the game state machine by one rendered frame.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary pointer pressed this frame, at this position (surface pixels)
    pub press: Option<Vec2>,
}

impl TickInput {
    pub fn press_at(x: f32, y: f32) -> Self {
        Self {
            press: Some(Vec2::new(x, y)),
        }
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.lit.iter_mut().for_each(|l| *l = false);

    match state.phase {
        GamePhase::Start => tick_start(state, input),
        GamePhase::Playback => tick_playback(state, dt),
        GamePhase::Input => tick_input(state, input, dt),
    }
}

fn tick_start(state: &mut GameState, input: &TickInput) {
    if input.press.is_some() {
        state.enter(GamePhase::Playback);
        state.events.push(GameEvent::Started);
    }
}

fn tick_playback(state: &mut GameState, dt: f32) {
    let slot = state.config.slot();

    if state.level as f32 * slot < state.phase_time {
        state.enter(GamePhase::Input);
        state.events.push(GameEvent::PlaybackFinished);
        return;
    }

    // Exactly at the end of the last slot the step index already points past
    // the sequence; nothing is shown there.
    let step = (state.phase_time / slot) as usize;
    if state.phase_time % slot < state.config.show_time && step < state.level {
        let button = state.pattern.get(step);
        if let Some(lit) = state.lit.get_mut(button) {
            *lit = true;
        }
    }

    state.phase_time += dt;
}

fn tick_input(state: &mut GameState, input: &TickInput, dt: f32) {
    let slot = state.config.slot();
    let show = state.config.show_time;

    // Highlight animations run independently of the press handling below
    let mut animating = false;
    for (timer, lit) in state.highlights.iter_mut().zip(state.lit.iter_mut()) {
        if *timer < slot {
            animating = true;
            *lit = *timer < show;
            *timer += dt;
        }
    }

    if !animating && state.player_choice == state.level {
        if state.phase_time > state.config.settle() {
            state.player_choice = 0;
            state.level += 1;
            state.enter(GamePhase::Playback);
            state.events.push(GameEvent::LevelUp { level: state.level });
        } else {
            state.phase_time += dt;
        }
        return;
    }

    let Some(point) = input.press else {
        return;
    };
    if state.player_choice >= state.level {
        return;
    }
    // Presses outside every circle are ignored
    let Some(button) = state.layout.button_at(point) else {
        return;
    };

    if state.pattern.get(state.player_choice) == button {
        state.highlights[button] = 0.0;
        state.player_choice += 1;
        state.events.push(GameEvent::Correct {
            button,
            progress: state.player_choice,
        });
    } else {
        let level = state.level;
        state.reset();
        state.events.push(GameEvent::Mistake { level });
    }
}
