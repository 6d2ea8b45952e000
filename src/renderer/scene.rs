//! Scene composition
//!
//! Builds the frame's triangles from the game state, in surface pixels.

use glam::Vec2;

use super::shapes::{circle, circle_segments};
use super::text::{measure, push_text};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Text height for a viewport, scaled from the reference window height
pub fn text_size(height: f32) -> f32 {
    (TEXT_SIZE * height / WINDOW_HEIGHT as f32).max(GLYPH_MIN_SIZE)
}

/// Smallest text height that keeps the 5x7 font readable
const GLYPH_MIN_SIZE: f32 = 7.0;

/// Generate all vertices for the current frame
pub fn compose(state: &GameState) -> Vec<Vertex> {
    let layout = &state.layout;
    let radius = layout.radius();
    let segments = circle_segments(radius);
    let mut vertices = Vec::new();

    // Idle buttons, then lit ones on top
    for i in 0..layout.button_count {
        let color = colors::brightness(colors::button(i), DARKNESS);
        vertices.extend(circle(layout.center(i), radius, color, segments));
    }
    for (i, _) in state.lit.iter().enumerate().filter(|(_, lit)| **lit) {
        vertices.extend(circle(layout.center(i), radius, colors::button(i), segments));
    }

    let size = text_size(layout.height);
    match state.phase {
        GamePhase::Start => {
            let x = (layout.width - measure(START_TEXT, size)) / 2.0;
            let y = layout.height / 8.0;
            push_text(&mut vertices, START_TEXT, Vec2::new(x, y), size, colors::GRAY);
        }
        GamePhase::Playback | GamePhase::Input => {
            let label = format!("Level {}", state.level);
            push_text(&mut vertices, &label, Vec2::splat(size), size, colors::GRAY);
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameConfig;

    fn has_color(vertices: &[Vertex], color: [f32; 4]) -> bool {
        vertices.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_start_screen_has_dim_buttons_and_prompt() {
        let state = GameState::new(GameConfig::default(), 1);
        let verts = compose(&state);

        for i in 0..4 {
            let dim = colors::brightness(colors::button(i), DARKNESS);
            assert!(has_color(&verts, dim));
            assert!(!has_color(&verts, colors::button(i)));
        }
        assert!(has_color(&verts, colors::GRAY));
    }

    #[test]
    fn test_lit_button_drawn_full_color() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = GamePhase::Playback;
        state.lit[2] = true;
        let verts = compose(&state);

        assert!(has_color(&verts, colors::button(2)));
        assert!(!has_color(&verts, colors::button(0)));
        // Lit circle is centered on its button
        let center = state.layout.center(2);
        assert!(
            verts
                .iter()
                .any(|v| v.color == colors::button(2) && v.position == [center.x, center.y])
        );
    }

    #[test]
    fn test_prompt_is_centered() {
        let state = GameState::new(GameConfig::default(), 1);
        let verts = compose(&state);
        let text: Vec<&Vertex> = verts.iter().filter(|v| v.color == colors::GRAY).collect();

        let min_x = text.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = text.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!(((min_x + max_x) / 2.0 - 640.0).abs() < 1.0);
        assert!(text.iter().all(|v| v.position[1] < 360.0));
    }

    #[test]
    fn test_text_size_scales_with_height() {
        assert_eq!(text_size(720.0), TEXT_SIZE);
        assert_eq!(text_size(1440.0), TEXT_SIZE * 2.0);
        assert_eq!(text_size(10.0), GLYPH_MIN_SIZE);
    }
}
