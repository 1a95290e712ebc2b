//! Scene layout
//!
//! Reads the game state and issues draw calls; never mutates the state.

use glam::Vec2;

use super::canvas::{Canvas, Stroke};
use super::font;
use super::vertex::colors;
use crate::sim::{GameState, Paddle};
use crate::ui::HudView;

const SCORE_SIZE: f32 = 32.0;
const SCORE_BASELINE: f32 = 50.0;
/// Score x-offsets from the center line
const PLAYER_SCORE_OFFSET: f32 = -60.0;
const OPPONENT_SCORE_OFFSET: f32 = 40.0;

const CENTER_LINE_WIDTH: f32 = 2.0;
const CENTER_LINE_DASH: f32 = 8.0;

const OVERLAY_TITLE_SIZE: f32 = 42.0;
const OVERLAY_SUBTITLE_SIZE: f32 = 14.0;

/// Draw a full frame
pub fn draw_scene(state: &GameState, canvas: &mut dyn Canvas) {
    let arena = state.arena;
    let center_x = arena.width / 2.0;

    canvas.clear(colors::BACKGROUND);

    canvas.line(
        Vec2::new(center_x, 0.0),
        Vec2::new(center_x, arena.height),
        CENTER_LINE_WIDTH,
        Stroke::Dashed {
            dash: CENTER_LINE_DASH,
            gap: CENTER_LINE_DASH,
        },
        colors::CENTER_LINE,
    );

    draw_paddle(canvas, &state.player);
    draw_paddle(canvas, &state.opponent);

    canvas.fill_circle(state.ball.pos, state.ball.radius, colors::FOREGROUND);

    canvas.text(
        &state.score.player.to_string(),
        Vec2::new(center_x + PLAYER_SCORE_OFFSET, SCORE_BASELINE),
        SCORE_SIZE,
        colors::FOREGROUND,
    );
    canvas.text(
        &state.score.opponent.to_string(),
        Vec2::new(center_x + OPPONENT_SCORE_OFFSET, SCORE_BASELINE),
        SCORE_SIZE,
        colors::FOREGROUND,
    );

    if let Some(overlay) = HudView::from_state(state).overlay {
        canvas.fill_rect(
            Vec2::ZERO,
            Vec2::new(arena.width, arena.height),
            colors::OVERLAY_DIM,
        );
        let mid_y = arena.height / 2.0;
        draw_centered(canvas, overlay.title(), center_x, mid_y, OVERLAY_TITLE_SIZE);
        draw_centered(
            canvas,
            overlay.subtitle(),
            center_x,
            mid_y + OVERLAY_SUBTITLE_SIZE * 2.5,
            OVERLAY_SUBTITLE_SIZE,
        );
    }
}

fn draw_paddle(canvas: &mut dyn Canvas, paddle: &Paddle) {
    canvas.fill_rect(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        colors::FOREGROUND,
    );
}

fn draw_centered(canvas: &mut dyn Canvas, text: &str, center_x: f32, baseline: f32, size: f32) {
    let x = center_x - font::text_width(text, size) / 2.0;
    canvas.text(text, Vec2::new(x, baseline), size, colors::FOREGROUND);
}
