//! Match state as the controls see it
//!
//! The host mirrors this onto its buttons and overlay; the scene draws the
//! same overlay on the canvas.

use crate::sim::{Arena, GameState, MatchState, Side};

/// Full-arena message shown while play is stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Paused,
    GameOver { winner: Side },
}

impl Overlay {
    pub fn title(&self) -> &'static str {
        match self {
            Overlay::Paused => "PAUSED",
            Overlay::GameOver {
                winner: Side::Player,
            } => "YOU WIN!",
            Overlay::GameOver {
                winner: Side::Opponent,
            } => "CPU WINS",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Overlay::Paused => "PRESS RESUME",
            Overlay::GameOver { .. } => "PRESS RESTART",
        }
    }
}

/// Snapshot for the control collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub player_score: u32,
    pub opponent_score: u32,
    /// Label for the pause button
    pub pause_label: &'static str,
    /// Pause does nothing once the match is over
    pub pause_enabled: bool,
    pub overlay: Option<Overlay>,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let (pause_label, pause_enabled, overlay) = match state.phase {
            MatchState::Running => ("Pause", true, None),
            MatchState::Paused => ("Resume", true, Some(Overlay::Paused)),
            MatchState::GameOver { winner } => ("Pause", false, Some(Overlay::GameOver { winner })),
        };
        Self {
            player_score: state.score.player,
            opponent_score: state.score.opponent,
            pause_label,
            pause_enabled,
            overlay,
        }
    }

    /// Winner banner text, if the match is over
    pub fn winner_text(&self) -> Option<&'static str> {
        match self.overlay {
            Some(overlay @ Overlay::GameOver { .. }) => Some(overlay.title()),
            _ => None,
        }
    }
}

/// Arena and backing-store size for a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    pub arena: Arena,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl CanvasFit {
    pub fn new(viewport_width: f32, max_width: f32, device_pixel_ratio: f64) -> Self {
        let arena = Arena::fit(viewport_width, max_width);
        Self {
            arena,
            pixel_width: (arena.width as f64 * device_pixel_ratio) as u32,
            pixel_height: (arena.height as f64 * device_pixel_ratio) as u32,
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }
}

/// What the host has to do for a viewport change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizePlan {
    /// Backing store size differs. Writing it clears the canvas.
    pub write_canvas: bool,
    /// Arena differs, the simulation needs a `resize`
    pub resize_game: bool,
    /// Reconfigure the surface and, with the frame chain idle, draw once
    pub redraw: bool,
}

impl ResizePlan {
    pub fn new(
        fit: &CanvasFit,
        canvas_pixels: (u32, u32),
        current_arena: Arena,
        loop_scheduled: bool,
    ) -> Self {
        let write_canvas = fit.pixel_size() != canvas_pixels;
        let resize_game = fit.arena != current_arena;
        Self {
            write_canvas,
            resize_game,
            redraw: (write_canvas || resize_game) && !loop_scheduled,
        }
    }

    /// Surface must be reconfigured to the new pixel size
    pub fn reconfigure(&self) -> bool {
        self.write_canvas || self.resize_game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_hud() {
        let state = GameState::new(Arena::default(), 1);
        let hud = HudView::from_state(&state);
        assert_eq!(hud.pause_label, "Pause");
        assert!(hud.pause_enabled);
        assert_eq!(hud.overlay, None);
        assert_eq!(hud.winner_text(), None);
    }

    #[test]
    fn test_paused_hud() {
        let mut state = GameState::new(Arena::default(), 1);
        state.toggle_pause();
        let hud = HudView::from_state(&state);
        assert_eq!(hud.pause_label, "Resume");
        assert_eq!(hud.overlay, Some(Overlay::Paused));
        assert_eq!(hud.winner_text(), None);
    }

    #[test]
    fn test_game_over_hud() {
        let mut state = GameState::new(Arena::default(), 1);
        state.score.opponent = 5;
        state.phase = MatchState::GameOver {
            winner: Side::Opponent,
        };
        let hud = HudView::from_state(&state);
        assert!(!hud.pause_enabled);
        assert_eq!(hud.opponent_score, 5);
        assert_eq!(hud.winner_text(), Some("CPU WINS"));
    }

    #[test]
    fn test_canvas_fit_scales_by_pixel_ratio() {
        let fit = CanvasFit::new(1920.0, 800.0, 2.0);
        assert_eq!(fit.arena, Arena::new(800.0, 400.0));
        assert_eq!(fit.pixel_size(), (1600, 800));
    }

    #[test]
    fn test_height_only_resize_is_a_no_op() {
        let fit = CanvasFit::new(1920.0, 800.0, 1.0);
        let plan = ResizePlan::new(&fit, (800, 400), Arena::new(800.0, 400.0), false);
        assert_eq!(plan, ResizePlan::default());
        assert!(!plan.reconfigure());
    }

    #[test]
    fn test_pixel_ratio_change_redraws_idle_canvas() {
        // Same arena, new DPR: the canvas is rewritten and must be redrawn
        // even though the simulation is untouched
        let fit = CanvasFit::new(1920.0, 800.0, 2.0);
        let plan = ResizePlan::new(&fit, (800, 400), Arena::new(800.0, 400.0), false);
        assert!(plan.write_canvas);
        assert!(!plan.resize_game);
        assert!(plan.reconfigure());
        assert!(plan.redraw);
    }

    #[test]
    fn test_running_loop_redraws_on_its_own() {
        let fit = CanvasFit::new(600.0, 800.0, 1.0);
        let plan = ResizePlan::new(&fit, (800, 400), Arena::new(800.0, 400.0), true);
        assert!(plan.write_canvas);
        assert!(plan.resize_game);
        assert!(!plan.redraw);
    }
}
