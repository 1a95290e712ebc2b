//! Game state and core simulation types
//!
//! Everything the tick reads or writes lives in [`GameState`]; there is no
//! module-level mutable state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the arena an entity or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled paddle on the left
    Player,
    /// CPU-controlled paddle on the right
    Opponent,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Active gameplay
    Running,
    /// Frozen until toggled back
    Paused,
    /// Terminal until restart
    GameOver { winner: Side },
}

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// A point was awarded
    Scored { side: Side },
    /// Match reached the winning score
    GameOver { winner: Side },
}

/// The play field. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fit a 2:1 arena to the available viewport width
    pub fn fit(viewport_width: f32, max_width: f32) -> Self {
        let width = viewport_width.min(max_width).max(MIN_ARENA_WIDTH);
        Self::new(width, width / ARENA_ASPECT)
    }

    /// Raise each dimension to the minimum a paddle fits in. NaN dimensions
    /// become the minimum as well.
    pub fn floored(self) -> Self {
        Self::new(
            self.width.max(MIN_ARENA_WIDTH),
            self.height.max(MIN_ARENA_WIDTH / ARENA_ASPECT),
        )
    }

    /// Left edge of the CPU paddle
    pub fn opponent_x(&self) -> f32 {
        self.width - PADDLE_WIDTH - PADDLE_MARGIN
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Serve speed magnitudes, smaller for cramped arenas
    pub fn serve_speed(&self) -> Vec2 {
        let vx = if self.width > 400.0 {
            SERVE_SPEED_X
        } else {
            SERVE_SPEED_X_SMALL
        };
        let vy = if self.height > 200.0 {
            SERVE_SPEED_Y
        } else {
            SERVE_SPEED_Y_SMALL
        };
        Vec2::new(vx, vy)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::fit(MAX_ARENA_WIDTH, MAX_ARENA_WIDTH)
    }
}

/// A vertically movable paddle. `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle at the given x, vertically centered in the arena
    pub fn centered(x: f32, arena: &Arena) -> Self {
        Self {
            x,
            y: (arena.height - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Right edge (the face the player's paddle presents to the ball)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict vertical span check against a point
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.bottom()
    }

    /// Keep the paddle fully inside the arena
    pub fn clamp_to(&mut self, arena: &Arena) {
        let max_y = (arena.height - self.height).max(0.0);
        self.y = self.y.clamp(0.0, max_y);
    }

    /// Move so the paddle center sits at `center_y`, clamped to the arena
    pub fn set_center(&mut self, center_y: f32, arena: &Arena) {
        self.y = center_y - self.height / 2.0;
        self.clamp_to(arena);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// The side that has reached the winning score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.player >= WINNING_SCORE {
            Some(Side::Player)
        } else if self.opponent >= WINNING_SCORE {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchState,
    /// Ticks simulated since the last restart
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a running match with the given seed and a served ball
    pub fn new(arena: Arena, seed: u64) -> Self {
        let arena = arena.floored();
        let mut state = Self {
            arena,
            player: Paddle::centered(PADDLE_MARGIN, &arena),
            opponent: Paddle::centered(arena.opponent_x(), &arena),
            ball: Ball::new(arena.center(), Vec2::ZERO),
            score: Score::default(),
            phase: MatchState::Running,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_ball();
        state
    }

    /// Re-center the ball and serve it in a random diagonal direction
    pub fn reset_ball(&mut self) {
        let speed = self.arena.serve_speed();
        let sx = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball = Ball::new(self.arena.center(), Vec2::new(speed.x * sx, speed.y * sy));
    }

    /// Re-derive every position from the arena: paddle x-offsets, centered
    /// paddles and a freshly served ball
    pub fn reset_layout(&mut self) {
        self.player = Paddle::centered(PADDLE_MARGIN, &self.arena);
        self.opponent = Paddle::centered(self.arena.opponent_x(), &self.arena);
        self.player.clamp_to(&self.arena);
        self.opponent.clamp_to(&self.arena);
        self.reset_ball();
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchState::Running
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_centered() {
        let state = GameState::new(Arena::new(800.0, 400.0), 7);
        assert_eq!(state.player.x, 10.0);
        assert_eq!(state.player.y, 160.0);
        assert_eq!(state.opponent.x, 778.0);
        assert_eq!(state.opponent.y, 160.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.phase, MatchState::Running);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_serve_speed_scales_with_arena() {
        assert_eq!(Arena::new(800.0, 400.0).serve_speed(), Vec2::new(5.0, 3.0));
        assert_eq!(Arena::new(400.0, 200.0).serve_speed(), Vec2::new(3.0, 2.0));
        assert_eq!(Arena::new(401.0, 200.5).serve_speed(), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_reset_ball_randomizes_signs_only() {
        let mut state = GameState::new(Arena::new(800.0, 400.0), 99);
        let mut seen_vx = (false, false);
        let mut seen_vy = (false, false);
        for _ in 0..64 {
            state.reset_ball();
            assert_eq!(state.ball.pos, state.arena.center());
            assert_eq!(state.ball.vel.x.abs(), 5.0);
            assert_eq!(state.ball.vel.y.abs(), 3.0);
            if state.ball.vel.x > 0.0 { seen_vx.0 = true } else { seen_vx.1 = true }
            if state.ball.vel.y > 0.0 { seen_vy.0 = true } else { seen_vy.1 = true }
        }
        assert_eq!(seen_vx, (true, true));
        assert_eq!(seen_vy, (true, true));
    }

    #[test]
    fn test_arena_fit_caps_width_and_keeps_aspect() {
        assert_eq!(Arena::fit(1920.0, 800.0), Arena::new(800.0, 400.0));
        assert_eq!(Arena::fit(600.0, 800.0), Arena::new(600.0, 300.0));
        // Never smaller than what two centered paddles need
        assert_eq!(Arena::fit(50.0, 800.0), Arena::new(160.0, 80.0));
    }

    #[test]
    fn test_tiny_arena_is_floored() {
        assert_eq!(Arena::new(120.0, 60.0).floored(), Arena::new(160.0, 80.0));
        assert_eq!(Arena::new(600.0, 40.0).floored(), Arena::new(600.0, 80.0));
        assert_eq!(Arena::new(f32::NAN, 300.0).floored(), Arena::new(160.0, 300.0));

        let state = GameState::new(Arena::new(100.0, 10.0), 4);
        assert_eq!(state.arena, Arena::new(160.0, 80.0));
        assert_eq!(state.player.y, 0.0);
        assert_eq!(state.opponent.y, 0.0);
        assert!(state.opponent.x > state.player.right());
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::default();
        for _ in 0..4 {
            score.award(Side::Opponent);
        }
        assert_eq!(score.winner(), None);
        score.award(Side::Opponent);
        assert_eq!(score.winner(), Some(Side::Opponent));
        assert_eq!(score.get(Side::Opponent), 5);
        assert_eq!(score.get(Side::Player), 0);
    }

    #[test]
    fn test_paddle_clamp() {
        let arena = Arena::new(800.0, 400.0);
        let mut paddle = Paddle::centered(10.0, &arena);
        paddle.set_center(-50.0, &arena);
        assert_eq!(paddle.y, 0.0);
        paddle.set_center(450.0, &arena);
        assert_eq!(paddle.y, 320.0);
        assert!(paddle.spans(330.0));
        assert!(!paddle.spans(320.0));
    }
}
