//! Command handlers invoked by the input/control adapters
//!
//! Input sources never touch state directly; they translate their events
//! into these calls. Pointer updates are last-write-wins.

use super::state::{Arena, GameState, MatchState};

/// External request against the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved: center the player paddle at this height
    SetPlayerPaddleCenter(f32),
    /// Pause button
    TogglePause,
    /// Restart button
    Restart,
    /// Viewport changed
    Resize(Arena),
}

impl GameState {
    /// Apply a command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetPlayerPaddleCenter(y) => self.set_player_paddle_center(y),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            Command::Resize(arena) => self.resize(arena),
        }
    }

    /// Center the player paddle on the pointer, clamped to the arena
    pub fn set_player_paddle_center(&mut self, y: f32) {
        if !y.is_finite() {
            return;
        }
        let arena = self.arena;
        self.player.set_center(y, &arena);
    }

    /// Running <-> Paused. No effect once the match is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            MatchState::Running => MatchState::Paused,
            MatchState::Paused => MatchState::Running,
            over @ MatchState::GameOver { .. } => over,
        };
        log::info!("Match state: {:?}", self.phase);
    }

    /// Zero the scores, reset the layout and resume play
    pub fn restart(&mut self) {
        self.score = Default::default();
        self.time_ticks = 0;
        self.reset_layout();
        self.phase = MatchState::Running;
        log::info!("Match restarted");
    }

    /// Adopt new arena dimensions, floored to the minimum. Full positional
    /// reset, not a rescale.
    pub fn resize(&mut self, arena: Arena) {
        self.arena = arena.floored();
        self.reset_layout();
        log::info!(
            "Arena resized to {}x{}",
            self.arena.width,
            self.arena.height
        );
    }
}
