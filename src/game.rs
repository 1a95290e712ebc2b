//! Game owner
//!
//! Holds the simulation state together with its side-effect collaborators:
//! events go to the audio sink, frames go to a canvas, and the frame loop
//! tracks whether the host should keep scheduling.

use crate::audio::{AudioSink, SoundEffect};
use crate::frame_loop::FrameLoop;
use crate::renderer::{Canvas, draw_scene};
use crate::settings::Settings;
use crate::sim::{Arena, Command, GameEvent, GameState, tick};
use crate::ui::HudView;

pub struct Game {
    state: GameState,
    audio: Box<dyn AudioSink>,
    frame_loop: FrameLoop,
}

impl Game {
    /// Start a running match. Uses the settings seed if present.
    pub fn new(settings: &Settings, arena: Arena, audio: Box<dyn AudioSink>) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let state = GameState::new(arena, seed);
        log::info!(
            "New match: arena {}x{}, seed {}",
            state.arena.width,
            state.arena.height,
            seed
        );
        Self {
            state,
            audio,
            frame_loop: FrameLoop::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    pub fn hud(&self) -> HudView {
        HudView::from_state(&self.state)
    }

    /// Run one frame: tick, play sounds, draw. Returns whether the host
    /// should schedule another frame.
    pub fn frame(&mut self, canvas: &mut dyn Canvas) -> bool {
        let events = tick(&mut self.state);
        self.dispatch(&events);
        draw_scene(&self.state, canvas);
        self.frame_loop.after_frame(self.state.is_running())
    }

    /// Draw without advancing (e.g. after a resize while paused)
    pub fn redraw(&self, canvas: &mut dyn Canvas) {
        draw_scene(&self.state, canvas);
    }

    /// Apply a command. Returns true when the host must request a frame to
    /// restart an idle frame chain.
    pub fn apply(&mut self, command: Command) -> bool {
        self.state.apply(command);
        self.frame_loop.wake(self.state.is_running())
    }

    pub fn set_player_paddle_center(&mut self, y: f32) -> bool {
        self.apply(Command::SetPlayerPaddleCenter(y))
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.apply(Command::TogglePause)
    }

    pub fn restart(&mut self) -> bool {
        self.apply(Command::Restart)
    }

    pub fn resize(&mut self, arena: Arena) -> bool {
        self.apply(Command::Resize(arena))
    }

    fn dispatch(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.audio.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::consts::WINNING_SCORE;
    use crate::renderer::VertexCanvas;
    use crate::sim::{Ball, MatchState, Side};
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that records what it was asked to play
    #[derive(Clone, Default)]
    struct Recording(Rc<RefCell<Vec<SoundEffect>>>);

    impl AudioSink for Recording {
        fn play(&mut self, effect: SoundEffect) {
            self.0.borrow_mut().push(effect);
        }
    }

    fn settings() -> Settings {
        Settings {
            seed: Some(9),
            ..Default::default()
        }
    }

    fn game_with(audio: Box<dyn AudioSink>) -> Game {
        Game::new(&settings(), Arena::new(800.0, 400.0), audio)
    }

    #[test]
    fn test_events_reach_audio() {
        let played = Recording::default();
        let mut game = game_with(Box::new(played.clone()));
        game.state.ball = Ball::new(Vec2::new(400.0, 12.0), Vec2::new(5.0, -3.0));
        let mut canvas = VertexCanvas::new();

        assert!(game.frame(&mut canvas));

        assert_eq!(*played.0.borrow(), vec![SoundEffect::WallHit]);
        assert!(!canvas.vertices().is_empty());
    }

    #[test]
    fn test_audio_does_not_affect_simulation() {
        let mut quiet = game_with(Box::new(NullAudio));
        let mut loud = game_with(Box::new(Recording::default()));
        let mut canvas = VertexCanvas::new();
        for _ in 0..500 {
            quiet.frame(&mut canvas);
            loud.frame(&mut canvas);
        }
        assert_eq!(quiet.state.ball, loud.state.ball);
        assert_eq!(quiet.state.score, loud.state.score);
        assert_eq!(quiet.state.opponent, loud.state.opponent);
    }

    #[test]
    fn test_game_over_stops_scheduling_until_restart() {
        let played = Recording::default();
        let mut game = game_with(Box::new(played.clone()));
        game.state.player.y = 0.0;
        game.state.score.opponent = WINNING_SCORE - 1;
        game.state.ball = Ball::new(Vec2::new(12.0, 300.0), Vec2::new(-5.0, 0.0));
        let mut canvas = VertexCanvas::new();

        assert!(!game.frame(&mut canvas));
        assert_eq!(
            game.state().phase,
            MatchState::GameOver {
                winner: Side::Opponent
            }
        );
        assert_eq!(*played.0.borrow(), vec![SoundEffect::Score]);
        assert_eq!(game.hud().winner_text(), Some("CPU WINS"));

        // Pause is inert and does not wake the loop
        assert!(!game.toggle_pause());
        assert!(!game.frame_loop().is_scheduled());

        assert!(game.restart());
        assert!(game.state().is_running());
        assert_eq!(game.hud().player_score, 0);
    }

    #[test]
    fn test_pointer_input_does_not_wake_idle_loop() {
        let mut game = game_with(Box::new(Recording::default()));
        let mut canvas = VertexCanvas::new();
        game.toggle_pause();
        assert!(!game.frame(&mut canvas));

        assert!(!game.set_player_paddle_center(50.0));
        assert_eq!(game.state().player.y, 10.0);
    }

    #[test]
    fn test_resize_while_running_needs_no_wake() {
        let mut game = game_with(Box::new(Recording::default()));
        assert!(!game.resize(Arena::new(600.0, 300.0)));
        assert_eq!(game.state().arena, Arena::new(600.0, 300.0));
        assert_eq!(game.state().opponent.x, 578.0);
    }
}
