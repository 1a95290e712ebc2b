//! Frame scheduling
//!
//! The host owns the clock (requestAnimationFrame in the browser, a plain
//! loop natively). [`FrameLoop`] decides whether another frame should be
//! requested: it goes idle once play stops and wakes on resume or restart.

use crate::game::Game;
use crate::renderer::Canvas;

/// Cancellation flag for the frame chain
#[derive(Debug, Clone)]
pub struct FrameLoop {
    scheduled: bool,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// A loop with its first frame pending
    pub fn new() -> Self {
        Self { scheduled: true }
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Called after each frame. Returns whether to request another one.
    pub fn after_frame(&mut self, running: bool) -> bool {
        self.scheduled = running;
        self.scheduled
    }

    /// Called after a command. Returns true when the chain was idle and the
    /// host must request a frame to restart it.
    pub fn wake(&mut self, running: bool) -> bool {
        if running && !self.scheduled {
            self.scheduled = true;
            true
        } else {
            false
        }
    }
}

/// Supplier of frames for [`run`]
pub trait FrameHost {
    /// Wait for the next frame and feed any input sampled since the last one
    /// into `game`. Returns false when the host is shutting down.
    fn next_frame(&mut self, game: &mut Game) -> bool;
}

/// Drive frames until the loop goes idle or the host stops.
/// Returns the number of frames run.
pub fn run(game: &mut Game, canvas: &mut dyn Canvas, host: &mut dyn FrameHost) -> u64 {
    let mut frames = 0;
    while game.frame_loop().is_scheduled() && host.next_frame(game) {
        game.frame(canvas);
        frames += 1;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::renderer::VertexCanvas;
    use crate::settings::Settings;
    use crate::sim::{Arena, MatchState};

    /// Pauses after a fixed number of frames
    struct PauseAfter {
        frames: u64,
        seen: u64,
    }

    impl FrameHost for PauseAfter {
        fn next_frame(&mut self, game: &mut Game) -> bool {
            self.seen += 1;
            if self.seen == self.frames {
                game.toggle_pause();
            }
            true
        }
    }

    /// Stops supplying frames after a budget
    struct Budget(u64);

    impl FrameHost for Budget {
        fn next_frame(&mut self, _game: &mut Game) -> bool {
            if self.0 == 0 {
                return false;
            }
            self.0 -= 1;
            true
        }
    }

    fn game() -> Game {
        let settings = Settings {
            seed: Some(3),
            ..Default::default()
        };
        Game::new(&settings, Arena::new(800.0, 400.0), Box::new(NullAudio))
    }

    #[test]
    fn test_wake_only_when_idle_and_running() {
        let mut fl = FrameLoop::new();
        assert!(!fl.wake(true));
        assert!(!fl.after_frame(false));
        assert!(!fl.wake(false));
        assert!(fl.wake(true));
        assert!(fl.is_scheduled());
    }

    #[test]
    fn test_pause_cancels_loop() {
        let mut game = game();
        let mut canvas = VertexCanvas::new();
        let mut host = PauseAfter { frames: 10, seen: 0 };

        let frames = run(&mut game, &mut canvas, &mut host);

        // The pausing frame still renders its overlay, then the chain stops
        assert_eq!(frames, 10);
        assert_eq!(game.state().phase, MatchState::Paused);
        assert_eq!(game.state().time_ticks, 9);
        assert!(!game.frame_loop().is_scheduled());
        assert!(!canvas.vertices().is_empty());
    }

    #[test]
    fn test_resume_reschedules() {
        let mut game = game();
        let mut canvas = VertexCanvas::new();
        run(&mut game, &mut canvas, &mut PauseAfter { frames: 3, seen: 0 });
        assert!(!game.frame_loop().is_scheduled());

        assert!(game.toggle_pause());
        let frames = run(&mut game, &mut canvas, &mut Budget(5));
        assert_eq!(frames, 5);
        assert_eq!(game.state().time_ticks, 2 + 5);
    }

    #[test]
    fn test_host_shutdown_ends_run() {
        let mut game = game();
        let mut canvas = VertexCanvas::new();
        assert_eq!(run(&mut game, &mut canvas, &mut Budget(0)), 0);
        assert!(game.frame_loop().is_scheduled());
    }
}
