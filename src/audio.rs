//! Audio triggers
//!
//! Procedurally generated blips, no external files. Playback is
//! fire-and-forget: a sink may fail (no audio device, autoplay policy,
//! unsupported browser) and the simulation never finds out.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits top or bottom wall
    WallHit,
    /// Ball hits a paddle
    PaddleHit,
    /// A point is scored
    Score,
}

/// Fixed parameters of a single-oscillator blip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub volume: f32,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        match self {
            SoundEffect::WallHit => Tone {
                frequency_hz: 400.0,
                duration_secs: 0.08,
                volume: 0.3,
            },
            SoundEffect::PaddleHit => Tone {
                frequency_hz: 150.0,
                duration_secs: 0.1,
                volume: 0.6,
            },
            SoundEffect::Score => Tone {
                frequency_hz: 220.0,
                duration_secs: 0.3,
                volume: 0.4,
            },
        }
    }

    /// The trigger a simulation event maps to, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallHit => Some(SoundEffect::WallHit),
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::GameOver { .. } => None,
        }
    }
}

/// Something that can play sound effects. Implementations swallow their own
/// failures.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that discards everything (headless runs, audio unavailable)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Volume mixing shared by real sinks
#[derive(Debug, Clone, Copy)]
pub struct Mixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Mixer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Output gain for a tone, 0 when muted
    pub fn gain(&self, tone: &Tone) -> f32 {
        if self.muted {
            0.0
        } else {
            tone.volume * self.master_volume * self.sfx_volume
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, Mixer, SoundEffect, Tone};
    use crate::settings::Settings;

    /// Web Audio sink
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        mixer: Mixer,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                mixer: Mixer::from_settings(settings),
            }
        }

        /// Create an oscillator routed through a gain node
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short blip with an exponential decay
        fn blip(ctx: &AudioContext, tone: &Tone, vol: f32) -> Option<()> {
            let osc_type = if tone.frequency_hz < 200.0 {
                OscillatorType::Sine
            } else {
                OscillatorType::Square
            };
            let (osc, gain) = Self::create_osc(ctx, tone.frequency_hz, osc_type)?;
            let t = ctx.current_time();
            let end = t + tone.duration_secs as f64;

            gain.gain().set_value_at_time(vol, t).ok()?;
            gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok()?;

            osc.start().ok()?;
            osc.stop_with_when(end + 0.02).ok()?;
            Some(())
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            let tone = effect.tone();
            let vol = self.mixer.gain(&tone);
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            if Self::blip(ctx, &tone, vol).is_none() {
                log::debug!("Dropped {:?} sound", effect);
            }
        }
    }
}
