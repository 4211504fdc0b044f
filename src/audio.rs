use tracing::{debug, warn};

pub const SAMPLE_RATE: u32 = 44_100;
pub const BLIP_HZ: f32 = 880.0;
pub const BLIP_SECS: f32 = 0.1;
const BLIP_GAIN: f32 = 0.1;
const BLIP_FLOOR: f32 = 0.000_01;

/// Fire-and-forget notification played on every sign change.
pub trait Cue {
    fn sign_changed(&self);
}

/// No sound at all: muted, or no output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl Cue for SilentCue {
    fn sign_changed(&self) {}
}

/// Mono samples for the sign-change blip: a sine with an exponential fade.
pub fn tone_samples(sample_rate: u32) -> Vec<f32> {
    let total = (sample_rate as f32 * BLIP_SECS) as usize;
    let decay = BLIP_FLOOR / BLIP_GAIN;

    (0..total)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let gain = BLIP_GAIN * decay.powf(t / BLIP_SECS);
            gain * (2.0 * std::f32::consts::PI * BLIP_HZ * t).sin()
        })
        .collect()
}

#[cfg(feature = "audio")]
pub use rodio_cue::RodioCue;

#[cfg(feature = "audio")]
mod rodio_cue {
    use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

    use super::{tone_samples, Cue, SAMPLE_RATE};

    pub struct RodioCue {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        samples: Vec<f32>,
    }

    impl RodioCue {
        pub fn new() -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
                samples: tone_samples(SAMPLE_RATE),
            })
        }
    }

    impl Cue for RodioCue {
        fn sign_changed(&self) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, self.samples.clone()));
                sink.detach();
            }
        }
    }
}

/// Best available cue. Missing audio support degrades to silence.
pub fn open_cue(mute: bool) -> Box<dyn Cue> {
    if mute {
        debug!("audio muted");
        return Box::new(SilentCue);
    }

    #[cfg(feature = "audio")]
    {
        match RodioCue::new() {
            Ok(cue) => return Box::new(cue),
            Err(err) => warn!(%err, "no audio output; continuing without sound"),
        }
    }

    #[cfg(not(feature = "audio"))]
    warn!("built without the audio feature; continuing without sound");

    Box::new(SilentCue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blip_lasts_a_tenth_of_a_second() {
        let samples = tone_samples(SAMPLE_RATE);
        assert_eq!(samples.len(), 4_410);
    }

    #[test]
    fn blip_fades_out() {
        let samples = tone_samples(SAMPLE_RATE);
        let peak = |s: &[f32]| s.iter().fold(0.0f32, |m, v| m.max(v.abs()));

        let head = peak(&samples[..200]);
        let tail = peak(&samples[samples.len() - 200..]);
        assert!(head <= BLIP_GAIN + f32::EPSILON);
        assert!(head > 0.05);
        assert!(tail < 0.001);
    }

    #[test]
    fn muted_cue_is_silent() {
        // just needs to not panic or touch a device
        open_cue(true).sign_changed();
        SilentCue.sign_changed();
    }

    #[test]
    fn sound_is_part_of_the_default_build() {
        let manifest = include_str!("../Cargo.toml");
        assert!(manifest.contains(r#"default = ["audio"]"#));
    }

    #[cfg(feature = "audio")]
    #[test]
    fn unmuted_cue_plays_or_falls_back_to_silence() {
        // with or without an output device this must not panic
        let cue = open_cue(false);
        cue.sign_changed();
        cue.sign_changed();
    }
}
