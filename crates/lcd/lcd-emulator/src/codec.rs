//! Fire-and-forget beep codec.
//!
//! The simulated phone clicks on every key press: an 800 Hz square wave,
//! 50 ms, low gain. This codec models the playback path — samples are
//! synthesized, accounted for, and a stop is scheduled 50 ms out — without
//! any sound-card dependency. Dropping the codec cancels an in-flight stop,
//! matching the rule that tearing the widget down cancels its pending
//! callbacks.

use std::time::Duration;

use dasp::{signal, Signal};
use platform::{AudioCodec, AudioConfig, ToneSpec, KEY_CLICK};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Synthesize a tone as mono i16 PCM at the config's sample rate.
// The oscillator yields exactly ±1.0; scaled values stay in i16 range.
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
#[must_use]
pub fn synthesize(spec: &ToneSpec, config: &AudioConfig) -> Vec<i16> {
    let mut osc = signal::rate(f64::from(config.sample_rate))
        .const_hz(f64::from(spec.frequency_hz))
        .square();
    let amplitude = f64::from(spec.amplitude());
    (0..spec.sample_count(config.sample_rate))
        .map(|_| (osc.next() * amplitude) as i16)
        .collect()
}

/// The emulator's audio sink.
pub struct BeepCodec {
    config: AudioConfig,
    beeps_played: u64,
    samples_written: u64,
    stop_task: Option<JoinHandle<()>>,
}

impl BeepCodec {
    /// A codec ready at the default 44.1 kHz mono configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AudioConfig::default(),
            beeps_played: 0,
            samples_written: 0,
            stop_task: None,
        }
    }

    /// Number of key clicks played so far.
    #[must_use]
    pub fn beeps_played(&self) -> u64 {
        self.beeps_played
    }

    /// Total samples accepted so far.
    #[must_use]
    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    /// Synthesize and queue one key click. Fire-and-forget: returns as soon
    /// as the samples are accepted.
    pub async fn key_click(&mut self) {
        let samples = synthesize(&KEY_CLICK, &self.config);
        // Infallible by construction; the sink cannot reject samples.
        self.write_samples(&samples).await.ok();
    }

    // Division is by a rate clamped to at least 1.
    #[allow(clippy::arithmetic_side_effects)]
    fn schedule_stop(&mut self, samples: usize) {
        // A new beep replaces a still-ringing one, like retriggering the
        // oscillator; the superseded stop is cancelled.
        if let Some(task) = self.stop_task.take() {
            task.abort();
        }
        let rate = u64::from(self.config.sample_rate.max(1));
        let ms = (u64::try_from(samples).unwrap_or(0)).saturating_mul(1000) / rate;
        self.stop_task = Some(tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            trace!(duration_ms = ms, "beep finished");
        }));
    }
}

impl Default for BeepCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCodec for BeepCodec {
    type Error = core::convert::Infallible;

    async fn init(&mut self, config: AudioConfig) -> Result<(), Self::Error> {
        debug!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            "audio codec initialized"
        );
        self.config = config;
        Ok(())
    }

    async fn write_samples(&mut self, samples: &[i16]) -> Result<(), Self::Error> {
        self.beeps_played = self.beeps_played.saturating_add(1);
        self.samples_written = self
            .samples_written
            .saturating_add(u64::try_from(samples.len()).unwrap_or(0));
        trace!(samples = samples.len(), "key click queued");
        self.schedule_stop(samples.len());
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), Self::Error> {
        if let Some(task) = self.stop_task.take() {
            task.abort();
        }
        Ok(())
    }
}

impl Drop for BeepCodec {
    fn drop(&mut self) {
        // Tear-down cancels the in-flight stop callback.
        if let Some(task) = self.stop_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]
    use super::{synthesize, BeepCodec};
    use platform::{AudioCodec, AudioConfig, KEY_CLICK};

    #[test]
    fn test_click_sample_count() {
        let samples = synthesize(&KEY_CLICK, &AudioConfig::default());
        // 50 ms at 44.1 kHz.
        assert_eq!(samples.len(), 2205);
    }

    #[test]
    fn test_click_is_square() {
        let samples = synthesize(&KEY_CLICK, &AudioConfig::default());
        let amp = i64::from(KEY_CLICK.amplitude());
        assert!(samples
            .iter()
            .all(|s| i64::from(s.abs()) == amp || i64::from(s.abs()) == amp - 1));
    }

    #[test]
    fn test_click_alternates_sign() {
        let samples = synthesize(&KEY_CLICK, &AudioConfig::default());
        // 800 Hz at 44.1 kHz: a half period is ~27.5 samples, so sample 0 and
        // sample 30 sit in opposite half-waves.
        let first = samples.first().copied().unwrap_or(0);
        let later = samples.get(30).copied().unwrap_or(0);
        assert!(first.signum() != later.signum());
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_click_counts() {
        let mut codec = BeepCodec::new();
        codec.key_click().await;
        codec.key_click().await;
        assert_eq!(codec.beeps_played(), 2);
        assert_eq!(codec.samples_written(), 2 * 2205);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending() {
        let mut codec = BeepCodec::new();
        codec.key_click().await;
        codec.stop().await.unwrap();
        // Dropping after stop must not leave a live task behind.
        drop(codec);
    }
}
