//! Key-click tone description.
//!
//! The click itself is presentation: an 800 Hz square wave, 50 ms long, at
//! low gain, fired on every key press. This module holds the tone
//! description and the sample math; synthesis lives with the codec that owns
//! the sample format.

/// Description of a fixed synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Oscillator frequency in Hz.
    pub frequency_hz: u32,
    /// Tone length in milliseconds.
    pub duration_ms: u32,
    /// Linear gain, `0.0..=1.0`.
    pub gain: f32,
}

/// The key click played on every key press.
pub const KEY_CLICK: ToneSpec = ToneSpec {
    frequency_hz: 800,
    duration_ms: 50,
    gain: 0.1,
};

impl ToneSpec {
    /// Number of samples needed to play this tone at `sample_rate` Hz.
    #[must_use]
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        // ms * rate / 1000, in u64 so 768 kHz * u32::MAX ms cannot overflow.
        let n = u64::from(sample_rate)
            .saturating_mul(u64::from(self.duration_ms))
            .checked_div(1000)
            .unwrap_or(0);
        usize::try_from(n).unwrap_or(usize::MAX)
    }

    /// Peak sample amplitude for this tone's gain.
    // 0.0..=1.0 * i16::MAX stays in range; truncation is the intent.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn amplitude(&self) -> i16 {
        let g = self.gain.clamp(0.0, 1.0);
        (g * f32::from(i16::MAX)) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::{ToneSpec, KEY_CLICK};

    #[test]
    fn test_key_click_spec() {
        assert_eq!(KEY_CLICK.frequency_hz, 800);
        assert_eq!(KEY_CLICK.duration_ms, 50);
        assert!((KEY_CLICK.gain - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_sample_count_at_44100() {
        // 50 ms at 44.1 kHz → 2205 samples.
        assert_eq!(KEY_CLICK.sample_count(44_100), 2205);
    }

    #[test]
    fn test_sample_count_zero_rate() {
        assert_eq!(KEY_CLICK.sample_count(0), 0);
    }

    #[test]
    fn test_amplitude_is_tenth_of_full_scale() {
        let a = KEY_CLICK.amplitude();
        assert!((3200..=3300).contains(&a), "got {a}");
    }

    #[test]
    fn test_amplitude_clamps_gain() {
        let hot = ToneSpec {
            frequency_hz: 800,
            duration_ms: 50,
            gain: 7.5,
        };
        assert_eq!(hot.amplitude(), i16::MAX);
    }
}
