//! Audio output abstraction

/// Audio output trait — the sink for the synthesized key click
pub trait AudioCodec {
    /// Error type
    type Error: core::fmt::Debug;

    /// Initialize the codec with a configuration
    fn init(
        &mut self,
        config: AudioConfig,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Write audio samples. Fire-and-forget: playback is never awaited by
    /// the caller beyond queueing.
    fn write_samples(
        &mut self,
        samples: &[i16],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Stop playback
    fn stop(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}

/// Audio configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u8,
    /// Bit depth
    pub bit_depth: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        // The key click is mono 16-bit; 44.1 kHz keeps the square edges crisp.
        Self {
            sample_rate: 44_100,
            channels: 1,
            bit_depth: 16,
        }
    }
}
