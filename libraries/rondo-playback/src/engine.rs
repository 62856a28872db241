//! Audio engine boundary
//!
//! Decoding, output, seeking and tag reading live outside this crate.
//! The session drives them through this trait.

use crate::error::Result;
use std::time::Duration;

/// External audio engine
///
/// Implementors decode and output a single loaded track at a time
/// (rodio/cpal on desktop, a platform bridge on mobile, a mock in tests).
pub trait AudioEngine<T> {
    /// Load `track`, replacing whatever was loaded
    ///
    /// The new track starts at position zero and does not play until
    /// [`play`](Self::play) is called.
    fn load(&mut self, track: &T) -> Result<()>;

    /// Start the loaded track from its current position
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Stop output and rewind
    fn stop(&mut self);

    /// Linear output gain (0.0 = silence, 1.0 = unity)
    fn set_gain(&mut self, gain: f32);

    /// Seek within the loaded track
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Duration of the loaded track, if known
    fn duration(&self) -> Option<Duration>;

    /// Playback position in the loaded track
    fn position(&self) -> Duration;
}
