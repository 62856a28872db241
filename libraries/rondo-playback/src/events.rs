//! Playback Events
//!
//! Queued by the session and drained by the front end after each command.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent<T> {
    /// Transport state changed
    StateChanged {
        /// The new transport state
        state: PlaybackState,
    },

    /// A different track was loaded into the audio engine
    TrackChanged {
        /// The newly loaded track
        track: T,
        /// The track loaded before it (if any)
        previous: Option<T>,
    },

    /// Navigation ran off the end of the queue
    QueueExhausted,

    /// Tracks added or removed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Volume changed
    VolumeChanged {
        /// New linear level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// The audio engine reported an error
    Error {
        /// Error message
        message: String,
    },
}
