//! Error types for playback management

use std::path::PathBuf;
use thiserror::Error;

/// Playback errors
///
/// The order engine itself never fails; these surface from the session
/// (external audio engine, transport requests) and from queue stores.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Nothing is current in the queue
    #[error("No current track")]
    NoCurrentTrack,

    /// Requested identifier is not in the queue
    #[error("Track not in queue")]
    TrackNotInQueue,

    /// No track is loaded in the audio engine
    #[error("No track loaded")]
    NoTrackLoaded,

    /// External audio engine error
    #[error("Audio engine error: {0}")]
    Engine(String),

    /// The store has no persistence format
    #[error("Queue persistence not supported: {}", .0.display())]
    PersistenceUnsupported(PathBuf),

    /// Store implementation error
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
