//! Core types for playback management

use crate::volume::DEFAULT_LEVEL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop at either end of the queue
    #[default]
    #[serde(rename = "none")]
    Off,

    /// Pin navigation to the current track
    One,

    /// Wrap around, reshuffling on every forward lap
    All,
}

impl RepeatMode {
    /// Name used by front ends and config files
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "none",
            RepeatMode::One => "one",
            RepeatMode::All => "all",
        }
    }
}

/// Lenient parse: anything other than `one` or `all` is `Off`
impl From<&str> for RepeatMode {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "one" => RepeatMode::One,
            "all" => RepeatMode::All,
            _ => RepeatMode::Off,
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport state of the playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing playing (a track may still be loaded)
    #[default]
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial linear volume (0.0-1.0, default: 0.5)
    pub volume: f32,

    /// Initial repeat mode (default: none)
    pub repeat: RepeatMode,

    /// Start shuffled once the queue has tracks (default: false)
    pub shuffle: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_LEVEL,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}

/// Snapshot of the session for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackInfo<T> {
    pub state: PlaybackState,

    /// Position in the loaded track (zero when stopped)
    pub position: Duration,

    /// Duration reported by the audio engine
    pub duration: Option<Duration>,

    /// Linear volume (0.0-1.0), kept while muted
    pub volume: f32,
    pub is_muted: bool,

    /// Identifier loaded in the audio engine
    pub track: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 0.5);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert!(!config.shuffle);
    }

    #[test]
    fn config_fills_missing_fields() {
        let config: PlaybackConfig = serde_json::from_str(r#"{"repeat":"all"}"#).unwrap();
        assert_eq!(config.volume, 0.5);
        assert_eq!(config.repeat, RepeatMode::All);
        assert!(!config.shuffle);
    }

    #[test]
    fn repeat_mode_parse_is_lenient() {
        assert_eq!(RepeatMode::from("none"), RepeatMode::Off);
        assert_eq!(RepeatMode::from("one"), RepeatMode::One);
        assert_eq!(RepeatMode::from(" ALL "), RepeatMode::All);
        assert_eq!(RepeatMode::from("shuffle"), RepeatMode::Off);
        assert_eq!(RepeatMode::from(""), RepeatMode::Off);
    }

    #[test]
    fn repeat_mode_display_round_trips_through_parse() {
        for mode in [RepeatMode::Off, RepeatMode::One, RepeatMode::All] {
            assert_eq!(RepeatMode::from(mode.to_string().as_str()), mode);
        }
    }
}
