//! Shared helpers for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use rondo_playback::{AudioEngine, PlaybackError, PlaybackOrder, Result};
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Install a test subscriber once per binary
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn track(name: &str) -> PathBuf {
    PathBuf::from(format!("/music/{}.mp3", name))
}

/// Queue of `/music/<name>.mp3` paths with a seeded shuffle source
pub fn order_of(names: &[&str], seed: u64) -> PlaybackOrder<PathBuf> {
    init_logging();
    let mut order = PlaybackOrder::with_rng(StdRng::seed_from_u64(seed));
    for name in names {
        order.add(track(name));
    }
    order
}

/// Calls observed by [`MockEngine`]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(PathBuf),
    Play,
    Pause,
    Resume,
    Stop,
    Seek(Duration),
}

/// Audio engine that records every call
///
/// Paths containing `corrupt` fail to load.
#[derive(Debug, Default)]
pub struct MockEngine {
    pub calls: Vec<EngineCall>,
    pub loaded: Option<PathBuf>,
    pub playing: bool,
    pub gain: f32,
    pub position: Duration,
    pub fail_play: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == EngineCall::Play).count()
    }

    pub fn loads(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Load(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}

impl AudioEngine<PathBuf> for MockEngine {
    fn load(&mut self, track: &PathBuf) -> Result<()> {
        self.calls.push(EngineCall::Load(track.clone()));
        if track.to_string_lossy().contains("corrupt") {
            return Err(PlaybackError::Engine(format!(
                "unsupported format: {}",
                track.display()
            )));
        }
        self.loaded = Some(track.clone());
        self.playing = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(EngineCall::Play);
        if self.fail_play {
            return Err(PlaybackError::Engine("output device lost".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(EngineCall::Pause);
        self.playing = false;
    }

    fn resume(&mut self) {
        self.calls.push(EngineCall::Resume);
        self.playing = true;
    }

    fn stop(&mut self) {
        self.calls.push(EngineCall::Stop);
        self.playing = false;
        self.position = Duration::ZERO;
    }

    fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.calls.push(EngineCall::Seek(position));
        self.position = position;
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.loaded.as_ref().map(|_| Duration::from_secs(200))
    }

    fn position(&self) -> Duration {
        self.position
    }
}
