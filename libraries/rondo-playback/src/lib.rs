//! Rondo - Playback Order & Session
//!
//! Decides which track is current and how that moves under linear order,
//! shuffle and repeat (none / one / all).
//!
//! This crate provides:
//! - Playback-order engine over opaque track identifiers
//! - Shuffle as a permutation of queue indices (the queue is never reordered)
//! - Repeat modes (none, one, all with a fresh shuffle on every forward lap)
//! - Playback session driving an external audio engine
//! - Volume control (linear 0.0-1.0, mute keeps the level)
//! - Persistence hooks (format left to the store)
//!
//! # Architecture
//!
//! `rondo-playback` performs no I/O and does no locking:
//! - Decoding/output is behind the [`AudioEngine`] trait
//! - Storage is behind the [`QueueStore`] trait
//! - Randomness is injected, so shuffles are reproducible with a seeded RNG
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use rondo_playback::{PlaybackOrder, RepeatMode};
//!
//! let mut order = PlaybackOrder::new();
//! order.add("intro.flac");
//! order.add("verse.flac");
//! order.add("outro.flac");
//!
//! assert_eq!(order.current(), Some(&"intro.flac"));
//! assert_eq!(order.next(), Some(&"verse.flac"));
//!
//! order.set_repeat_mode(RepeatMode::All);
//! order.next();
//! assert_eq!(order.next(), Some(&"intro.flac")); // wrapped
//! ```
//!
//! # Example: Reproducible Shuffle
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use rondo_playback::PlaybackOrder;
//!
//! let mut order = PlaybackOrder::with_rng(StdRng::seed_from_u64(7));
//! for track in ["a", "b", "c", "d"] {
//!     order.add(track);
//! }
//!
//! order.toggle_shuffle();
//! let lap: Vec<&str> = std::iter::once(*order.current().unwrap())
//!     .chain(std::iter::from_fn(|| order.next().copied()))
//!     .collect();
//! assert_eq!(lap.len(), 4);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use rondo_playback::{AudioEngine, PlaybackConfig, PlaybackSession, Result};
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! struct MyOutput {
//!     // ... platform-specific decoder and sink
//! }
//!
//! impl AudioEngine<PathBuf> for MyOutput {
//!     fn load(&mut self, track: &PathBuf) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn resume(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn set_gain(&mut self, gain: f32) {}
//!     fn seek(&mut self, position: Duration) -> Result<()> { Ok(()) }
//!     fn duration(&self) -> Option<Duration> { None }
//!     fn position(&self) -> Duration { Duration::ZERO }
//! }
//!
//! let mut session = PlaybackSession::new(MyOutput {}, PlaybackConfig::default());
//! session.enqueue(PathBuf::from("/music/song.mp3"));
//! session.play().ok();
//! session.next().ok();
//! ```

mod engine;
mod error;
mod events;
mod persistence;
mod queue;
mod session;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use engine::AudioEngine;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use persistence::{QueueSnapshot, QueueStore, UnsupportedStore};
pub use queue::PlaybackOrder;
pub use session::PlaybackSession;
pub use shuffle::ShuffleOrder;
pub use types::{PlaybackConfig, PlaybackInfo, PlaybackState, RepeatMode};
pub use volume::Volume;
