//! Playback session - transport orchestration
//!
//! Couples the order engine to an external audio engine and mirrors the
//! transport state (stopped / playing / paused) alongside it.

use crate::{
    engine::AudioEngine,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    queue::PlaybackOrder,
    types::{PlaybackConfig, PlaybackInfo, PlaybackState, RepeatMode},
    volume::Volume,
};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Playback session
///
/// Navigation loads the new track into the audio engine and only starts it
/// if the transport was already playing: a paused session stays paused on
/// the new track, a stopped one stays stopped.
pub struct PlaybackSession<T, E, R = StdRng> {
    // State
    state: PlaybackState,
    loaded: Option<T>,

    order: PlaybackOrder<T, R>,
    engine: E,

    // Settings
    volume: Volume,
    shuffle_pending: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent<T>>,
}

impl<T: Clone + PartialEq, E: AudioEngine<T>> PlaybackSession<T, E, StdRng> {
    /// Create session with an empty queue
    pub fn new(engine: E, config: PlaybackConfig) -> Self {
        Self::with_order(engine, PlaybackOrder::new(), config)
    }
}

impl<T: Clone + PartialEq, E: AudioEngine<T>, R: Rng> PlaybackSession<T, E, R> {
    /// Create session around an existing queue
    pub fn with_order(mut engine: E, mut order: PlaybackOrder<T, R>, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.volume);
        engine.set_gain(volume.gain());
        order.set_repeat_mode(config.repeat);

        let mut session = Self {
            state: PlaybackState::Stopped,
            loaded: None,
            order,
            engine,
            volume,
            shuffle_pending: config.shuffle,
            pending_events: Vec::new(),
        };
        session.apply_pending_shuffle();
        session
    }

    // ===== Playback Control =====

    /// Start or resume playback of the current track
    pub fn play(&mut self) -> Result<()> {
        if self.state == PlaybackState::Paused && self.loaded.is_some() {
            self.engine.resume();
            self.set_state(PlaybackState::Playing);
            return Ok(());
        }

        let Some(track) = self.order.current().cloned() else {
            debug!("No current track to play");
            self.set_state(PlaybackState::Stopped);
            return Err(PlaybackError::NoCurrentTrack);
        };

        if self.loaded.as_ref() != Some(&track) {
            self.load(track)?;
        }
        self.start()
    }

    /// Make `track` current and play it from the start
    pub fn play_track(&mut self, track: &T) -> Result<()> {
        if !self.order.set_current(track) {
            self.stop();
            return Err(PlaybackError::TrackNotInQueue);
        }

        self.load(track.clone())?;
        self.start()
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.engine.pause();
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Stop playback (the loaded track is kept)
    pub fn stop(&mut self) {
        self.engine.stop();
        self.set_state(PlaybackState::Stopped);
    }

    /// Skip to next track
    ///
    /// Returns the newly loaded track, or `None` (and stops) when the queue
    /// has nothing further to offer.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<T>> {
        let track = self.order.next().cloned();
        self.follow(track)
    }

    /// Go to previous track
    pub fn previous(&mut self) -> Result<Option<T>> {
        let track = self.order.previous().cloned();
        self.follow(track)
    }

    /// Jump to `track` without changing the transport state
    pub fn select(&mut self, track: &T) -> Result<()> {
        if !self.order.set_current(track) {
            return Err(PlaybackError::TrackNotInQueue);
        }

        let current = self.order.current().cloned();
        self.follow(current).map(|_| ())
    }

    /// Load the track navigation landed on, playing it if we were playing
    fn follow(&mut self, track: Option<T>) -> Result<Option<T>> {
        let was_playing = self.state == PlaybackState::Playing;

        let Some(track) = track else {
            self.stop();
            self.pending_events.push(PlaybackEvent::QueueExhausted);
            return Ok(None);
        };

        self.load(track.clone())?;
        if was_playing {
            self.start()?;
        }
        Ok(Some(track))
    }

    fn load(&mut self, track: T) -> Result<()> {
        if let Err(err) = self.engine.load(&track) {
            warn!(error = %err, "Failed to load track");
            self.loaded = None;
            self.fail(&err);
            return Err(err);
        }

        let previous = self.loaded.replace(track.clone());
        if previous.as_ref() != Some(&track) {
            debug!("Loaded new track");
            self.pending_events
                .push(PlaybackEvent::TrackChanged { track, previous });
        }
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        if let Err(err) = self.engine.play() {
            warn!(error = %err, "Audio engine failed to start");
            self.fail(&err);
            return Err(err);
        }
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    fn fail(&mut self, err: &PlaybackError) {
        self.engine.stop();
        self.set_state(PlaybackState::Stopped);
        self.pending_events.push(PlaybackEvent::Error {
            message: err.to_string(),
        });
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            debug!(from = ?self.state, to = ?state, "Transport state changed");
            self.state = state;
            self.pending_events
                .push(PlaybackEvent::StateChanged { state });
        }
    }

    // ===== Queue Management =====

    /// Append a track to the queue
    pub fn enqueue(&mut self, track: T) {
        let before = self.order.len();
        self.order.add(track);
        self.apply_pending_shuffle();
        self.emit_queue_changed(before);
    }

    /// Remove a track from the queue
    pub fn dequeue(&mut self, track: &T) {
        let before = self.order.len();
        self.order.remove(track);
        self.emit_queue_changed(before);
    }

    pub fn toggle_shuffle(&mut self) {
        self.order.toggle_shuffle();
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.order.set_repeat_mode(mode);
    }

    pub fn order(&self) -> &PlaybackOrder<T, R> {
        &self.order
    }

    /// Direct queue access (no events are emitted)
    pub fn order_mut(&mut self) -> &mut PlaybackOrder<T, R> {
        &mut self.order
    }

    fn apply_pending_shuffle(&mut self) {
        if self.shuffle_pending && !self.order.is_empty() {
            self.order.set_shuffle(true);
            self.shuffle_pending = false;
        }
    }

    fn emit_queue_changed(&mut self, before: usize) {
        let length = self.order.len();
        if length != before {
            self.pending_events.push(PlaybackEvent::QueueChanged { length });
        }
    }

    // ===== Volume =====

    /// Set linear volume, clamped to 0.0-1.0
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.apply_volume();
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn mute(&mut self) {
        self.volume.mute();
        self.apply_volume();
    }

    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.apply_volume();
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    fn apply_volume(&mut self) {
        self.engine.set_gain(self.volume.gain());
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    // ===== Seek =====

    /// Seek in the loaded track, clamped to its duration
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        let duration = match (&self.loaded, self.engine.duration()) {
            (Some(_), Some(duration)) if !duration.is_zero() => duration,
            _ => return Err(PlaybackError::NoTrackLoaded),
        };
        self.engine.seek(position.min(duration))
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Track currently loaded in the audio engine
    pub fn loaded_track(&self) -> Option<&T> {
        self.loaded.as_ref()
    }

    /// Position in the loaded track (zero when stopped)
    pub fn position(&self) -> Duration {
        if self.state == PlaybackState::Stopped || self.loaded.is_none() {
            Duration::ZERO
        } else {
            self.engine.position()
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.loaded.as_ref().and_then(|_| self.engine.duration())
    }

    pub fn info(&self) -> PlaybackInfo<T> {
        PlaybackInfo {
            state: self.state,
            position: self.position(),
            duration: self.duration(),
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            track: self.loaded.clone(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ===== Events =====

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent<T>> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}
