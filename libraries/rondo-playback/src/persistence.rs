//! Queue persistence hooks
//!
//! No storage format is defined here. A [`QueueStore`] decides how (and
//! whether) a [`QueueSnapshot`] reaches disk; [`UnsupportedStore`] declines
//! every request.

use crate::error::{PlaybackError, Result};
use crate::queue::PlaybackOrder;
use crate::types::RepeatMode;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Restorable queue contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSnapshot<T> {
    /// Master order
    pub tracks: Vec<T>,

    /// Track that was current, if any
    pub current: Option<T>,

    pub repeat: RepeatMode,
}

/// Storage backend for queue snapshots
pub trait QueueStore<T> {
    fn save(&mut self, path: &Path, snapshot: &QueueSnapshot<T>) -> Result<()>;

    fn load(&mut self, path: &Path) -> Result<QueueSnapshot<T>>;
}

/// Store that has no persistence format
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedStore;

impl<T> QueueStore<T> for UnsupportedStore {
    fn save(&mut self, path: &Path, _snapshot: &QueueSnapshot<T>) -> Result<()> {
        info!(path = %path.display(), "Queue save requested (not implemented)");
        Err(PlaybackError::PersistenceUnsupported(path.to_path_buf()))
    }

    fn load(&mut self, path: &Path) -> Result<QueueSnapshot<T>> {
        info!(path = %path.display(), "Queue load requested (not implemented)");
        Err(PlaybackError::PersistenceUnsupported(path.to_path_buf()))
    }
}

impl<T: Clone + PartialEq, R: Rng> PlaybackOrder<T, R> {
    /// Capture tracks, current track and repeat mode
    pub fn snapshot(&self) -> QueueSnapshot<T> {
        QueueSnapshot {
            tracks: self.tracks().to_vec(),
            current: self.current().cloned(),
            repeat: self.repeat_mode(),
        }
    }

    /// Replace contents with a snapshot
    ///
    /// Tracks are re-added in order (duplicates dropped) with shuffle off.
    /// An unknown `current` leaves the head selected; no `current` restores
    /// an exhausted queue.
    pub fn restore(&mut self, snapshot: QueueSnapshot<T>) {
        self.clear();
        for track in snapshot.tracks {
            self.add(track);
        }
        match &snapshot.current {
            Some(current) => {
                self.set_current(current);
            }
            None => self.release_cursor(),
        }
        self.set_repeat_mode(snapshot.repeat);
    }

    /// Hand a snapshot to `store`
    pub fn save<S: QueueStore<T> + ?Sized>(&self, store: &mut S, path: &Path) -> Result<()> {
        store.save(path, &self.snapshot())?;
        debug!(path = %path.display(), tracks = self.len(), "Queue saved");
        Ok(())
    }

    /// Restore from `store`; the queue is untouched if the store fails
    pub fn load<S: QueueStore<T> + ?Sized>(&mut self, store: &mut S, path: &Path) -> Result<()> {
        let snapshot = store.load(path)?;
        self.restore(snapshot);
        debug!(path = %path.display(), tracks = self.len(), "Queue loaded");
        Ok(())
    }
}
