//! Playback-order engine
//!
//! Owns the master track order, the current position, the shuffle
//! permutation and the repeat policy:
//!
//! ```text
//! tracks:   [A, B, C, D]          master order, never reordered
//! shuffle:  [2, 0, 3, 1]          only while shuffle is on
//! cursor:   Some(1)               -> shuffle[1] = 0 -> A
//! ```
//!
//! With shuffle off the cursor indexes `tracks` directly. With shuffle on it
//! indexes the permutation, whose values index `tracks`.

use crate::shuffle::ShuffleOrder;
use crate::types::RepeatMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// Active index space for the cursor
#[derive(Debug, Clone)]
enum Order {
    Linear,
    Shuffled(ShuffleOrder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Ordered track queue with shuffle and repeat navigation
///
/// Track identifiers are opaque: the engine only compares them for
/// equality. Duplicates are never stored.
///
/// Every operation leaves the queue in a consistent state:
/// - empty queue: no cursor, no permutation
/// - shuffle on: permutation covers `0..len`, cursor is a position in it
/// - shuffle off: cursor is an index into the queue
///
/// Not internally synchronized; wrap in a mutex if shared.
#[derive(Debug, Clone)]
pub struct PlaybackOrder<T, R = StdRng> {
    /// Master order (insertion order)
    tracks: Vec<T>,

    /// Position in the active index space, `None` when nothing is current
    cursor: Option<usize>,

    order: Order,
    repeat: RepeatMode,
    rng: R,
}

impl<T: PartialEq> PlaybackOrder<T, StdRng> {
    /// Create empty queue seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<T: PartialEq> Default for PlaybackOrder<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, R: Rng> PlaybackOrder<T, R> {
    /// Create empty queue drawing shuffles from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            tracks: Vec::new(),
            cursor: None,
            order: Order::Linear,
            repeat: RepeatMode::Off,
            rng,
        }
    }

    // ===== Queue Mutation =====

    /// Append a track
    ///
    /// Turns shuffle off first. No-op for a track already queued.
    /// The first track added to an empty queue becomes current.
    pub fn add(&mut self, track: T) {
        if self.is_shuffled() {
            self.disable_shuffle();
        }

        if self.contains(&track) {
            trace!("Track already queued, ignoring add");
            return;
        }

        self.tracks.push(track);
        if self.cursor.is_none() && self.tracks.len() == 1 {
            self.cursor = Some(0);
        }
    }

    /// Remove a track
    ///
    /// Turns shuffle off first. If the current track survives it stays
    /// current; if it was removed the cursor stays at the same index
    /// (clamped to the new end).
    pub fn remove(&mut self, track: &T) {
        if self.is_shuffled() {
            self.disable_shuffle();
        }

        let Some(removed) = self.index_of(track) else {
            trace!("Track not queued, ignoring remove");
            return;
        };

        self.tracks.remove(removed);
        self.cursor = match self.cursor {
            _ if self.tracks.is_empty() => None,
            Some(current) if removed < current => Some(current - 1),
            Some(current) => Some(current.min(self.tracks.len() - 1)),
            None => Some(0),
        };
    }

    /// Remove every track (repeat mode is kept)
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
        self.order = Order::Linear;
    }

    // ===== Shuffle & Repeat =====

    /// Turn shuffle on or off
    ///
    /// Turning on draws a fresh permutation and moves the cursor to its
    /// head; the current track (if any) leads it and everything after is
    /// random. No-op on an empty queue. Turning off keeps the current track
    /// current in linear order.
    pub fn toggle_shuffle(&mut self) {
        if self.is_shuffled() {
            self.disable_shuffle();
        } else {
            self.enable_shuffle();
        }
    }

    /// Set shuffle explicitly
    pub fn set_shuffle(&mut self, enabled: bool) {
        if enabled != self.is_shuffled() {
            self.toggle_shuffle();
        }
    }

    pub fn is_shuffled(&self) -> bool {
        matches!(self.order, Order::Shuffled(_))
    }

    /// Current shuffle permutation (queue indices in play order)
    pub fn shuffle_order(&self) -> Option<&[usize]> {
        match &self.order {
            Order::Linear => None,
            Order::Shuffled(shuffle) => Some(shuffle.as_slice()),
        }
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        if self.repeat != mode {
            debug!(from = %self.repeat, to = %mode, "Repeat mode changed");
        }
        self.repeat = mode;
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    fn enable_shuffle(&mut self) {
        if self.tracks.is_empty() {
            debug!("Cannot shuffle an empty queue");
            return;
        }

        let len = self.tracks.len();
        let shuffle = match self.cursor.filter(|&index| index < len) {
            Some(current) => ShuffleOrder::with_head(len, current, &mut self.rng),
            None => ShuffleOrder::new(len, &mut self.rng),
        };
        self.order = Order::Shuffled(shuffle);
        self.cursor = Some(0);
        debug!(tracks = len, "Shuffle enabled");
    }

    fn disable_shuffle(&mut self) {
        let previous = std::mem::replace(&mut self.order, Order::Linear);
        let resolved = match previous {
            Order::Linear => self.cursor,
            Order::Shuffled(shuffle) => self.cursor.and_then(|position| shuffle.get(position)),
        }
        .filter(|&index| index < self.tracks.len());

        self.cursor = if self.tracks.is_empty() {
            None
        } else {
            Some(resolved.unwrap_or(0))
        };
        debug!(cursor = ?self.cursor, "Shuffle disabled");
    }

    /// Rebuild a permutation that no longer matches the queue
    fn repair_shuffle(&mut self) {
        let len = self.tracks.len();
        let Order::Shuffled(shuffle) = &self.order else {
            return;
        };
        if shuffle.len() == len {
            return;
        }

        warn!(
            permutation = shuffle.len(),
            tracks = len,
            "Shuffle order out of sync with queue, rebuilding"
        );
        if len == 0 {
            self.order = Order::Linear;
            self.cursor = None;
        } else {
            self.order = Order::Shuffled(ShuffleOrder::new(len, &mut self.rng));
            self.cursor = Some(0);
        }
    }

    // ===== Navigation =====

    /// Advance to the next track
    ///
    /// Returns `None` when the queue is empty or, with repeat off, when the
    /// end has been reached. Repeat all wraps to the head and draws a new
    /// permutation if shuffled.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        self.step(Direction::Forward)
    }

    /// Step back to the previous track
    ///
    /// Mirror of [`next`](Self::next); wrapping backward keeps the current
    /// permutation.
    pub fn previous(&mut self) -> Option<&T> {
        self.step(Direction::Backward)
    }

    fn step(&mut self, direction: Direction) -> Option<&T> {
        if self.tracks.is_empty() {
            self.cursor = None;
            self.order = Order::Linear;
            return None;
        }

        if self.repeat == RepeatMode::One {
            let position = *self.cursor.get_or_insert(0);
            trace!(position, "Repeat one holds position");
            return self.current();
        }

        self.repair_shuffle();
        let len = self.tracks.len();

        // Repeat off never resumes once the cursor has run off an end
        if self.cursor.is_none() && self.repeat == RepeatMode::Off {
            trace!(?direction, "Queue exhausted");
            return None;
        }

        let candidate = match (self.cursor, direction) {
            (None, Direction::Forward) => Some(0),
            (None, Direction::Backward) => Some(len - 1),
            (Some(position), Direction::Forward) => Some(position + 1).filter(|&p| p < len),
            (Some(position), Direction::Backward) => position.checked_sub(1),
        };

        self.cursor = match candidate {
            Some(position) => Some(position),
            None if self.repeat == RepeatMode::All => Some(self.wrap(direction, len)),
            None => {
                debug!(?direction, "Reached end of queue");
                None
            }
        };

        trace!(?direction, cursor = ?self.cursor, "Stepped");
        self.current()
    }

    fn wrap(&mut self, direction: Direction, len: usize) -> usize {
        match direction {
            Direction::Forward => {
                if let Order::Shuffled(shuffle) = &mut self.order {
                    shuffle.reshuffle(&mut self.rng);
                    debug!("Reshuffled for next lap");
                }
                0
            }
            Direction::Backward => len - 1,
        }
    }

    // ===== Lookup =====

    /// Currently selected track, if any
    pub fn current(&self) -> Option<&T> {
        self.cursor
            .and_then(|position| self.resolve(position))
            .and_then(|index| self.tracks.get(index))
    }

    /// Make `track` current
    ///
    /// Returns `false` if it is not queued. With shuffle on the cursor moves
    /// to the track's place in the permutation.
    pub fn set_current(&mut self, track: &T) -> bool {
        let Some(index) = self.index_of(track) else {
            return false;
        };

        self.repair_shuffle();
        let position = match &self.order {
            Order::Linear => Some(index),
            Order::Shuffled(shuffle) => shuffle.position_of(index),
        };

        match position {
            Some(position) => self.cursor = Some(position),
            None => {
                warn!(index, "Track missing from shuffle order, falling back to linear order");
                self.order = Order::Linear;
                self.cursor = Some(index);
            }
        }
        true
    }

    /// Leave the queue with nothing current, as after running off the end
    pub(crate) fn release_cursor(&mut self) {
        self.cursor = None;
    }

    /// Master order, never the shuffled order
    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    /// Cursor in the active index space (permutation position while shuffled)
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track: &T) -> bool {
        self.tracks.contains(track)
    }

    fn index_of(&self, track: &T) -> Option<usize> {
        self.tracks.iter().position(|t| t == track)
    }

    /// Map a cursor position to a queue index
    fn resolve(&self, position: usize) -> Option<usize> {
        let index = match &self.order {
            Order::Linear => position,
            Order::Shuffled(shuffle) => shuffle.get(position)?,
        };
        (index < self.tracks.len()).then_some(index)
    }
}
