//! Output level for the session
//!
//! A linear 0.0-1.0 level handed to the audio engine as its gain. Muting
//! sends silence but remembers the level.

/// Level the session starts at when nothing is configured
pub const DEFAULT_LEVEL: f32 = 0.5;

/// Linear output level with mute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    level: f32,
    muted: bool,
}

impl Volume {
    /// Create an unmuted volume at `level`, clamped to 0.0-1.0
    pub fn new(level: f32) -> Self {
        Self {
            level: clamp_level(level),
            muted: false,
        }
    }

    /// Set the level, clamped to 0.0-1.0 (NaN counts as silence)
    ///
    /// Does not touch the mute flag.
    pub fn set_level(&mut self, level: f32) {
        self.level = clamp_level(level);
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Gain for the audio engine: the level, or 0.0 while muted
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_half() {
        let volume = Volume::default();
        assert_eq!(volume.level(), 0.5);
        assert_eq!(volume.gain(), 0.5);
        assert!(!volume.is_muted());
    }

    #[test]
    fn level_is_clamped() {
        assert_eq!(Volume::new(1.7).level(), 1.0);
        assert_eq!(Volume::new(-0.3).level(), 0.0);

        let mut volume = Volume::default();
        volume.set_level(0.25);
        assert_eq!(volume.level(), 0.25);

        volume.set_level(f32::NAN);
        assert_eq!(volume.level(), 0.0);

        volume.set_level(f32::INFINITY);
        assert_eq!(volume.level(), 1.0);
    }

    #[test]
    fn gain_is_linear() {
        for level in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(Volume::new(level).gain(), level);
        }
    }

    #[test]
    fn mute_keeps_level() {
        let mut volume = Volume::new(0.8);
        volume.mute();
        assert!(volume.is_muted());
        assert_eq!(volume.level(), 0.8);
        assert_eq!(volume.gain(), 0.0);

        // Level changes while muted stay silent until unmuted
        volume.set_level(0.3);
        assert_eq!(volume.gain(), 0.0);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert_eq!(volume.gain(), 0.3);

        volume.unmute();
        assert_eq!(volume.gain(), 0.3);
    }
}
