//! Interface sound toggle.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hover,
    Click,
}

impl SoundCue {
    /// Id of the `<audio>` element holding the cue.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Hover => "hoverSound",
            Self::Click => "clickSound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundState {
    enabled: bool,
}

impl Default for SoundState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundState {
    #[must_use]
    pub const fn enabled(self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        if self.enabled { "🔊" } else { "🔇" }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.enabled {
            "Mute interface sounds"
        } else {
            "Unmute interface sounds"
        }
    }

    /// Whether `cue` should be audible right now.
    #[must_use]
    pub const fn should_play(self, _cue: SoundCue) -> bool {
        self.enabled
    }
}
