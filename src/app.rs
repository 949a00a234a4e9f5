//! Explicit application state shared by the story's sections.

use crate::foundation::error::{LyumenError, LyumenResult};

/// The seven chapters of the story, in scroll order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Opening.
    #[default]
    Prologue,
    /// Roman Lyon.
    Lugdunum,
    /// Printing and silk.
    Renaissance,
    /// The Lumière brothers and their films.
    Freres,
    /// Street lighting through the day.
    Streets,
    /// Festival of Lights and the pattern builder.
    Fete,
    /// Closing.
    Futur,
}

impl Section {
    /// Every section in scroll order.
    pub const ALL: [Section; 7] = [
        Self::Prologue,
        Self::Lugdunum,
        Self::Renaissance,
        Self::Freres,
        Self::Streets,
        Self::Fete,
        Self::Futur,
    ];

    /// Stable anchor id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Prologue => "prologue",
            Self::Lugdunum => "lugdunum",
            Self::Renaissance => "renaissance",
            Self::Freres => "freres",
            Self::Streets => "streets",
            Self::Fete => "fete",
            Self::Futur => "futur",
        }
    }

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Prologue => "Prologue",
            Self::Lugdunum => "Lugdunum",
            Self::Renaissance => "Renaissance",
            Self::Freres => "Frères Lumière",
            Self::Streets => "Rues de Lumière",
            Self::Fete => "Fête des Lumières",
            Self::Futur => "Futur Lumineux",
        }
    }

    /// Position in scroll order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::str::FromStr for Section {
    type Err = LyumenError;

    fn from_str(s: &str) -> LyumenResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LyumenError::validation(format!("unknown section '{s}'")))
    }
}

/// Output volume for the two audio channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioLevels {
    /// Background ambience.
    pub ambient: f64,
    /// Per-section narration.
    pub narrator: f64,
}

/// Speaker icon tier for the volume control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    /// Muted or zero volume.
    Muted,
    /// Below 0.4.
    Low,
    /// Below 0.7.
    Medium,
    /// 0.7 and up.
    High,
}

const AMBIENT_GAIN: f64 = 0.4;

/// Global state of the story: section, audio flags, volume and read progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppState {
    current_section: Section,
    audio_enabled: bool,
    muted: bool,
    volume: f64,
    progress: f64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_section: Section::Prologue,
            audio_enabled: false,
            muted: false,
            volume: 0.5,
            progress: 0.0,
        }
    }
}

impl AppState {
    /// Fresh state: first section, audio off, half volume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Section currently in view.
    pub fn current_section(&self) -> Section {
        self.current_section
    }

    /// Set the section by index, clamped to the last section.
    pub fn set_current_section(&mut self, index: usize) {
        let last = Section::ALL.len() - 1;
        let next = Section::ALL[index.min(last)];
        if next != self.current_section {
            tracing::debug!(section = next.id(), "current section changed");
        }
        self.current_section = next;
    }

    /// Whether ambient audio is on.
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Flip ambient audio on or off.
    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        self.audio_enabled
    }

    /// Whether output is muted.
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Flip mute.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Master volume in `[0, 1]`.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Set the master volume, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_nan() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    /// Read progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set read progress, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_progress(&mut self, progress: f64) {
        if !progress.is_nan() {
            self.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Channel volumes derived from the master volume and mute flag.
    pub fn audio_levels(&self) -> AudioLevels {
        if self.muted {
            return AudioLevels {
                ambient: 0.0,
                narrator: 0.0,
            };
        }
        AudioLevels {
            ambient: self.volume * AMBIENT_GAIN,
            narrator: self.volume,
        }
    }

    /// Narration clips are not shipped, so the narrator channel never plays.
    pub fn narration_enabled(&self) -> bool {
        false
    }

    /// Icon tier for the current volume.
    pub fn volume_icon(&self) -> VolumeIcon {
        if self.muted || self.volume == 0.0 {
            VolumeIcon::Muted
        } else if self.volume < 0.4 {
            VolumeIcon::Low
        } else if self.volume < 0.7 {
            VolumeIcon::Medium
        } else {
            VolumeIcon::High
        }
    }
}

/// Index of the section in view: the last one whose top, shifted up by half a viewport, has been
/// scrolled past. `section_tops` are document offsets in scroll order. `None` when no section
/// qualifies yet; callers keep whatever section they already show.
pub fn section_for_scroll(scroll_y: f64, viewport_h: f64, section_tops: &[f64]) -> Option<usize> {
    section_tops
        .iter()
        .rposition(|&top| scroll_y >= top - viewport_h / 2.0)
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
