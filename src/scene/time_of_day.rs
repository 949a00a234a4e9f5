use chrono::Timelike as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{LyumenError, LyumenResult};

/// Lighting period of the street scene.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 07:00 to 16:00.
    Day,
    /// 16:00 to 20:00.
    #[default]
    Sunset,
    /// Everything else.
    Night,
}

impl TimeOfDay {
    /// Period containing wall-clock hour `hour` (0..=23). Hours past 23 wrap.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            7..16 => Self::Day,
            16..20 => Self::Sunset,
            _ => Self::Night,
        }
    }

    /// Sky backdrop color.
    pub const fn sky(self) -> Rgba8 {
        match self {
            Self::Day => Rgba8::from_hex(0x67a1e5),
            Self::Sunset => Rgba8::from_hex(0x472082),
            Self::Night => Rgba8::from_hex(0x091747),
        }
    }

    /// Opacity of the lit windows and street lamps.
    pub const fn city_light_opacity(self) -> f64 {
        match self {
            Self::Day => 0.0,
            Self::Sunset => 0.3,
            Self::Night => 1.0,
        }
    }

    /// Opacity of the star field.
    pub const fn star_opacity(self) -> f64 {
        match self {
            Self::Day => 0.0,
            Self::Sunset => 0.3,
            Self::Night => 0.9,
        }
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = LyumenError;

    fn from_str(s: &str) -> LyumenResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "sunset" => Ok(Self::Sunset),
            "night" => Ok(Self::Night),
            other => Err(LyumenError::validation(format!(
                "unknown time of day '{other}'"
            ))),
        }
    }
}

/// Selected lighting period: a clock-derived default until the user picks one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDayState {
    current: TimeOfDay,
    overridden: bool,
}

impl TimeOfDayState {
    /// Default state for wall-clock hour `hour`.
    pub fn from_hour(hour: u32) -> Self {
        Self {
            current: TimeOfDay::from_hour(hour),
            overridden: false,
        }
    }

    /// Default state for the current local wall-clock hour.
    pub fn from_system_clock() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }

    /// User override. Replaces the clock default for the rest of the session.
    pub fn select(&mut self, time: TimeOfDay) {
        self.current = time;
        self.overridden = true;
    }

    /// Active period.
    pub fn current(&self) -> TimeOfDay {
        self.current
    }

    /// Whether the user has picked a period.
    pub fn overridden(&self) -> bool {
        self.overridden
    }

    /// Sky color of the active period.
    pub fn sky(&self) -> Rgba8 {
        self.current.sky()
    }

    /// City light opacity of the active period.
    pub fn city_light_opacity(&self) -> f64 {
        self.current.city_light_opacity()
    }

    /// Star opacity of the active period.
    pub fn star_opacity(&self) -> f64 {
        self.current.star_opacity()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/time_of_day.rs"]
mod tests;
