use crate::foundation::core::Rgba8;
use crate::foundation::error::{LyumenError, LyumenResult};

/// Palette keys offered by the installation builder.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    /// Violet, the default.
    #[default]
    Purple,
    /// Golden amber.
    Gold,
    /// Blue.
    Blue,
    /// Red.
    Red,
}

impl ColorKind {
    /// Every palette key, in menu order.
    pub const ALL: [ColorKind; 4] = [Self::Purple, Self::Gold, Self::Blue, Self::Red];

    /// Display color for this key.
    pub const fn rgba(self) -> Rgba8 {
        match self {
            Self::Purple => Rgba8::from_hex(0x8b5cf6),
            Self::Gold => Rgba8::from_hex(0xf59e0b),
            Self::Blue => Rgba8::from_hex(0x3b82f6),
            Self::Red => Rgba8::from_hex(0xef4444),
        }
    }

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Gold => "gold",
            Self::Blue => "blue",
            Self::Red => "red",
        }
    }

    /// Resolve a raw key to a display color. Unmapped keys get the default color.
    pub fn resolve_key(key: &str) -> Rgba8 {
        key.parse::<Self>().unwrap_or_default().rgba()
    }
}

impl std::str::FromStr for ColorKind {
    type Err = LyumenError;

    fn from_str(s: &str) -> LyumenResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LyumenError::validation(format!("unknown color key '{s}'")))
    }
}

impl std::fmt::Display for ColorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/color.rs"]
mod tests;
