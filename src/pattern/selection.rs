use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::error::{LyumenError, LyumenResult};
use crate::pattern::color::ColorKind;

/// Shape families the pattern renderer can draw.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Multi-turn spiral stroke.
    #[default]
    Spiral,
    /// Parallel horizontal sine waves.
    Waves,
    /// Filled eight-armed star.
    Star,
    /// Concentric rings.
    #[serde(alias = "rings")]
    Circles,
}

impl ShapeKind {
    /// Every shape, in menu order.
    pub const ALL: [ShapeKind; 4] = [Self::Spiral, Self::Waves, Self::Star, Self::Circles];

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Spiral => "spiral",
            Self::Waves => "waves",
            Self::Star => "star",
            Self::Circles => "circles",
        }
    }

    /// Parse a raw key, dispatching unknown keys to the spiral.
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = LyumenError;

    fn from_str(s: &str) -> LyumenResult<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("rings") {
            return Ok(Self::Circles);
        }
        Self::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LyumenError::validation(format!("unknown shape key '{s}'")))
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Time-based effect applied to the selected shape. Exactly one is active per frame.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    /// Uniform breathing scale.
    #[default]
    Pulse,
    /// Angular drift.
    Rotate,
    /// Opacity flicker, geometry untouched.
    Twinkle,
    /// Travelling displacement wave.
    Ripple,
}

impl EffectKind {
    /// Every effect, in menu order.
    pub const ALL: [EffectKind; 4] = [Self::Pulse, Self::Rotate, Self::Twinkle, Self::Ripple];

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Rotate => "rotate",
            Self::Twinkle => "twinkle",
            Self::Ripple => "ripple",
        }
    }
}

impl std::str::FromStr for EffectKind {
    type Err = LyumenError;

    fn from_str(s: &str) -> LyumenResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LyumenError::validation(format!("unknown effect key '{s}'")))
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The user's current choice of shape, color and effect.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct PatternSelection {
    /// Selected shape.
    pub shape: ShapeKind,
    /// Selected palette key.
    pub color: ColorKind,
    /// Selected effect.
    pub effect: EffectKind,
}

impl PatternSelection {
    /// Build a selection from its three parts.
    pub fn new(shape: ShapeKind, color: ColorKind, effect: EffectKind) -> Self {
        Self {
            shape,
            color,
            effect,
        }
    }

    /// Return the selection that results from a single click.
    pub fn with_event(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::Shape(shape) => Self { shape, ..self },
            SelectionEvent::Color(color) => Self { color, ..self },
            SelectionEvent::Effect(effect) => Self { effect, ..self },
        }
    }
}

/// A discrete click on one of the builder's buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A shape button.
    Shape(ShapeKind),
    /// A color button.
    Color(ColorKind),
    /// An effect button.
    Effect(EffectKind),
}

impl SelectionEvent {
    /// Parse a `(group, value)` pair such as `("shape", "star")`.
    pub fn parse(group: &str, value: &str) -> LyumenResult<Self> {
        match group.trim().to_ascii_lowercase().as_str() {
            "shape" => Ok(Self::Shape(value.parse()?)),
            "color" => Ok(Self::Color(value.parse()?)),
            "effect" => Ok(Self::Effect(value.parse()?)),
            other => Err(LyumenError::validation(format!(
                "unknown selection group '{other}'"
            ))),
        }
    }
}

/// Shared, single-threaded cell holding the latest selection.
///
/// Click handlers write through one clone while the render loop reads the latest value through
/// another at the start of each frame.
#[derive(Clone, Debug, Default)]
pub struct SelectionHandle(Rc<Cell<PatternSelection>>);

impl SelectionHandle {
    /// Create a handle seeded with `initial`.
    pub fn new(initial: PatternSelection) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    /// Current selection.
    pub fn get(&self) -> PatternSelection {
        self.0.get()
    }

    /// Replace the selection wholesale.
    pub fn set(&self, selection: PatternSelection) {
        self.0.set(selection);
    }

    /// Apply a click and return the new selection.
    pub fn apply(&self, event: SelectionEvent) -> PatternSelection {
        let next = self.get().with_event(event);
        self.set(next);
        tracing::debug!(
            shape = %next.shape,
            color = %next.color,
            effect = %next.effect,
            "pattern selection changed"
        );
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/selection.rs"]
mod tests;
