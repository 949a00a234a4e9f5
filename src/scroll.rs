//! Scroll-linked triggers.
//!
//! A trigger watches one element against the viewport. Its start and end are [`Threshold`]s of
//! the form `"<element edge> <viewport edge>"`: `"top 70%"` is crossed when the element's top
//! reaches 70% of the way down the viewport. Registered callbacks receive normalized progress in
//! `[0, 1]` whenever it changes.

use crate::foundation::error::{LyumenError, LyumenResult};

/// Offset along an element or the viewport, as a fraction of its height.
fn parse_edge(token: &str) -> LyumenResult<f64> {
    let t = token.trim().to_ascii_lowercase();
    match t.as_str() {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => {
            let pct = t
                .strip_suffix('%')
                .and_then(|n| n.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(|| LyumenError::validation(format!("invalid scroll edge '{token}'")))?;
            Ok(pct / 100.0)
        }
    }
}

/// Pairing of an element edge with a viewport edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    /// Point on the element, as a fraction of its height from the top.
    pub element: f64,
    /// Point in the viewport, as a fraction of its height from the top.
    pub viewport: f64,
}

impl Threshold {
    /// Document scroll offset at which the two edges meet.
    pub fn scroll_offset(&self, element: ElementBox, viewport_h: f64) -> f64 {
        element.top + self.element * element.height - self.viewport * viewport_h
    }
}

impl std::str::FromStr for Threshold {
    type Err = LyumenError;

    fn from_str(s: &str) -> LyumenResult<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(e), Some(v), None) => Ok(Self {
                element: parse_edge(e)?,
                viewport: parse_edge(v)?,
            }),
            _ => Err(LyumenError::validation(format!(
                "scroll threshold must be '<element edge> <viewport edge>', got '{s}'"
            ))),
        }
    }
}

/// Vertical extent of the watched element in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    /// Offset of the element's top from the document top.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

/// How progress is derived from the scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerMode {
    /// Jumps to 1 once the start is crossed and back to 0 when scrolled back above it.
    Toggle,
    /// Follows the scroll position linearly between start and end.
    Scrub,
}

/// A named start/end pair with its progress mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    /// Label used in logs.
    pub name: String,
    /// Where progress begins.
    pub start: Threshold,
    /// Where scrub progress reaches 1. Defaults to `"bottom top"`.
    pub end: Option<Threshold>,
    /// Progress mode.
    pub mode: TriggerMode,
}

impl ScrollTrigger {
    /// Trigger that flips on at `start` and reverses when scrolled back.
    pub fn toggle(name: impl Into<String>, start: &str) -> LyumenResult<Self> {
        Ok(Self {
            name: name.into(),
            start: start.parse()?,
            end: None,
            mode: TriggerMode::Toggle,
        })
    }

    /// Trigger whose progress tracks the scroll between `start` and `end`.
    pub fn scrub(name: impl Into<String>, start: &str, end: &str) -> LyumenResult<Self> {
        Ok(Self {
            name: name.into(),
            start: start.parse()?,
            end: Some(end.parse()?),
            mode: TriggerMode::Scrub,
        })
    }

    /// Progress in `[0, 1]` for the given scroll state.
    pub fn progress(&self, scroll_y: f64, viewport_h: f64, element: ElementBox) -> f64 {
        let start = self.start.scroll_offset(element, viewport_h);
        match self.mode {
            TriggerMode::Toggle => {
                if scroll_y >= start {
                    1.0
                } else {
                    0.0
                }
            }
            TriggerMode::Scrub => {
                let end = self
                    .end
                    .unwrap_or(Threshold {
                        element: 1.0,
                        viewport: 0.0,
                    })
                    .scroll_offset(element, viewport_h);
                if end <= start {
                    return if scroll_y >= start { 1.0 } else { 0.0 };
                }
                ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
            }
        }
    }
}

/// Identifier returned by [`ScrollTriggers::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriggerId(pub u64);

type ProgressCallback = Box<dyn FnMut(f64)>;

struct Registered {
    id: TriggerId,
    trigger: ScrollTrigger,
    last: f64,
    callback: ProgressCallback,
}

/// The set of triggers watching one element.
#[derive(Default)]
pub struct ScrollTriggers {
    next_id: u64,
    entries: Vec<Registered>,
}

impl std::fmt::Debug for ScrollTriggers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTriggers")
            .field("triggers", &self.entries.len())
            .finish()
    }
}

impl ScrollTriggers {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `trigger`; `callback` receives its progress whenever it changes. Progress starts
    /// at 0.
    pub fn register(
        &mut self,
        trigger: ScrollTrigger,
        callback: impl FnMut(f64) + 'static,
    ) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Registered {
            id,
            trigger,
            last: 0.0,
            callback: Box::new(callback),
        });
        id
    }

    /// Number of live triggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no triggers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last progress reported for `id`.
    pub fn progress(&self, id: TriggerId) -> Option<f64> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.last)
    }

    /// Recompute every trigger and notify those whose progress changed.
    pub fn update(&mut self, scroll_y: f64, viewport_h: f64, element: ElementBox) {
        for e in &mut self.entries {
            let p = e.trigger.progress(scroll_y, viewport_h, element);
            if p != e.last {
                tracing::trace!(trigger = %e.trigger.name, progress = p, "scroll progress");
                e.last = p;
                (e.callback)(p);
            }
        }
    }

    /// Remove one trigger.
    pub fn kill(&mut self, id: TriggerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove every trigger, as on section teardown.
    pub fn kill_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "killing scroll triggers");
        }
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../tests/unit/scroll.rs"]
mod tests;
