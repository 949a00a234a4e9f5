use std::collections::BTreeSet;

use crate::foundation::error::{LyumenError, LyumenResult};

/// Position of an info point, in percent of its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PercentPos {
    /// Horizontal offset in percent.
    pub x: f64,
    /// Vertical offset in percent.
    pub y: f64,
}

/// A clickable marker with an explanatory caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InfoPoint {
    /// Identifier, unique within a set.
    pub id: u32,
    /// Short heading.
    pub title: String,
    /// Caption shown while the point is active.
    pub description: String,
    /// Marker position.
    pub position: PercentPos,
}

/// A static collection of info points with at most one active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfoPointSet {
    points: Vec<InfoPoint>,
    active: Option<u32>,
}

impl InfoPointSet {
    /// Build a set. Duplicate ids are rejected.
    pub fn new(points: Vec<InfoPoint>) -> LyumenResult<Self> {
        let mut seen = BTreeSet::new();
        for p in &points {
            if !seen.insert(p.id) {
                return Err(LyumenError::validation(format!(
                    "duplicate info point id {}",
                    p.id
                )));
            }
        }
        Ok(Self {
            points,
            active: None,
        })
    }

    /// Points in declaration order.
    pub fn points(&self) -> &[InfoPoint] {
        &self.points
    }

    /// Look up a point.
    pub fn get(&self, id: u32) -> Option<&InfoPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Currently active point.
    pub fn active(&self) -> Option<&InfoPoint> {
        self.active.and_then(|id| self.get(id))
    }

    /// Click on point `id`: the active point closes, any other becomes active. Unknown ids are
    /// ignored.
    pub fn toggle(&mut self, id: u32) -> Option<&InfoPoint> {
        if self.get(id).is_none() {
            tracing::debug!(id, "ignoring click on unknown info point");
            return self.active();
        }
        self.active = if self.active == Some(id) { None } else { Some(id) };
        self.active()
    }

    /// Close the active point.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Nearest point within `radius` of `(x, y)`, both in percent.
    pub fn hit_test(&self, x: f64, y: f64, radius: f64) -> Option<&InfoPoint> {
        self.points
            .iter()
            .map(|p| (p, (p.position.x - x).hypot(p.position.y - y)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/info.rs"]
mod tests;
