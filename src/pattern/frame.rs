use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::pattern::selection::PatternSelection;
use kurbo::Shape;

/// How the primitives of a frame are painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    /// Stroke with the given line width in pixels.
    Stroke(f64),
    /// Non-zero fill of the closed path.
    Fill,
}

/// One vertex of a generated path together with the opacity the effect assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PathSample {
    /// Position in surface pixels.
    pub point: Point,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

/// An ordered run of samples drawn as a single path.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Polyline {
    /// Samples in drawing order.
    pub samples: Vec<PathSample>,
    /// Whether the path is closed back to its first sample.
    pub closed: bool,
}

impl Polyline {
    pub(crate) fn with_capacity(n: usize, closed: bool) -> Self {
        Self {
            samples: Vec::with_capacity(n),
            closed,
        }
    }

    pub(crate) fn push(&mut self, point: Point, alpha: f64) {
        self.samples.push(PathSample { point, alpha });
    }

    /// Opacity in effect when the path is painted: the last sample's.
    pub fn alpha(&self) -> f64 {
        self.samples.last().map_or(1.0, |s| s.alpha)
    }

    /// Positions in drawing order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().map(|s| s.point)
    }

    /// Path with one `move_to` followed by `line_to`s.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points();
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
            if self.closed {
                path.close_path();
            }
        }
        path
    }
}

/// A circle, optionally squashed into a rotated ellipse.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Ring {
    /// Ring center.
    pub center: Point,
    /// Radius along the ring's own x axis.
    pub radius: f64,
    /// Ratio of the minor to the major radius; `1.0` for a circle.
    pub squash: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Ring {
    /// Flattened outline of the ring.
    pub fn to_bezpath(&self) -> BezPath {
        kurbo::Ellipse::new(
            self.center,
            (self.radius, self.radius * self.squash),
            self.rotation,
        )
        .to_path(0.1)
    }
}

/// A drawable element of a pattern frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Sampled path.
    Polyline(Polyline),
    /// Circle or ellipse.
    Ring(Ring),
}

impl Primitive {
    /// Opacity the primitive is painted with.
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Polyline(p) => p.alpha(),
            Self::Ring(r) => r.alpha,
        }
    }

    /// Number of geometric samples: vertices for a polyline, one for a ring.
    pub fn point_count(&self) -> usize {
        match self {
            Self::Polyline(p) => p.samples.len(),
            Self::Ring(_) => 1,
        }
    }

    /// Outline as a kurbo path.
    pub fn to_bezpath(&self) -> BezPath {
        match self {
            Self::Polyline(p) => p.to_bezpath(),
            Self::Ring(r) => r.to_bezpath(),
        }
    }
}

/// Everything needed to paint one frame of the light pattern.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PatternFrame {
    /// Selection the frame was generated from.
    pub selection: PatternSelection,
    /// Elapsed time sample in seconds.
    pub time: f64,
    /// Resolved display color.
    pub color: Rgba8,
    /// Paint mode shared by every primitive.
    pub paint: Paint,
    /// Primitives in painting order.
    pub primitives: Vec<Primitive>,
}

impl PatternFrame {
    /// Total number of geometric samples across all primitives.
    pub fn point_count(&self) -> usize {
        self.primitives.iter().map(Primitive::point_count).sum()
    }
}
