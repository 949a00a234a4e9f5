//! Shape generators.
//!
//! Every generator is pure: it recomputes its geometry from scratch from the surface geometry,
//! the selected effect and the elapsed time, and keeps no state between frames.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Canvas, Point, polar};
use crate::pattern::effect::{
    displace, flicker_alpha_or_opaque, pulse_scale, ripple_offset, rotate_polar, twinkle_alpha,
};
use crate::pattern::frame::{PatternFrame, Paint, Polyline, Primitive, Ring};
use crate::pattern::selection::{EffectKind, PatternSelection, ShapeKind};

/// Samples along the spiral.
pub const SPIRAL_POINTS: usize = 100;
/// Full turns of the spiral.
pub const SPIRAL_TURNS: f64 = 5.0;
/// Arms of the star; the outline has twice as many vertices.
pub const STAR_ARMS: usize = 8;
/// Inner star radius relative to the outer one.
pub const STAR_INNER_RATIO: f64 = 0.4;
/// Parallel wave lines.
pub const WAVE_LINES: usize = 3;
/// Horizontal distance between wave samples, in pixels.
pub const WAVE_STEP_PX: usize = 5;
/// Vertical offset between consecutive wave lines, in pixels.
pub const WAVE_LINE_OFFSET_PX: f64 = 40.0;
/// Concentric rings.
pub const RING_COUNT: usize = 6;
/// Minor/major ratio of rings under the rotate effect.
pub const RING_SQUASH: f64 = 0.7;

const SPIRAL_LINE_WIDTH: f64 = 4.0;
const WAVE_LINE_WIDTH: f64 = 6.0;
const RING_LINE_WIDTH: f64 = 5.0;

/// Generate the full frame for `selection` on a surface of size `canvas` at `time` seconds.
#[tracing::instrument(level = "trace", skip(canvas))]
pub fn generate(selection: PatternSelection, canvas: Canvas, time: f64) -> PatternFrame {
    let center = canvas.center();
    let size = canvas.pattern_size();
    let effect = selection.effect;

    let (paint, primitives) = match selection.shape {
        ShapeKind::Spiral => (
            Paint::Stroke(SPIRAL_LINE_WIDTH),
            vec![Primitive::Polyline(spiral(center, size, effect, time))],
        ),
        ShapeKind::Waves => (
            Paint::Stroke(WAVE_LINE_WIDTH),
            waves(canvas, effect, time)
                .into_iter()
                .map(Primitive::Polyline)
                .collect(),
        ),
        ShapeKind::Star => (
            Paint::Fill,
            vec![Primitive::Polyline(star(center, size, effect, time))],
        ),
        ShapeKind::Circles => (
            Paint::Stroke(RING_LINE_WIDTH),
            rings(center, size, effect, time)
                .into_iter()
                .map(Primitive::Ring)
                .collect(),
        ),
    };

    PatternFrame {
        selection,
        time,
        color: selection.color.rgba(),
        paint,
        primitives,
    }
}

/// Number of samples [`generate`] produces for `shape` on `canvas`.
pub fn expected_point_count(shape: ShapeKind, canvas: Canvas) -> usize {
    match shape {
        ShapeKind::Spiral => SPIRAL_POINTS,
        ShapeKind::Waves => WAVE_LINES * wave_samples(canvas.width),
        ShapeKind::Star => STAR_ARMS * 2,
        ShapeKind::Circles => RING_COUNT,
    }
}

fn wave_samples(width: u32) -> usize {
    (width as usize).div_ceil(WAVE_STEP_PX)
}

/// Spiral of [`SPIRAL_TURNS`] turns whose radius grows linearly with the sample index.
pub fn spiral(center: Point, size: f64, effect: EffectKind, time: f64) -> Polyline {
    let mut line = Polyline::with_capacity(SPIRAL_POINTS, false);
    let last = (SPIRAL_POINTS - 1) as f64;

    for i in 0..SPIRAL_POINTS {
        let t = i as f64 / last;
        let angle = SPIRAL_TURNS * TAU * t;
        let radius = t * size;

        let (point, alpha) = match effect {
            EffectKind::Pulse => (polar(center, radius * pulse_scale(time, 0.2, 3.0), angle), 1.0),
            EffectKind::Rotate => (rotate_polar(center, radius, angle, time), 1.0),
            EffectKind::Twinkle => (
                polar(center, radius, angle),
                twinkle_alpha(t * 10.0 + time * 5.0),
            ),
            EffectKind::Ripple => {
                let offset = ripple_offset(t * 20.0 - time * 5.0, 5.0);
                (
                    displace(polar(center, radius, angle), angle + PI / 2.0, offset),
                    1.0,
                )
            }
        };
        line.push(point, alpha);
    }
    line
}

/// [`WAVE_LINES`] horizontal sinusoids spanning the surface width.
pub fn waves(canvas: Canvas, effect: EffectKind, time: f64) -> Vec<Polyline> {
    let center_y = canvas.center().y;
    let amplitude = f64::from(canvas.height) * 0.2;
    let frequency = 0.01;
    let samples = wave_samples(canvas.width);

    (0..WAVE_LINES)
        .map(|k| {
            let offset = k as f64 * WAVE_LINE_OFFSET_PX;
            let phase_shift = k as f64 * PI / 6.0;
            let mut line = Polyline::with_capacity(samples, false);

            for x in (0..canvas.width as usize).step_by(WAVE_STEP_PX) {
                let x = x as f64;
                let base = x * frequency + phase_shift;
                let (y, alpha) = match effect {
                    EffectKind::Pulse => (
                        center_y
                            + amplitude * pulse_scale(time, 0.3, 2.0) * (base + time * 2.0).sin(),
                        1.0,
                    ),
                    EffectKind::Rotate => (center_y + amplitude * (base + time * 3.0).sin(), 1.0),
                    EffectKind::Twinkle => (
                        center_y + amplitude * (base + time * 2.0).sin(),
                        twinkle_alpha(x * 0.05 + time * 3.0),
                    ),
                    EffectKind::Ripple => (
                        center_y
                            + amplitude * (base + time * 2.0).sin()
                            + ripple_offset(x * 0.02 - time * 2.0, 10.0),
                        1.0,
                    ),
                };
                line.push(Point::new(x, y - offset), alpha);
            }
            line
        })
        .collect()
}

/// Closed star alternating between the outer radius and [`STAR_INNER_RATIO`] of it.
pub fn star(center: Point, size: f64, effect: EffectKind, time: f64) -> Polyline {
    let vertices = STAR_ARMS * 2;
    let mut line = Polyline::with_capacity(vertices, true);

    for i in 0..vertices {
        let angle = i as f64 * PI / STAR_ARMS as f64;
        let radius = if i % 2 == 0 {
            size
        } else {
            size * STAR_INNER_RATIO
        };

        let (point, alpha) = match effect {
            EffectKind::Pulse => (polar(center, radius * pulse_scale(time, 0.2, 3.0), angle), 1.0),
            EffectKind::Rotate => (rotate_polar(center, radius, angle, time), 1.0),
            EffectKind::Twinkle => (polar(center, radius, angle), twinkle_alpha(time * 5.0)),
            EffectKind::Ripple => {
                let offset = ripple_offset(angle * 5.0 - time * 3.0, 10.0);
                (displace(polar(center, radius, angle), angle, offset), 1.0)
            }
        };
        line.push(point, alpha);
    }
    line
}

/// [`RING_COUNT`] concentric rings at evenly spaced radii, the innermost of radius zero.
pub fn rings(center: Point, size: f64, effect: EffectKind, time: f64) -> Vec<Ring> {
    let last = (RING_COUNT - 1) as f64;

    (0..RING_COUNT)
        .map(|i| {
            let fi = i as f64;
            let base = Ring {
                center,
                radius: fi / last * size,
                squash: 1.0,
                rotation: 0.0,
                alpha: 1.0,
            };
            match effect {
                EffectKind::Pulse => Ring {
                    radius: base.radius * (1.0 + 0.2 * (time * 3.0 + fi).sin()),
                    ..base
                },
                // A rotating circle is invisible, so rings turn into rotating ellipses.
                EffectKind::Rotate => Ring {
                    squash: RING_SQUASH,
                    rotation: time + fi * PI / RING_COUNT as f64,
                    ..base
                },
                EffectKind::Twinkle => Ring {
                    alpha: flicker_alpha_or_opaque(0.3, 0.7, time * 3.0 + fi * 2.0),
                    ..base
                },
                EffectKind::Ripple => Ring {
                    radius: (base.radius + ripple_offset(time * 5.0 + fi * 2.0, 10.0)).max(0.0),
                    ..base
                },
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/shape.rs"]
mod tests;
