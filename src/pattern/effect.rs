//! Effect modulators.
//!
//! Each modulator is a pure function of raw geometry, elapsed time and sample position. Shape
//! generators pick exactly one of them per frame based on the selected [`EffectKind`].
//!
//! [`EffectKind`]: crate::EffectKind

use crate::foundation::core::{Point, polar};

/// Uniform scale factor `1 + amplitude * sin(time * rate)`.
pub fn pulse_scale(time: f64, amplitude: f64, rate: f64) -> f64 {
    1.0 + amplitude * (time * rate).sin()
}

/// Re-project a polar sample with its angle advanced by `offset` radians.
///
/// The distance to `center` is preserved; only the angular phase changes.
pub fn rotate_polar(center: Point, radius: f64, angle: f64, offset: f64) -> Point {
    polar(center, radius, angle + offset)
}

/// Opacity `0.5 + 0.5 * sin(phase)`.
pub fn twinkle_alpha(phase: f64) -> f64 {
    flicker_alpha(0.5, 0.5, phase)
}

/// Opacity `base + swing * sin(phase)` clamped to `[0, 1]`.
pub fn flicker_alpha(base: f64, swing: f64, phase: f64) -> f64 {
    (base + swing * phase.sin()).clamp(0.0, 1.0)
}

/// Opacity `base + swing * sin(phase)` as a canvas applies it: values above 1 saturate and
/// negative values leave the stroke fully opaque.
pub fn flicker_alpha_or_opaque(base: f64, swing: f64, phase: f64) -> f64 {
    let a = base + swing * phase.sin();
    if a < 0.0 { 1.0 } else { a.min(1.0) }
}

/// Displacement `amplitude * sin(phase)` of a travelling wave.
pub fn ripple_offset(phase: f64, amplitude: f64) -> f64 {
    phase.sin() * amplitude
}

/// Move `p` by `distance` along the direction `angle`.
pub fn displace(p: Point, angle: f64, distance: f64) -> Point {
    Point::new(p.x + distance * angle.cos(), p.y + distance * angle.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/effect.rs"]
mod tests;
