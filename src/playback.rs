//! Film scrubbing: a fractional position over a strip of frames, advanced by wheel input while
//! playback is on, rendered as a cross-fade between the two neighbouring frames.

use crate::foundation::error::{LyumenError, LyumenResult};

/// Position increment per wheel notch.
pub const DEFAULT_STEP: f64 = 0.1;

/// Scrub state over a fixed strip of `N >= 1` frames.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    frames: Vec<String>,
    step: f64,
    position: f64,
    playing: bool,
}

impl PlaybackState {
    /// Create a stopped strip at position 0.
    pub fn new(frames: Vec<String>, step: f64) -> LyumenResult<Self> {
        if frames.is_empty() {
            return Err(LyumenError::validation("film strip needs at least one frame"));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(LyumenError::validation(format!(
                "film step must be a positive number, got {step}"
            )));
        }
        Ok(Self {
            frames,
            step,
            position: 0.0,
            playing: false,
        })
    }

    /// Number of frames in the strip.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether wheel input currently scrubs the strip.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Fractional position in `[0, N-1]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Flip playback. Starting playback rewinds to the first frame; stopping keeps the position.
    pub fn toggle_playback(&mut self) -> bool {
        self.playing = !self.playing;
        if self.playing {
            self.position = 0.0;
        }
        tracing::debug!(playing = self.playing, "film playback toggled");
        self.playing
    }

    /// Apply one wheel event. Only the sign of `delta_y` matters; ignored while stopped.
    pub fn on_wheel(&mut self, delta_y: f64) {
        if !self.playing || delta_y == 0.0 || delta_y.is_nan() {
            return;
        }
        self.advance_by(delta_y.signum());
    }

    /// Move by `steps` wheel notches (negative rewinds), clamped to the strip. Ignored while
    /// stopped or when `steps` is not finite.
    pub fn advance_by(&mut self, steps: f64) {
        if !self.playing || !steps.is_finite() {
            return;
        }
        let last = (self.frames.len() - 1) as f64;
        self.position = (self.position + steps * self.step).clamp(0.0, last);
    }

    /// Index of the frame shown underneath: `floor(position)`.
    pub fn current_frame(&self) -> usize {
        (self.position.floor() as usize).min(self.frames.len() - 1)
    }

    /// Index of the frame fading in, saturating at the last frame.
    pub fn next_frame(&self) -> usize {
        (self.current_frame() + 1).min(self.frames.len() - 1)
    }

    /// Opacity of the current frame, `1 - frac(position)`.
    pub fn current_opacity(&self) -> f64 {
        1.0 - self.fraction()
    }

    /// Opacity of the next frame, `frac(position)`.
    pub fn next_opacity(&self) -> f64 {
        self.fraction()
    }

    /// Caption of frame `i`.
    pub fn frame_text(&self, i: usize) -> Option<&str> {
        self.frames.get(i).map(String::as_str)
    }

    fn fraction(&self) -> f64 {
        self.position - self.current_frame() as f64
    }
}

#[cfg(test)]
#[path = "../tests/unit/playback.rs"]
mod tests;
