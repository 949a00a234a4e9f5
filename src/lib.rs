//! Lyumen draws the parametric light patterns of a scroll-driven story about light in Lyon.
//!
//! The core is a small pipeline that runs once per display refresh:
//!
//! 1. **Select**: the latest [`PatternSelection`] (shape, color, effect) is read from a shared
//!    [`SelectionHandle`].
//! 2. **Generate**: [`generate`] turns the selection, the surface size and a time sample into a
//!    [`PatternFrame`] of polylines and rings.
//! 3. **Paint**: a [`PatternSurface`] (the CPU one is [`CpuSurface`]) rasterizes the frame.
//!
//! [`RenderLoop`] drives these steps against a [`FrameScheduler`] and stops cleanly on teardown.
//!
//! Around the pattern renderer live the story's smaller pieces of interactive state: film
//! scrubbing ([`PlaybackState`]), info points, time of day, [`AppState`], text splitting and
//! scroll triggers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod pattern;
pub(crate) mod playback;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod scroll;
pub(crate) mod text;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Vec2};
pub use crate::foundation::error::{LyumenError, LyumenResult};

pub use crate::pattern::color::ColorKind;
pub use crate::pattern::effect::{
    displace, flicker_alpha, flicker_alpha_or_opaque, pulse_scale, ripple_offset, rotate_polar,
    twinkle_alpha,
};
pub use crate::pattern::frame::{Paint, PathSample, PatternFrame, Polyline, Primitive, Ring};
pub use crate::pattern::selection::{
    EffectKind, PatternSelection, SelectionEvent, SelectionHandle, ShapeKind,
};
pub use crate::pattern::shape::{
    RING_COUNT, SPIRAL_POINTS, STAR_ARMS, WAVE_LINES, WAVE_STEP_PX, expected_point_count,
    generate, rings, spiral, star, waves,
};

pub use crate::render::backend::{FrameRGBA, PatternSurface, RenderSettings};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::driver::{
    Clock, FixedStepClock, FrameHandle, FrameOutcome, FrameScheduler, LoopState, LoopStats,
    ManualScheduler, RenderLoop, SystemClock,
};

pub use crate::app::{AppState, AudioLevels, Section, VolumeIcon, section_for_scroll};
pub use crate::config::{FilmConfig, LyumenConfig};
pub use crate::playback::{DEFAULT_STEP, PlaybackState};
pub use crate::scene::info::{InfoPoint, InfoPointSet, PercentPos};
pub use crate::scene::time_of_day::{TimeOfDay, TimeOfDayState};
pub use crate::scroll::{
    ElementBox, ScrollTrigger, ScrollTriggers, Threshold, TriggerId, TriggerMode,
};
pub use crate::text::{DisplayHandle, TextSplitter, WholeBlockSplitter};
