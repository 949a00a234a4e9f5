//! Render loop driver.
//!
//! The loop is tied to a host repaint signal rather than a timer: every frame ends by asking the
//! [`FrameScheduler`] for the next repaint, and the host calls [`RenderLoop::on_frame`] back with
//! the handle it issued. Exactly one frame is in flight at a time.

use std::collections::BTreeSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::pattern::frame::PatternFrame;
use crate::pattern::selection::SelectionHandle;
use crate::pattern::shape::generate;
use crate::render::backend::PatternSurface;

/// Identifier of a pending repaint request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Host-side source of "next repaint" callbacks.
pub trait FrameScheduler {
    /// Ask for one callback at the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;
    /// Withdraw a request that has not fired yet. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler for headless hosts and tests: requests queue up until [`ManualScheduler::next_due`]
/// pops them in issue order.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: BTreeSet<FrameHandle>,
    cancelled: u64,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending request, as a display refresh would.
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        self.pending.pop_first()
    }

    /// Number of requests waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of requests withdrawn before they fired.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let h = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.insert(h);
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.remove(&handle) {
            self.cancelled += 1;
        }
    }
}

/// Monotonic time source sampled once per frame, in seconds.
pub trait Clock {
    /// Current elapsed-time sample.
    fn now_secs(&mut self) -> f64;
}

/// Wall clock: seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&mut self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Deterministic clock that advances by a fixed step on every sample.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    next: f64,
    step: f64,
}

impl FixedStepClock {
    /// First sample is `start`, each later one `step` seconds further.
    pub fn new(start: f64, step: f64) -> Self {
        Self { next: start, step }
    }

    /// Clock stepping at `fps` frames per second from `start`.
    pub fn at_fps(start: f64, fps: u32) -> Self {
        Self::new(start, 1.0 / f64::from(fps.max(1)))
    }
}

impl Clock for FixedStepClock {
    fn now_secs(&mut self) -> f64 {
        let t = self.next;
        self.next += self.step;
        t
    }
}

/// Lifecycle of a [`RenderLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Created, surface not yet sized or cleared.
    Idle,
    /// Redrawing on every repaint.
    Running,
    /// Owning view was torn down; no further frames.
    TornDown,
}

/// Result of one repaint callback.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The frame was generated and painted.
    Drawn(PatternFrame),
    /// The surface was unavailable or painting failed; the next frame is still scheduled.
    Skipped,
    /// The callback was stale or arrived outside the running state.
    Ignored,
}

/// Counters kept across the loop's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames painted successfully.
    pub frames_drawn: u64,
    /// Frames skipped because the surface was unavailable or painting failed.
    pub frames_skipped: u64,
    /// Callbacks ignored as stale.
    pub callbacks_ignored: u64,
}

/// Continuously redraws the selected light pattern onto a surface.
pub struct RenderLoop<S, C> {
    surface: S,
    clock: C,
    selection: SelectionHandle,
    state: LoopState,
    pending: Option<FrameHandle>,
    stats: LoopStats,
}

impl<S, C> RenderLoop<S, C>
where
    S: PatternSurface,
    C: Clock,
{
    /// Create an idle loop. `selection` is read at the start of every frame.
    pub fn new(surface: S, clock: C, selection: SelectionHandle) -> Self {
        Self {
            surface,
            clock,
            selection,
            state: LoopState::Idle,
            pending: None,
            stats: LoopStats::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Counters so far.
    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Repaint request currently outstanding, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface, e.g. to attach or resize its container.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Transition `Idle -> Running` and draw the first frame immediately.
    ///
    /// Mounting twice, or after teardown, is ignored.
    pub fn mount(&mut self, scheduler: &mut dyn FrameScheduler) -> FrameOutcome {
        if self.state != LoopState::Idle {
            self.stats.callbacks_ignored += 1;
            return FrameOutcome::Ignored;
        }
        tracing::info!("render loop mounted");
        self.state = LoopState::Running;
        self.run_frame(scheduler)
    }

    /// Repaint callback for `handle`. Stale handles and callbacks outside `Running` are ignored.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        scheduler: &mut dyn FrameScheduler,
    ) -> FrameOutcome {
        if self.state != LoopState::Running || self.pending != Some(handle) {
            tracing::trace!(?handle, state = ?self.state, "ignoring repaint callback");
            self.stats.callbacks_ignored += 1;
            return FrameOutcome::Ignored;
        }
        self.pending = None;
        self.run_frame(scheduler)
    }

    /// Stop the loop and cancel the outstanding repaint request.
    pub fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(h) = self.pending.take() {
            scheduler.cancel_frame(h);
        }
        if self.state != LoopState::TornDown {
            tracing::info!(
                drawn = self.stats.frames_drawn,
                skipped = self.stats.frames_skipped,
                "render loop torn down"
            );
        }
        self.state = LoopState::TornDown;
    }

    #[tracing::instrument(level = "trace", skip_all)]
    fn run_frame(&mut self, scheduler: &mut dyn FrameScheduler) -> FrameOutcome {
        let outcome = self.draw();
        match &outcome {
            FrameOutcome::Drawn(_) => self.stats.frames_drawn += 1,
            _ => self.stats.frames_skipped += 1,
        }
        self.pending = Some(scheduler.request_frame());
        outcome
    }

    fn draw(&mut self) -> FrameOutcome {
        let Some(canvas) = self.surface.container_size() else {
            tracing::debug!("surface unavailable, skipping frame");
            return FrameOutcome::Skipped;
        };
        if let Err(e) = self.surface.resize_and_clear(canvas) {
            tracing::warn!(error = %e, "failed to size surface, skipping frame");
            return FrameOutcome::Skipped;
        }

        let time = self.clock.now_secs();
        let selection = self.selection.get();
        let frame = generate(selection, canvas, time);

        if let Err(e) = self.surface.paint(&frame) {
            tracing::warn!(error = %e, "paint failed, skipping frame");
            return FrameOutcome::Skipped;
        }
        FrameOutcome::Drawn(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
