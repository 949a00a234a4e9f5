use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::error::{LyumenError, LyumenResult};
use crate::pattern::color::ColorKind;
use crate::pattern::frame::Paint;
use crate::pattern::selection::{
    EffectKind, PatternSelection, SelectionEvent, ShapeKind,
};

#[derive(Default)]
struct Recording {
    container: Option<Canvas>,
    fail_paint: bool,
    resized: Vec<Canvas>,
    painted: Vec<PatternFrame>,
}

impl PatternSurface for Recording {
    fn container_size(&self) -> Option<Canvas> {
        self.container
    }

    fn resize_and_clear(&mut self, canvas: Canvas) -> LyumenResult<()> {
        self.resized.push(canvas);
        Ok(())
    }

    fn paint(&mut self, frame: &PatternFrame) -> LyumenResult<()> {
        if self.fail_paint {
            return Err(LyumenError::render("boom"));
        }
        self.painted.push(frame.clone());
        Ok(())
    }
}

fn mounted() -> Recording {
    Recording {
        container: Some(Canvas::new(100, 80).unwrap()),
        ..Recording::default()
    }
}

fn drive(
    lp: &mut RenderLoop<Recording, FixedStepClock>,
    sched: &mut ManualScheduler,
    frames: usize,
) {
    for _ in 0..frames {
        let h = sched.next_due().expect("a frame should be pending");
        lp.on_frame(h, sched);
    }
}

#[test]
fn mount_draws_first_frame_and_schedules_next() {
    let mut sched = ManualScheduler::new();
    let mut lp = RenderLoop::new(
        mounted(),
        FixedStepClock::new(0.0, 0.5),
        SelectionHandle::default(),
    );
    assert_eq!(lp.state(), LoopState::Idle);

    let out = lp.mount(&mut sched);
    assert!(matches!(out, FrameOutcome::Drawn(_)));
    assert_eq!(lp.state(), LoopState::Running);
    assert_eq!(sched.pending_count(), 1);
    assert_eq!(lp.surface().resized, vec![Canvas::new(100, 80).unwrap()]);

    // A second mount does not start a second chain.
    assert_eq!(lp.mount(&mut sched), FrameOutcome::Ignored);
    assert_eq!(sched.pending_count(), 1);
}

#[test]
fn each_frame_samples_the_clock_once() {
    let mut sched = ManualScheduler::new();
    let mut lp = RenderLoop::new(
        mounted(),
        FixedStepClock::new(1.0, 0.25),
        SelectionHandle::default(),
    );
    lp.mount(&mut sched);
    drive(&mut lp, &mut sched, 3);

    let times: Vec<f64> = lp.surface().painted.iter().map(|f| f.time).collect();
    assert_eq!(times, vec![1.0, 1.25, 1.5, 1.75]);
    assert_eq!(lp.stats().frames_drawn, 4);
}

#[test]
fn selection_changes_apply_on_the_next_frame() {
    let mut sched = ManualScheduler::new();
    let sel = SelectionHandle::default();
    let mut lp = RenderLoop::new(mounted(), FixedStepClock::new(0.0, 0.1), sel.clone());
    lp.mount(&mut sched);

    sel.apply(SelectionEvent::Shape(ShapeKind::Star));
    sel.apply(SelectionEvent::Color(ColorKind::Red));
    drive(&mut lp, &mut sched, 1);

    let painted = &lp.surface().painted;
    assert_eq!(painted[0].selection, PatternSelection::default());
    assert_eq!(painted[1].selection.shape, ShapeKind::Star);
    assert_eq!(painted[1].selection.effect, EffectKind::Pulse);
    assert_eq!(painted[1].color, ColorKind::Red.rgba());
    assert_eq!(painted[1].paint, Paint::Fill);
}

#[test]
fn unavailable_surface_skips_but_keeps_scheduling() {
    let mut sched = ManualScheduler::new();
    let mut lp = RenderLoop::new(
        Recording::default(),
        FixedStepClock::new(0.0, 0.1),
        SelectionHandle::default(),
    );
    assert_eq!(lp.mount(&mut sched), FrameOutcome::Skipped);
    assert_eq!(sched.pending_count(), 1);
    assert!(lp.surface().resized.is_empty());

    lp.surface_mut().container = Some(Canvas::new(10, 10).unwrap());
    let h = sched.next_due().unwrap();
    assert!(matches!(lp.on_frame(h, &mut sched), FrameOutcome::Drawn(_)));

    let stats = lp.stats();
    assert_eq!((stats.frames_drawn, stats.frames_skipped), (1, 1));
}

#[test]
fn paint_failure_is_a_skipped_frame() {
    let mut sched = ManualScheduler::new();
    let mut surface = mounted();
    surface.fail_paint = true;
    let mut lp = RenderLoop::new(surface, FixedStepClock::new(0.0, 0.1), SelectionHandle::default());
    assert_eq!(lp.mount(&mut sched), FrameOutcome::Skipped);
    assert_eq!(sched.pending_count(), 1);
    assert_eq!(lp.stats().frames_skipped, 1);
}

#[test]
fn stale_handles_are_ignored() {
    let mut sched = ManualScheduler::new();
    let mut lp = RenderLoop::new(
        mounted(),
        FixedStepClock::new(0.0, 0.1),
        SelectionHandle::default(),
    );
    lp.mount(&mut sched);
    let current = lp.pending().unwrap();

    assert_eq!(
        lp.on_frame(FrameHandle(current.0 + 7), &mut sched),
        FrameOutcome::Ignored
    );
    assert_eq!(lp.pending(), Some(current));
    assert_eq!(lp.stats().callbacks_ignored, 1);
}

#[test]
fn teardown_cancels_pending_and_stops_drawing() {
    let mut sched = ManualScheduler::new();
    let mut lp = RenderLoop::new(
        mounted(),
        FixedStepClock::new(0.0, 0.1),
        SelectionHandle::default(),
    );
    lp.mount(&mut sched);
    let h = lp.pending().unwrap();

    lp.teardown(&mut sched);
    assert_eq!(lp.state(), LoopState::TornDown);
    assert_eq!(sched.pending_count(), 0);
    assert_eq!(sched.cancelled_count(), 1);
    assert!(lp.pending().is_none());

    // A callback that raced teardown does nothing.
    assert_eq!(lp.on_frame(h, &mut sched), FrameOutcome::Ignored);
    assert_eq!(lp.mount(&mut sched), FrameOutcome::Ignored);
    assert_eq!(lp.surface().painted.len(), 1);
    assert_eq!(sched.pending_count(), 0);

    lp.teardown(&mut sched);
    assert_eq!(sched.cancelled_count(), 1);
}

#[test]
fn fixed_step_clock_at_fps() {
    let mut c = FixedStepClock::at_fps(2.0, 4);
    assert_eq!(c.now_secs(), 2.0);
    assert_eq!(c.now_secs(), 2.25);
    let mut z = FixedStepClock::at_fps(0.0, 0);
    z.now_secs();
    assert_eq!(z.now_secs(), 1.0);
}

#[test]
fn system_clock_is_past_the_epoch() {
    assert!(SystemClock.now_secs() > 1.0e9);
}
