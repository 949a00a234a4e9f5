use super::*;

fn strip(n: usize) -> PlaybackState {
    let frames = (0..n).map(|i| format!("frame {i}")).collect();
    PlaybackState::new(frames, DEFAULT_STEP).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn three_scroll_downs_cross_fade_into_the_next_frame() {
    let mut p = strip(4);
    assert!(p.toggle_playback());
    for _ in 0..3 {
        p.on_wheel(120.0);
    }
    assert!(approx(p.position(), 0.3));
    assert_eq!(p.current_frame(), 0);
    assert_eq!(p.next_frame(), 1);
    assert!(approx(p.current_opacity(), 0.7));
    assert!(approx(p.next_opacity(), 0.3));
}

#[test]
fn wheel_is_ignored_while_stopped() {
    let mut p = strip(4);
    p.on_wheel(10.0);
    p.advance_by(5.0);
    assert_eq!(p.position(), 0.0);
}

#[test]
fn only_the_sign_of_the_delta_matters() {
    let mut p = strip(4);
    p.toggle_playback();
    p.on_wheel(1.0);
    p.on_wheel(900.0);
    assert!(approx(p.position(), 0.2));
    p.on_wheel(-3.0);
    assert!(approx(p.position(), 0.1));
    p.on_wheel(0.0);
    assert!(approx(p.position(), 0.1));
}

#[test]
fn position_is_clamped_to_the_strip() {
    let mut p = strip(4);
    p.toggle_playback();
    p.on_wheel(-1.0);
    assert_eq!(p.position(), 0.0);

    p.advance_by(100.0);
    assert_eq!(p.position(), 3.0);
    assert_eq!(p.current_frame(), 3);
    assert_eq!(p.next_frame(), 3);
    assert!(approx(p.current_opacity(), 1.0));
}

#[test]
fn restarting_rewinds_but_stopping_keeps_position() {
    let mut p = strip(4);
    p.toggle_playback();
    p.advance_by(12.0);
    assert!(!p.toggle_playback());
    assert!(approx(p.position(), 1.2));
    assert!(p.toggle_playback());
    assert_eq!(p.position(), 0.0);
}

#[test]
fn single_frame_strip_never_moves() {
    let mut p = strip(1);
    p.toggle_playback();
    p.on_wheel(1.0);
    assert_eq!(p.position(), 0.0);
    assert_eq!((p.current_frame(), p.next_frame()), (0, 0));
}

#[test]
fn rejects_empty_strip_and_bad_step() {
    assert!(PlaybackState::new(Vec::new(), 0.1).is_err());
    assert!(PlaybackState::new(vec!["a".into()], 0.0).is_err());
    assert!(PlaybackState::new(vec!["a".into()], f64::NAN).is_err());
}

#[test]
fn frame_text_looks_up_captions() {
    let p = strip(2);
    assert_eq!(p.frame_text(1), Some("frame 1"));
    assert_eq!(p.frame_text(2), None);
    assert_eq!(p.frame_count(), 2);
}

#[test]
fn cross_fade_opacities_always_sum_to_one() {
    let mut p = strip(3);
    p.toggle_playback();
    let deltas = [1.0, 1.0, -1.0, 5.0, 1.0, 1.0, 1.0, -2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    for _ in 0..4 {
        for d in deltas {
            p.on_wheel(d);
            assert!((0.0..=2.0).contains(&p.position()));
            assert!(approx(p.current_opacity() + p.next_opacity(), 1.0));
        }
    }
    assert_eq!(p.position(), 2.0);
}

#[test]
fn non_finite_steps_are_ignored() {
    let mut p = strip(4);
    p.toggle_playback();
    p.advance_by(3.0);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        p.advance_by(bad);
        assert!(approx(p.position(), 0.3));
        assert!(approx(p.current_opacity() + p.next_opacity(), 1.0));
    }
    p.on_wheel(f64::INFINITY);
    assert!(approx(p.position(), 0.4));
}
