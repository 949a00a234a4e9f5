use super::*;

#[test]
fn defaults() {
    let s = AppState::new();
    assert_eq!(s.current_section(), Section::Prologue);
    assert!(!s.audio_enabled());
    assert!(!s.muted());
    assert_eq!(s.volume(), 0.5);
    assert_eq!(s.progress(), 0.0);
    assert!(!s.narration_enabled());
}

#[test]
fn volume_and_progress_clamp() {
    let mut s = AppState::new();
    s.set_volume(1.7);
    assert_eq!(s.volume(), 1.0);
    s.set_volume(-0.2);
    assert_eq!(s.volume(), 0.0);
    s.set_volume(f64::NAN);
    assert_eq!(s.volume(), 0.0);

    s.set_progress(2.0);
    assert_eq!(s.progress(), 1.0);
    s.set_progress(0.25);
    assert_eq!(s.progress(), 0.25);
}

#[test]
fn section_index_is_clamped() {
    let mut s = AppState::new();
    s.set_current_section(5);
    assert_eq!(s.current_section(), Section::Fete);
    s.set_current_section(99);
    assert_eq!(s.current_section(), Section::Futur);
}

#[test]
fn audio_levels_follow_volume_and_mute() {
    let mut s = AppState::new();
    s.set_volume(0.5);
    let l = s.audio_levels();
    assert!((l.ambient - 0.2).abs() < 1e-12);
    assert_eq!(l.narrator, 0.5);

    assert!(s.toggle_mute());
    assert_eq!(
        s.audio_levels(),
        AudioLevels {
            ambient: 0.0,
            narrator: 0.0
        }
    );
    assert!(s.toggle_audio());
    assert!(!s.toggle_audio());
}

#[test]
fn volume_icon_tiers() {
    let mut s = AppState::new();
    for (v, icon) in [
        (0.0, VolumeIcon::Muted),
        (0.1, VolumeIcon::Low),
        (0.39, VolumeIcon::Low),
        (0.4, VolumeIcon::Medium),
        (0.69, VolumeIcon::Medium),
        (0.7, VolumeIcon::High),
        (1.0, VolumeIcon::High),
    ] {
        s.set_volume(v);
        assert_eq!(s.volume_icon(), icon, "volume {v}");
    }
    s.toggle_mute();
    assert_eq!(s.volume_icon(), VolumeIcon::Muted);
}

#[test]
fn section_resolution_uses_half_viewport_lead() {
    let tops = [0.0, 800.0, 1600.0, 2400.0];
    assert_eq!(section_for_scroll(0.0, 800.0, &tops), Some(0));
    assert_eq!(section_for_scroll(399.0, 800.0, &tops), Some(0));
    assert_eq!(section_for_scroll(400.0, 800.0, &tops), Some(1));
    assert_eq!(section_for_scroll(1300.0, 800.0, &tops), Some(2));
    assert_eq!(section_for_scroll(10_000.0, 800.0, &tops), Some(3));
}

#[test]
fn no_section_in_view_keeps_the_current_one() {
    let tops = [500.0, 1300.0];
    assert_eq!(section_for_scroll(0.0, 800.0, &tops), None);
    assert_eq!(section_for_scroll(10.0, 800.0, &[]), None);

    let mut current = 3;
    if let Some(i) = section_for_scroll(50.0, 800.0, &tops) {
        current = i;
    }
    assert_eq!(current, 3);
    if let Some(i) = section_for_scroll(100.0, 800.0, &tops) {
        current = i;
    }
    assert_eq!(current, 0);
}

#[test]
fn sections_have_stable_ids() {
    let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(
        ids,
        ["prologue", "lugdunum", "renaissance", "freres", "streets", "fete", "futur"]
    );
    assert_eq!("fete".parse::<Section>().unwrap().index(), 5);
    assert_eq!(Section::from_index(3), Some(Section::Freres));
    assert!(Section::from_index(7).is_none());
    assert_eq!(Section::Fete.title(), "Fête des Lumières");
}
