use super::*;

#[test]
fn default_matches_builder_initial_state() {
    let s = PatternSelection::default();
    assert_eq!(s.shape, ShapeKind::Spiral);
    assert_eq!(s.color, ColorKind::Purple);
    assert_eq!(s.effect, EffectKind::Pulse);
}

#[test]
fn shape_keys_accept_rings_alias_and_fall_back_to_spiral() {
    assert_eq!("rings".parse::<ShapeKind>().unwrap(), ShapeKind::Circles);
    assert_eq!("Circles".parse::<ShapeKind>().unwrap(), ShapeKind::Circles);
    assert!("hexagon".parse::<ShapeKind>().is_err());
    assert_eq!(ShapeKind::from_key_or_default("hexagon"), ShapeKind::Spiral);
    assert_eq!(ShapeKind::from_key_or_default("star"), ShapeKind::Star);
}

#[test]
fn events_replace_only_their_field() {
    let s = PatternSelection::default()
        .with_event(SelectionEvent::Shape(ShapeKind::Star))
        .with_event(SelectionEvent::Color(ColorKind::Gold));
    assert_eq!(
        s,
        PatternSelection::new(ShapeKind::Star, ColorKind::Gold, EffectKind::Pulse)
    );

    let s = s.with_event(SelectionEvent::Effect(EffectKind::Twinkle));
    assert_eq!(s.shape, ShapeKind::Star);
    assert_eq!(s.effect, EffectKind::Twinkle);
}

#[test]
fn event_parse_by_group() {
    assert_eq!(
        SelectionEvent::parse("shape", "waves").unwrap(),
        SelectionEvent::Shape(ShapeKind::Waves)
    );
    assert_eq!(
        SelectionEvent::parse("Effect", "ripple").unwrap(),
        SelectionEvent::Effect(EffectKind::Ripple)
    );
    assert!(SelectionEvent::parse("size", "big").is_err());
    assert!(SelectionEvent::parse("color", "teal").is_err());
}

#[test]
fn handle_clones_share_latest_value() {
    let ui = SelectionHandle::default();
    let renderer = ui.clone();
    ui.apply(SelectionEvent::Shape(ShapeKind::Circles));
    assert_eq!(renderer.get().shape, ShapeKind::Circles);
}

#[test]
fn selection_json_uses_lowercase_keys() {
    let s = PatternSelection::new(ShapeKind::Star, ColorKind::Gold, EffectKind::Twinkle);
    let v = serde_json::to_value(s).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "shape": "star", "color": "gold", "effect": "twinkle" })
    );
    let back: PatternSelection = serde_json::from_str(r#"{ "shape": "rings" }"#).unwrap();
    assert_eq!(back.shape, ShapeKind::Circles);
    assert_eq!(back.effect, EffectKind::Pulse);
}
