use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn canvas_center_and_pattern_size() {
    let c = Canvas::new(640, 500).unwrap();
    assert_eq!(c.center(), Point::new(320.0, 250.0));
    assert!((c.pattern_size() - 200.0).abs() < 1e-12);
}

#[test]
fn canvas_u16_bounds() {
    assert_eq!(Canvas::new(100, 20).unwrap().as_u16().unwrap(), (100, 20));
    assert!(Canvas::new(70_000, 20).unwrap().as_u16().is_err());
}

#[test]
fn rgba_hex_parts_and_formatting() {
    let c = Rgba8::from_hex(0xf59e0b);
    assert_eq!((c.r, c.g, c.b, c.a), (0xf5, 0x9e, 0x0b, 255));
    assert_eq!(c.to_hex_string(), "#f59e0b");
    assert_eq!(c.premultiplied(), [0xf5, 0x9e, 0x0b, 255]);

    let half = Rgba8 { a: 128, ..c };
    assert_eq!(half.to_hex_string(), "#f59e0b80");
    assert_eq!(half.premultiplied()[3], 128);
    assert!(half.premultiplied()[0] < c.r);
}

#[test]
fn polar_matches_cartesian() {
    let p = polar(Point::new(10.0, 10.0), 2.0, std::f64::consts::FRAC_PI_2);
    assert!((p.x - 10.0).abs() < 1e-12);
    assert!((p.y - 12.0).abs() < 1e-12);
}
