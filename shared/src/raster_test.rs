use super::*;

const RED: Rgba<u8> = Rgba([0xee, 0x33, 0x33, 255]);

fn surface() -> RasterSurface {
    RasterSurface::new(SurfaceSize::new(64, 48))
}

#[test]
fn new_surface_is_filled_with_background() {
    let surface = surface();
    assert_eq!(surface.size(), SurfaceSize::new(64, 48));
    assert_eq!(surface.background(), Rgba([0x2d, 0x2d, 0x2d, 255]));
    assert!(surface.is_blank());
}

#[test]
fn segment_covers_its_endpoints_and_midpoint() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(10.0, 10.0), Point::new(40.0, 40.0), "#ee3333");
    assert_eq!(surface.pixel(10, 10), Some(RED));
    assert_eq!(surface.pixel(25, 25), Some(RED));
    assert_eq!(surface.pixel(40, 40), Some(RED));
    assert_eq!(surface.pixel(40, 10), Some(surface.background()));
}

#[test]
fn segment_width_matches_stroke_width() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(5.0, 20.0), Point::new(55.0, 20.0), "#ee3333");
    // Radius 2.5 around y = 20 reaches pixel centers on rows 17..=22.
    for y in 17..=22 {
        assert_eq!(surface.pixel(30, y), Some(RED), "row {y}");
    }
    assert_eq!(surface.pixel(30, 16), Some(surface.background()));
    assert_eq!(surface.pixel(30, 23), Some(surface.background()));
}

#[test]
fn zero_length_segment_paints_a_round_dot() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(20.0, 20.0), Point::new(20.0, 20.0), "#ee3333");
    assert_eq!(surface.pixel(20, 20), Some(RED));
    assert_eq!(surface.pixel(19, 19), Some(RED));
    assert_eq!(surface.pixel(23, 23), Some(surface.background()));
}

#[test]
fn segment_outside_bounds_is_clipped() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(-50.0, -50.0), Point::new(-10.0, -10.0), "#ee3333");
    surface.stroke_segment(Point::new(500.0, 5.0), Point::new(900.0, 5.0), "#ee3333");
    assert!(surface.is_blank());
    surface.stroke_segment(Point::new(-10.0, 10.0), Point::new(100.0, 10.0), "#ee3333");
    assert_eq!(surface.pixel(0, 10), Some(RED));
    assert_eq!(surface.pixel(63, 10), Some(RED));
}

#[test]
fn unparseable_color_draws_nothing() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(10.0, 10.0), Point::new(40.0, 40.0), "chalk");
    assert!(surface.is_blank());
}

#[test]
fn clear_restores_background_without_resizing() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(10.0, 10.0), Point::new(40.0, 40.0), "#ee3333");
    assert!(!surface.is_blank());
    surface.clear();
    assert!(surface.is_blank());
    assert_eq!(surface.size(), SurfaceSize::new(64, 48));
}

#[test]
fn resize_discards_content() {
    let mut surface = surface();
    surface.stroke_segment(Point::new(10.0, 10.0), Point::new(40.0, 40.0), "#ee3333");
    surface.resize(SurfaceSize::new(64, 48));
    assert!(surface.is_blank());
    surface.resize(SurfaceSize::new(10, 5));
    assert_eq!(surface.size(), SurfaceSize::new(10, 5));
    assert!(surface.is_blank());
}

#[test]
fn snapshot_is_png_data_url() {
    let surface = surface();
    let snapshot = surface.export_snapshot().unwrap();
    let payload = snapshot.strip_prefix(PNG_DATA_URL_PREFIX).unwrap();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 48));
    assert_eq!(&decoded, surface.image());
}

#[test]
fn snapshot_after_clear_equals_fresh_snapshot() {
    let mut surface = surface();
    let fresh = surface.export_snapshot().unwrap();
    surface.stroke_segment(Point::new(1.0, 1.0), Point::new(60.0, 40.0), "#40c057");
    assert_ne!(surface.export_snapshot().unwrap(), fresh);
    surface.clear();
    assert_eq!(surface.export_snapshot().unwrap(), fresh);
}

#[test]
fn empty_surface_cannot_be_exported() {
    let surface = RasterSurface::default();
    assert!(matches!(
        surface.export_snapshot(),
        Err(SnapshotError::Empty)
    ));
}
