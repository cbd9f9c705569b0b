use egui::{pos2, Color32};
use sticker_sketchpad::command::{StickerCommand, StrokeCommand};
use sticker_sketchpad::export::{encode_png, render_export, ExportSettings};
use sticker_sketchpad::geometry::Polyline;
use sticker_sketchpad::surface::{RecordingSurface, StrokeStyle, SurfaceOp};
use sticker_sketchpad::{DrawCommand, InputEvent, SketchSession};

#[test]
fn test_stroke_renders_exact_segments() {
    let line: Polyline = vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)].into();
    let stroke: DrawCommand = StrokeCommand::new(line, 3.0, Color32::BLACK).into();

    let mut surface = RecordingSurface::new();
    stroke.render(&mut surface);
    let segments: Vec<_> = surface.segments().map(|(a, b, _)| (a, b)).collect();
    assert_eq!(
        segments,
        vec![
            (pos2(0.0, 0.0), pos2(10.0, 0.0)),
            (pos2(10.0, 0.0), pos2(10.0, 10.0)),
        ]
    );

    assert!(surface.touches(pos2(5.0, 1.0)));
    assert!(!surface.touches(pos2(5.0, 5.0)));
}

#[test]
fn test_click_without_drag_leaves_no_mark() {
    let mut session = SketchSession::default();
    session.handle_event(InputEvent::PointerDown { pos: pos2(5.0, 5.0) });
    session.handle_event(InputEvent::PointerUp { pos: pos2(5.0, 5.0) });

    let mut surface = RecordingSurface::new();
    session.redraw(&mut surface);
    assert_eq!(surface.ops(), &[SurfaceOp::Clear]);
    assert_eq!(session.history().committed().len(), 1);
}

#[test]
fn test_later_commands_draw_on_top() {
    let red: DrawCommand =
        StrokeCommand::new(vec![pos2(0.0, 5.0), pos2(16.0, 5.0)].into(), 4.0, Color32::RED).into();
    let blue: DrawCommand =
        StrokeCommand::new(vec![pos2(8.0, 0.0), pos2(8.0, 16.0)].into(), 4.0, Color32::BLUE).into();
    let settings = ExportSettings {
        size: 64,
        scale: 4.0,
        ..Default::default()
    };

    let surface = render_export([&red, &blue], &settings).unwrap();
    // Crossing point (8, 5) logical is (32, 20) in pixels
    assert_eq!(surface.pixel(32, 20), Some(Color32::BLUE));
    assert_eq!(surface.pixel(4, 20), Some(Color32::RED));
    assert_eq!(surface.pixel(60, 60), Some(Color32::WHITE));
}

#[test]
fn test_session_export_excludes_preview() {
    let mut session = SketchSession::default();
    session.handle_event(InputEvent::PointerMove { pos: pos2(10.0, 10.0) });
    assert!(session.cursor_preview().is_some());

    let settings = ExportSettings {
        size: 32,
        scale: 1.0,
        ..Default::default()
    };
    let bytes = session.export_png(&settings).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_default_export_dimensions() {
    let settings = ExportSettings::default();
    let sticker: DrawCommand = StickerCommand::new("🌈", pos2(128.0, 128.0)).into();
    let surface = render_export([&sticker], &settings).unwrap();
    assert_eq!((surface.width(), surface.height()), (1024, 1024));

    let png = encode_png(&surface.into_rgba_image()).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn test_stroke_style_is_kept_per_segment() {
    let stroke: DrawCommand =
        StrokeCommand::new(vec![pos2(1.0, 1.0), pos2(2.0, 2.0)].into(), 10.0, Color32::GREEN).into();
    let mut surface = RecordingSurface::new();
    stroke.render(&mut surface);
    assert_eq!(
        surface.ops(),
        &[SurfaceOp::Segment {
            from: pos2(1.0, 1.0),
            to: pos2(2.0, 2.0),
            style: StrokeStyle::new(10.0, Color32::GREEN),
        }]
    );
}
