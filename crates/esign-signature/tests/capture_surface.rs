//! Capture surface lifecycle: coordinates, clear and resize policy

use esign_signature::{
    FixedHost, Point, PointerEvent, Rect, SignatureFeed, SignaturePad, SurfaceHost,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Host whose position changes as the page scrolls
#[derive(Debug)]
struct ScrollingHost {
    top: Cell<f32>,
    width: Cell<u32>,
}

impl ScrollingHost {
    fn new(top: f32, width: u32) -> Rc<Self> {
        Rc::new(Self {
            top: Cell::new(top),
            width: Cell::new(width),
        })
    }
}

impl SurfaceHost for ScrollingHost {
    #[allow(clippy::cast_precision_loss)]
    fn bounding_rect(&self) -> Rect {
        Rect::new(40.0, self.top.get(), self.width.get() as f32, 200.0)
    }

    fn container_width(&self) -> u32 {
        self.width.get()
    }
}

fn draw_line(pad: &mut SignaturePad, from: (f32, f32), to: (f32, f32)) {
    pad.begin(&mut PointerEvent::mouse(from.0, from.1));
    pad.extend(&mut PointerEvent::mouse(to.0, to.1));
    pad.end();
}

fn mounted_fixed(width: u32) -> (SignaturePad, SignatureFeed) {
    let (mut pad, mut feed) = SignaturePad::new();
    pad.mount(FixedHost::new(0.0, 0.0, width));
    let _ = feed.take_update();
    (pad, feed)
}

#[test]
fn coordinates_follow_scroll_between_events() {
    let host = ScrollingHost::new(100.0, 300);
    let (mut pad, _feed) = SignaturePad::new();
    pad.mount(Rc::clone(&host));

    pad.begin(&mut PointerEvent::mouse(50.0, 150.0));
    host.top.set(60.0);
    pad.extend(&mut PointerEvent::mouse(90.0, 110.0));

    // Both client points map to surface y = 50 despite the scroll
    let points = pad.strokes()[0].points().to_vec();
    assert_eq!(points, vec![Point::new(10.0, 50.0), Point::new(50.0, 50.0)]);

    let bitmap = pad.bitmap().unwrap();
    assert_eq!(bitmap.pixel(30, 50).unwrap()[3], 255);
    assert_eq!(bitmap.pixel(30, 90).unwrap()[3], 0);
}

#[test]
fn touch_input_uses_first_touch_and_suppresses_scrolling() {
    let (mut pad, mut feed) = mounted_fixed(200);

    let mut down = PointerEvent::touch(20.0, 20.0);
    let mut moved = PointerEvent::touches(vec![Point::new(60.0, 20.0), Point::new(0.0, 0.0)]);
    pad.begin(&mut down);
    pad.extend(&mut moved);
    pad.end();

    assert!(down.default_prevented());
    assert!(moved.default_prevented());
    assert_eq!(pad.bitmap().unwrap().pixel(40, 20).unwrap()[3], 255);
    assert!(matches!(feed.take_update(), Some(Some(_))));
}

#[test]
fn touch_without_points_is_ignored() {
    let (mut pad, _feed) = mounted_fixed(200);
    pad.begin(&mut PointerEvent::touches(Vec::new()));
    assert!(!pad.is_drawing());
}

#[test]
fn end_publishes_payload_and_marks_content() {
    let (mut pad, mut feed) = mounted_fixed(200);
    draw_line(&mut pad, (10.0, 10.0), (150.0, 120.0));

    assert!(pad.has_signature());
    assert!(!pad.shows_placeholder());

    let payload = feed.take_update().flatten().expect("payload after stroke end");
    let png = payload.png_bytes().unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(Some(payload), pad.export().unwrap());
}

#[test]
fn clear_resets_payload() {
    let (mut pad, mut feed) = mounted_fixed(200);
    draw_line(&mut pad, (10.0, 10.0), (150.0, 120.0));
    let _ = feed.take_update();

    pad.clear();

    assert!(!pad.has_signature());
    assert!(pad.strokes().is_empty());
    assert!(pad.bitmap().unwrap().is_blank());
    assert_eq!(feed.take_update(), Some(None));
    assert_eq!(pad.export().unwrap(), None);
}

#[test]
fn resize_always_clears_even_at_same_width() {
    let (mut pad, mut feed) = mounted_fixed(200);
    draw_line(&mut pad, (10.0, 10.0), (150.0, 120.0));
    assert!(matches!(feed.take_update(), Some(Some(_))));

    pad.resize(200);

    assert!(!pad.has_signature());
    assert!(pad.bitmap().unwrap().is_blank());
    assert_eq!(feed.take_update(), Some(None));
}

#[test]
fn relayout_keeps_fixed_height() {
    let host = ScrollingHost::new(0.0, 300);
    let (mut pad, mut feed) = SignaturePad::new();
    pad.mount(Rc::clone(&host));
    draw_line(&mut pad, (50.0, 10.0), (150.0, 100.0));

    host.width.set(180);
    pad.relayout();

    assert_eq!(pad.width(), 180);
    assert_eq!(pad.height(), 200);
    assert_eq!(feed.take_update(), Some(None));
}

#[test]
fn resize_mid_stroke_starts_fresh_path() {
    let (mut pad, _feed) = mounted_fixed(200);
    pad.begin(&mut PointerEvent::mouse(10.0, 10.0));
    pad.extend(&mut PointerEvent::mouse(20.0, 10.0));

    pad.resize(150);
    assert!(pad.is_drawing());

    // First move after the resize only re-anchors the path
    pad.extend(&mut PointerEvent::mouse(100.0, 100.0));
    assert!(pad.bitmap().unwrap().is_blank());

    pad.extend(&mut PointerEvent::mouse(120.0, 100.0));
    assert_eq!(pad.bitmap().unwrap().pixel(110, 100).unwrap()[3], 255);
    assert_eq!(pad.strokes().len(), 1);
    assert_eq!(pad.strokes()[0].len(), 2);
}

#[test]
fn zero_width_surface_ignores_input() {
    let (mut pad, mut feed) = mounted_fixed(0);
    pad.begin(&mut PointerEvent::mouse(1.0, 1.0));
    pad.end();

    assert!(!pad.is_drawing());
    assert!(!pad.has_signature());
    assert_eq!(feed.take_update(), None);
}

#[test]
fn strokes_accumulate_until_cleared() {
    let (mut pad, _feed) = mounted_fixed(200);
    draw_line(&mut pad, (10.0, 10.0), (50.0, 10.0));
    draw_line(&mut pad, (10.0, 40.0), (50.0, 40.0));

    assert_eq!(pad.strokes().len(), 2);
    let bitmap = pad.bitmap().unwrap();
    assert_eq!(bitmap.pixel(30, 10).unwrap()[3], 255);
    assert_eq!(bitmap.pixel(30, 40).unwrap()[3], 255);
}

#[test]
fn unmount_drops_surface_silently() {
    let (mut pad, mut feed) = mounted_fixed(200);
    pad.begin(&mut PointerEvent::mouse(10.0, 10.0));

    pad.unmount();

    assert!(!pad.is_mounted());
    assert!(!pad.is_drawing());
    pad.end();
    assert_eq!(feed.take_update(), None);
}

proptest! {
    #[test]
    fn prop_resize_after_any_strokes_yields_none(
        width in 1u32..400,
        strokes in proptest::collection::vec(
            proptest::collection::vec((0f32..400.0, 0f32..200.0), 1..6),
            1..4,
        ),
        new_width in 0u32..400,
    ) {
        let (mut pad, mut feed) = SignaturePad::new();
        pad.mount(FixedHost::new(0.0, 0.0, width));

        for stroke in &strokes {
            pad.begin(&mut PointerEvent::mouse(stroke[0].0, stroke[0].1));
            for &(x, y) in &stroke[1..] {
                pad.extend(&mut PointerEvent::mouse(x, y));
            }
            pad.end();
        }
        prop_assert!(pad.has_signature());

        pad.resize(new_width);
        prop_assert!(!pad.has_signature());
        prop_assert_eq!(feed.take_update(), Some(None));
        prop_assert_eq!(pad.export().unwrap(), None);
    }
}
