//! Freehand signature capture surface
//!
//! Lifecycle of one stroke: `begin` on pointer-down starts a path at the
//! surface-relative point, `extend` on pointer-move draws a segment from the
//! last point, `end` on pointer-up/leave closes the stroke and publishes the
//! bitmap. `clear` and `resize` wipe the bitmap and publish `None`.
//!
//! Every operation on an unmounted or zero-width surface is a silent no-op.

use crate::bitmap::Bitmap;
use crate::event::PointerEvent;
use crate::feed::{signature_channel, SignatureEmitter, SignatureFeed};
use crate::geometry::{Point, Rect};
use crate::payload::SignaturePayload;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Prompt shown over an empty surface
pub const PLACEHOLDER_TEXT: &str = "請在此處簽名";

/// Where the surface sits on screen
///
/// Queried on every pointer event: the surface can move between events
/// (page scroll), so positions are never cached.
pub trait SurfaceHost: fmt::Debug {
    /// Current bounding rectangle of the surface in viewport coordinates
    fn bounding_rect(&self) -> Rect;

    /// Current width of the surface's container
    fn container_width(&self) -> u32;
}

impl<H: SurfaceHost + ?Sized> SurfaceHost for Rc<H> {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn container_width(&self) -> u32 {
        (**self).container_width()
    }
}

/// Host that never moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHost {
    origin: Point,
    width: u32,
}

impl FixedHost {
    /// Host at viewport position `(left, top)` with the given container width
    #[inline]
    #[must_use]
    pub fn new(left: f32, top: f32, width: u32) -> Self {
        Self {
            origin: Point::new(left, top),
            width,
        }
    }
}

impl SurfaceHost for FixedHost {
    #[allow(clippy::cast_precision_loss)]
    fn bounding_rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width as f32, 0.0)
    }

    fn container_width(&self) -> u32 {
        self.width
    }
}

/// Ink and surface geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadStyle {
    /// Fixed surface height, independent of the container
    pub height: u32,
    /// Stroke width in logical units
    pub line_width: f32,
    /// Ink colour (RGB)
    pub ink: [u8; 3],
}

impl PadStyle {
    /// Create default style
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With surface height
    #[inline]
    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// With stroke width
    #[inline]
    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// With ink colour
    #[inline]
    #[must_use]
    pub fn with_ink(mut self, ink: [u8; 3]) -> Self {
        self.ink = ink;
        self
    }
}

impl Default for PadStyle {
    fn default() -> Self {
        Self {
            height: 200,
            line_width: 2.5,
            ink: [0, 0, 0],
        }
    }
}

/// One pen-down to pen-up path in surface coordinates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Recorded points in order
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug)]
struct Surface {
    host: Box<dyn SurfaceHost>,
    bitmap: Bitmap,
}

impl Surface {
    fn is_sized(&self) -> bool {
        self.bitmap.width() > 0 && self.bitmap.height() > 0
    }
}

/// Signature capture surface
///
/// Owns the pixels. The only thing that leaves the pad is the exported
/// payload, published on the feed returned by [`SignaturePad::new`].
pub struct SignaturePad {
    style: PadStyle,
    surface: Option<Surface>,
    drawing: bool,
    has_content: bool,
    /// Last point of the current path; `None` once the path is lost
    cursor: Option<Point>,
    strokes: Vec<Stroke>,
    emitter: SignatureEmitter,
}

impl SignaturePad {
    /// Create unmounted pad with default style
    #[must_use]
    pub fn new() -> (Self, SignatureFeed) {
        Self::with_style(PadStyle::default())
    }

    /// Create unmounted pad with given style
    #[must_use]
    pub fn with_style(style: PadStyle) -> (Self, SignatureFeed) {
        let (emitter, feed) = signature_channel();
        let pad = Self {
            style,
            surface: None,
            drawing: false,
            has_content: false,
            cursor: None,
            strokes: Vec::new(),
            emitter,
        };
        (pad, feed)
    }

    /// Attach to a host and size to its container
    pub fn mount(&mut self, host: impl SurfaceHost + 'static) {
        self.surface = Some(Surface {
            host: Box::new(host),
            bitmap: Bitmap::new(0, self.style.height),
        });
        tracing::debug!("signature surface mounted");
        self.relayout();
    }

    /// Detach from the host, dropping the bitmap without publishing
    pub fn unmount(&mut self) {
        if self.surface.take().is_some() {
            tracing::debug!("signature surface unmounted");
        }
        self.drawing = false;
        self.has_content = false;
        self.cursor = None;
        self.strokes.clear();
    }

    /// Re-read the container width and resize to it
    pub fn relayout(&mut self) {
        if let Some(width) = self.surface.as_ref().map(|s| s.host.container_width()) {
            self.resize(width);
        }
    }

    /// Resize to a new container width
    ///
    /// Always wipes the bitmap and publishes `None`, even when the width is
    /// unchanged: any layout change forces the merchant to sign again.
    pub fn resize(&mut self, new_width: u32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.bitmap = Bitmap::new(new_width, self.style.height);
        self.has_content = false;
        self.cursor = None;
        self.strokes.clear();

        tracing::debug!(width = new_width, height = self.style.height, "signature surface resized");
        self.emitter.emit(None);
    }

    /// Pointer-down: start a new path
    pub fn begin(&mut self, event: &mut PointerEvent) {
        event.prevent_default();
        let Some(point) = self.surface_point(event) else {
            return;
        };

        self.drawing = true;
        self.cursor = Some(point);
        self.strokes.push(Stroke::starting_at(point));
        tracing::debug!(x = point.x, y = point.y, "stroke started");
    }

    /// Pointer-move: draw a segment from the last point
    pub fn extend(&mut self, event: &mut PointerEvent) {
        event.prevent_default();
        if !self.drawing {
            return;
        }
        let Some(point) = self.surface_point(event) else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match self.cursor {
            Some(prev) => {
                surface
                    .bitmap
                    .stroke_segment(prev, point, self.style.line_width, self.style.ink);
                if let Some(stroke) = self.strokes.last_mut() {
                    stroke.points.push(point);
                }
            }
            // Path lost to a resize mid-stroke: behave like a fresh move-to.
            None => self.strokes.push(Stroke::starting_at(point)),
        }
        self.cursor = Some(point);
    }

    /// Pointer-up or pointer-leave: close the stroke and publish the bitmap
    pub fn end(&mut self) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        self.cursor = None;

        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        match SignaturePayload::from_bitmap(&surface.bitmap) {
            Ok(payload) => {
                self.has_content = true;
                tracing::debug!(
                    strokes = self.strokes.len(),
                    bytes = payload.len(),
                    "stroke ended"
                );
                self.emitter.emit(Some(payload));
            }
            Err(e) => tracing::warn!(error = %e, "signature export failed"),
        }
    }

    /// Erase everything and publish `None`
    pub fn clear(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.bitmap.clear();
        self.has_content = false;
        self.cursor = None;
        self.strokes.clear();

        tracing::debug!("signature cleared");
        self.emitter.emit(None);
    }

    /// Encode the current bitmap if it holds a signature
    ///
    /// # Errors
    /// Propagates PNG encoding failures.
    pub fn export(&self) -> Result<Option<SignaturePayload>, crate::ExportError> {
        match (&self.surface, self.has_content) {
            (Some(surface), true) => SignaturePayload::from_bitmap(&surface.bitmap).map(Some),
            _ => Ok(None),
        }
    }

    /// Whether a stroke has ended since the last clear/resize
    #[inline]
    #[must_use]
    pub fn has_signature(&self) -> bool {
        self.has_content
    }

    /// Whether the pen is down
    #[inline]
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Whether the empty-surface prompt should show
    #[inline]
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        !self.has_content && !self.drawing
    }

    /// Whether a host is attached
    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Surface width, 0 when unmounted
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.bitmap.width())
    }

    /// Fixed surface height
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.style.height
    }

    /// Current bitmap, if mounted
    #[inline]
    #[must_use]
    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.surface.as_ref().map(|s| &s.bitmap)
    }

    /// Strokes since the last clear/resize
    #[inline]
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Ink and geometry
    #[inline]
    #[must_use]
    pub fn style(&self) -> &PadStyle {
        &self.style
    }

    /// Surface-relative point of an event, recomputed from the host each time
    fn surface_point(&self, event: &PointerEvent) -> Option<Point> {
        let surface = self.surface.as_ref().filter(|s| s.is_sized())?;
        let client = event.client_point()?;
        Some(client.relative_to(surface.host.bounding_rect().origin()))
    }
}

impl fmt::Debug for SignaturePad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignaturePad")
            .field("mounted", &self.is_mounted())
            .field("width", &self.width())
            .field("height", &self.style.height)
            .field("drawing", &self.drawing)
            .field("has_content", &self.has_content)
            .field("strokes", &self.strokes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(width: u32) -> (SignaturePad, SignatureFeed) {
        let (mut pad, mut feed) = SignaturePad::new();
        pad.mount(FixedHost::new(0.0, 0.0, width));
        // Drain the mount-time resize
        assert_eq!(feed.take_update(), Some(None));
        (pad, feed)
    }

    #[test]
    fn mount_sizes_to_container() {
        let (pad, _feed) = mounted(320);
        assert_eq!(pad.width(), 320);
        assert_eq!(pad.height(), 200);
        assert!(pad.shows_placeholder());
    }

    #[test]
    fn stroke_records_points() {
        let (mut pad, _feed) = mounted(100);
        pad.begin(&mut PointerEvent::mouse(10.0, 10.0));
        pad.extend(&mut PointerEvent::mouse(20.0, 15.0));
        pad.extend(&mut PointerEvent::mouse(30.0, 20.0));

        assert!(pad.is_drawing());
        assert!(!pad.shows_placeholder());
        assert_eq!(pad.strokes().len(), 1);
        assert_eq!(pad.strokes()[0].len(), 3);
    }

    #[test]
    fn extend_without_begin_is_ignored() {
        let (mut pad, _feed) = mounted(100);
        let mut event = PointerEvent::mouse(20.0, 20.0);
        pad.extend(&mut event);

        assert!(event.default_prevented());
        assert!(pad.bitmap().unwrap().is_blank());
        assert!(pad.strokes().is_empty());
    }

    #[test]
    fn end_without_begin_emits_nothing() {
        let (mut pad, mut feed) = mounted(100);
        pad.end();
        assert!(!pad.has_signature());
        assert_eq!(feed.take_update(), None);
    }

    #[test]
    fn export_tracks_content() {
        let (mut pad, _feed) = mounted(50);
        assert_eq!(pad.export().unwrap(), None);

        pad.begin(&mut PointerEvent::mouse(5.0, 5.0));
        pad.extend(&mut PointerEvent::mouse(40.0, 40.0));
        pad.end();
        assert!(pad.export().unwrap().is_some());
    }

    #[test]
    fn style_builder() {
        let style = PadStyle::new().with_height(120).with_line_width(4.0).with_ink([0, 0, 128]);
        let (pad, _feed) = SignaturePad::with_style(style);
        assert_eq!(pad.height(), 120);
        assert_eq!(pad.style().ink, [0, 0, 128]);
    }

    #[test]
    fn unmounted_pad_is_inert() {
        let (mut pad, mut feed) = SignaturePad::new();
        let mut down = PointerEvent::mouse(1.0, 1.0);
        pad.begin(&mut down);
        pad.extend(&mut PointerEvent::mouse(5.0, 5.0));
        pad.end();
        pad.clear();
        pad.resize(300);
        pad.relayout();

        assert!(down.default_prevented());
        assert!(!pad.is_drawing());
        assert!(!pad.has_signature());
        assert_eq!(pad.width(), 0);
        assert_eq!(feed.take_update(), None);
    }
}
