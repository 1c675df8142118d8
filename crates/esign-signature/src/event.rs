//! Pointer input delivered to the capture surface
//!
//! Mouse and touch input are unified into `PointerEvent`. Coordinates are raw
//! viewport ("client") coordinates; the pad maps them onto its own origin.

use crate::geometry::Point;

/// Input device payload
#[derive(Debug, Clone, PartialEq)]
pub enum PointerKind {
    /// Mouse event at one client point
    Mouse(Point),
    /// Touch event with the active touch points, first one drives the pen
    Touch(Vec<Point>),
}

/// A pointer or touch event
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    kind: PointerKind,
    default_prevented: bool,
}

impl PointerEvent {
    /// Mouse event at client coordinates
    #[inline]
    #[must_use]
    pub fn mouse(client_x: f32, client_y: f32) -> Self {
        Self::new(PointerKind::Mouse(Point::new(client_x, client_y)))
    }

    /// Single-finger touch event at client coordinates
    #[inline]
    #[must_use]
    pub fn touch(client_x: f32, client_y: f32) -> Self {
        Self::new(PointerKind::Touch(vec![Point::new(client_x, client_y)]))
    }

    /// Touch event with an arbitrary list of touches (possibly empty)
    #[inline]
    #[must_use]
    pub fn touches(points: Vec<Point>) -> Self {
        Self::new(PointerKind::Touch(points))
    }

    /// Wrap input payload
    #[inline]
    #[must_use]
    pub fn new(kind: PointerKind) -> Self {
        Self {
            kind,
            default_prevented: false,
        }
    }

    /// Input payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &PointerKind {
        &self.kind
    }

    /// Client coordinates of the pen, if the event carries any
    #[must_use]
    pub fn client_point(&self) -> Option<Point> {
        match &self.kind {
            PointerKind::Mouse(p) => Some(*p),
            PointerKind::Touch(touches) => touches.first().copied(),
        }
    }

    /// Suppress the platform's default scroll/selection handling
    #[inline]
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether default handling was suppressed
    #[inline]
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_uses_first_point() {
        let event = PointerEvent::touches(vec![Point::new(1.0, 2.0), Point::new(9.0, 9.0)]);
        assert_eq!(event.client_point(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn touch_without_points() {
        assert_eq!(PointerEvent::touches(Vec::new()).client_point(), None);
    }

    #[test]
    fn prevent_default_sticks() {
        let mut event = PointerEvent::mouse(0.0, 0.0);
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }
}
