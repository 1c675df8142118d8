//! RGBA ink bitmap and segment rasterizer

use crate::geometry::Point;

/// Bytes per RGBA pixel
const CHANNELS: usize = 4;

/// Transparent RGBA8 bitmap, row-major, top-left origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create fully transparent bitmap
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Width in pixels
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at pixel, `None` outside the bitmap
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[idx..idx + CHANNELS]);
        Some(out)
    }

    /// Check if no pixel carries any ink
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(CHANNELS).all(|px| px[3] == 0)
    }

    /// Number of pixels with non-zero alpha
    #[must_use]
    pub fn inked_pixels(&self) -> usize {
        self.pixels
            .chunks_exact(CHANNELS)
            .filter(|px| px[3] != 0)
            .count()
    }

    /// Erase all ink
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Rasterize a round-capped line segment
    ///
    /// Coverage is anti-aliased over one pixel at the edge and composes with
    /// existing ink by maximum alpha, so joints shared by consecutive
    /// segments do not darken. Parts outside the bitmap are clipped.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn stroke_segment(&mut self, from: Point, to: Point, line_width: f32, color: [u8; 3]) {
        if self.width == 0 || self.height == 0 || line_width <= 0.0 {
            return;
        }

        let half = line_width / 2.0;
        let reach = half + 1.0;

        let min_x = (from.x.min(to.x) - reach).floor().max(0.0);
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0);
        let max_x = (from.x.max(to.x) + reach).ceil().min((self.width - 1) as f32);
        let max_y = (from.y.max(to.y) + reach).ceil().min((self.height - 1) as f32);
        if !(min_x <= max_x && min_y <= max_y) {
            return;
        }

        for py in (min_y as u32)..=(max_y as u32) {
            for px in (min_x as u32)..=(max_x as u32) {
                let centre = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                let coverage = (half + 0.5 - distance_to_segment(centre, from, to)).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }

                let alpha = (coverage * 255.0).round() as u8;
                let idx = self.index(px, py);
                if alpha > self.pixels[idx + 3] {
                    self.pixels[idx..idx + 3].copy_from_slice(&color);
                    self.pixels[idx + 3] = alpha;
                }
            }
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

/// Euclidean distance from `p` to the segment `a`-`b`
fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 3] = [0, 0, 0];

    #[test]
    fn new_bitmap_is_blank() {
        let bitmap = Bitmap::new(10, 5);
        assert!(bitmap.is_blank());
        assert_eq!(bitmap.pixels().len(), 10 * 5 * 4);
        assert_eq!(bitmap.pixel(10, 0), None);
    }

    #[test]
    fn horizontal_segment_inks_its_row() {
        let mut bitmap = Bitmap::new(40, 20);
        bitmap.stroke_segment(Point::new(5.0, 10.0), Point::new(35.0, 10.0), 2.5, BLACK);

        assert_eq!(bitmap.pixel(20, 10), Some([0, 0, 0, 255]));
        assert_eq!(bitmap.pixel(20, 2), Some([0, 0, 0, 0]));
        assert!(bitmap.inked_pixels() > 30);
    }

    #[test]
    fn round_cap_extends_past_endpoint() {
        let mut bitmap = Bitmap::new(40, 20);
        bitmap.stroke_segment(Point::new(10.0, 10.0), Point::new(20.0, 10.0), 4.0, BLACK);

        // 1.5 units past the end is still inside the 2-unit cap radius
        assert!(bitmap.pixel(21, 9).unwrap()[3] > 0);
        assert_eq!(bitmap.pixel(25, 10).unwrap()[3], 0);
    }

    #[test]
    fn zero_length_segment_draws_a_dot() {
        let mut bitmap = Bitmap::new(10, 10);
        bitmap.stroke_segment(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 2.5, BLACK);
        assert!(!bitmap.is_blank());
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut bitmap = Bitmap::new(10, 10);
        bitmap.stroke_segment(Point::new(-50.0, -50.0), Point::new(-20.0, -20.0), 2.5, BLACK);
        assert!(bitmap.is_blank());

        bitmap.stroke_segment(Point::new(-5.0, 5.0), Point::new(15.0, 5.0), 2.5, BLACK);
        assert!(!bitmap.is_blank());
    }

    #[test]
    fn overlapping_strokes_do_not_darken() {
        let mut once = Bitmap::new(30, 30);
        once.stroke_segment(Point::new(5.0, 5.0), Point::new(25.0, 25.0), 2.5, BLACK);

        let mut twice = once.clone();
        twice.stroke_segment(Point::new(5.0, 5.0), Point::new(25.0, 25.0), 2.5, BLACK);

        assert_eq!(once, twice);
    }

    #[test]
    fn clear_erases() {
        let mut bitmap = Bitmap::new(10, 10);
        bitmap.stroke_segment(Point::new(1.0, 1.0), Point::new(8.0, 8.0), 2.5, BLACK);
        bitmap.clear();
        assert!(bitmap.is_blank());
    }

    #[test]
    fn segment_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!((distance_to_segment(Point::new(5.0, 3.0), a, b) - 3.0).abs() < f32::EPSILON);
        assert!((distance_to_segment(Point::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-5);
    }
}
