//! Square RGBA raster canvas with deterministic stroke primitives
//!
//! All primitives sample pixel centers, overwrite the target pixel with the
//! given color (no alpha blending), and silently skip out-of-bounds pixels.

use image::{Rgba, RgbaImage};

/// Fully opaque white, the glyph stroke color
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fully transparent pixel, the canvas background
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A square in-memory RGBA raster, transparent at creation
pub struct Canvas {
    size: u32,
    img: RgbaImage,
}

impl Canvas {
    /// Create a transparent square canvas of the given side length
    pub fn new(size: u32) -> Self {
        Self {
            size,
            img: RgbaImage::from_pixel(size, size, TRANSPARENT),
        }
    }

    /// Side length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Consume the canvas and return the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Read a pixel (panics if out of bounds)
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.size && (y as u32) < self.size {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Paint a filled circle centered at (cx, cy)
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
        let r2 = r * r;
        for y in span(cy - r, cy + r) {
            for x in span(cx - r, cx + r) {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Paint a circle outline of the given stroke width, stroked inward
    /// from radius `r`
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, width: f32, color: Rgba<u8>) {
        let inner = (r - width).max(0.0);
        let r2 = r * r;
        let inner2 = inner * inner;
        for y in span(cy - r, cy + r) {
            for x in span(cx - r, cx + r) {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;
                if d2 <= r2 && d2 >= inner2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Paint a rectangle outline, stroked inward from the bounds
    pub fn stroke_rect(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: f32,
        color: Rgba<u8>,
    ) {
        for y in span(y0, y1) {
            for x in span(x0, x1) {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if px < x0 || px > x1 || py < y0 || py > y1 {
                    continue;
                }
                let near_edge =
                    px - x0 < width || x1 - px < width || py - y0 < width || y1 - py < width;
                if near_edge {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Paint a line segment as a band of the given stroke width
    pub fn stroke_line(&mut self, p0: (f32, f32), p1: (f32, f32), width: f32, color: Rgba<u8>) {
        let half = width / 2.0;
        let (x0, y0) = p0;
        let (x1, y1) = p1;
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len2 = dx * dx + dy * dy;
        for y in span(y0.min(y1) - half, y0.max(y1) + half) {
            for x in span(x0.min(x1) - half, x0.max(x1) + half) {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                // Distance from pixel center to the closest point on the segment
                let t = if len2 > 0.0 {
                    (((px - x0) * dx + (py - y0) * dy) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = px - (x0 + t * dx);
                let ey = py - (y0 + t * dy);
                if ex * ex + ey * ey <= half * half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Paint a closed polygon outline by stroking each edge
    pub fn stroke_polygon(&mut self, points: &[(f32, f32)], width: f32, color: Rgba<u8>) {
        if points.len() < 2 {
            return;
        }
        for i in 0..points.len() {
            let next = (i + 1) % points.len();
            self.stroke_line(points[i], points[next], width, color);
        }
    }
}

/// Integer pixel range covering the inclusive f32 interval
fn span(lo: f32, hi: f32) -> std::ops::RangeInclusive<i32> {
    lo.floor() as i32..=hi.ceil() as i32
}
