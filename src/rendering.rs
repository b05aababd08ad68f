use crate::cursor::Couple;
use crate::cursor::Cursor;
use crate::cursor::CursorState;
use crate::cursor::Float;

use wizdraw::stroke;
use wizdraw::fill;

use vek::vec::Vec2;

use rgb::RGBA8;

use alloc::{vec, vec::Vec};

/// Point type handed to the rasterizer.
pub type Point = vek::vec::repr_c::vec2::Vec2<f32>;

pub const SSAA: usize = 4;
pub const SSAA_SQ: usize = SSAA * SSAA;
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;

const FALLBACK: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 255 };

#[derive(Debug, Clone, PartialEq)]
enum Mark {
    /// open polyline
    Stroke(Vec<Couple>, RGBA8),
    /// closed polygon
    Fill(Vec<Couple>, RGBA8),
}

/// A cursor drawing into an RGBA8 pixel buffer.
///
/// The origin sits at the center of the buffer and Y grows upwards.
/// Strokes and fills are buffered and only rasterized on [`Cursor::flush`].
pub struct Canvas {
    state: CursorState,
    width: usize,
    height: usize,
    background: RGBA8,
    stroke_width: f32,
    pixels: Vec<RGBA8>,
    mask: Vec<u8>,
    pending: Vec<Mark>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, RGBA8::new(255, 255, 255, 255))
    }

    pub fn with_background(width: usize, height: usize, background: RGBA8) -> Self {
        let length = width * height;
        Self {
            state: CursorState::default(),
            width,
            height,
            background,
            stroke_width: DEFAULT_STROKE_WIDTH,
            pixels: vec![background; length],
            mask: vec![0; length],
            pending: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    /// Number of strokes and fills waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Rasterized pixels, row by row; call [`Cursor::flush`] first.
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// Pixel covering the cursor coordinate `at`, if it is on the canvas.
    pub fn pixel_at(&self, at: Couple) -> Option<RGBA8> {
        let p = self.to_screen(at);
        if !p.x.is_finite() || !p.y.is_finite() || p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        match x < self.width && y < self.height {
            true => Some(self.pixels[y * self.width + x]),
            false => None,
        }
    }

    fn to_screen(&self, c: Couple) -> Point {
        let x = (self.width as Float) * 0.5 + c.x;
        let y = (self.height as Float) * 0.5 - c.y;
        Point::new(x as f32, y as f32)
    }

    fn current_color(&self) -> RGBA8 {
        // an invalid color set by hand still leaves a visible trace
        self.state.color.to_rgba().unwrap_or(FALLBACK)
    }

    fn rasterize(&mut self, mark: &Mark) {
        let mask_size = Vec2::new(self.width, self.height);
        let (points, color, closed) = match mark {
            Mark::Stroke(points, color) => (points, *color, false),
            Mark::Fill(points, color) => (points, *color, true),
        };

        let mut path: Vec<Point> = points.iter().map(|c| self.to_screen(*c)).collect();
        if closed {
            if let Some(first) = path.first().copied() {
                path.push(first);
            }
        }

        self.mask.fill(0);
        if closed {
            fill::<SSAA, SSAA_SQ>(&path, &mut self.mask, mask_size);
        } else {
            stroke::<SSAA>(&path, &mut self.mask, mask_size, self.stroke_width);
        }

        for (dst, q) in self.pixels.iter_mut().zip(self.mask.iter()) {
            if *q != 0 {
                blend_pixel(dst, color, *q);
            }
        }
    }
}

impl Cursor for Canvas {
    fn state(&self) -> &CursorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CursorState {
        &mut self.state
    }

    fn forward(&mut self, distance: Float) {
        let (from, to) = self.state.advance(distance);
        if !self.state.draw_mode {
            return;
        }

        let color = self.current_color();
        if let Some(Mark::Stroke(points, last_color)) = self.pending.last_mut() {
            if *last_color == color && points.last() == Some(&from) {
                points.push(to);
                return;
            }
        }
        self.pending.push(Mark::Stroke(vec![from, to], color));
    }

    fn left(&mut self, angle: Float) {
        self.state.rotate(angle);
    }

    fn move_to(&mut self, position: Couple) {
        self.state.position = position;
    }

    fn fill_polygon(&mut self, vertices: &[Couple]) {
        if vertices.len() >= 3 {
            let color = self.current_color();
            self.pending.push(Mark::Fill(vertices.to_vec(), color));
        }
    }

    fn flush(&mut self) {
        let pending = core::mem::take(&mut self.pending);
        log::debug!("rasterizing {} marks", pending.len());
        for mark in &pending {
            self.rasterize(mark);
        }
    }

    fn clear(&mut self) {
        self.state = CursorState::default();
        self.pending.clear();
        self.pixels.fill(self.background);
    }
}

/// Source-over blend of `src_pixel`, weighted by the mask coverage.
#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
        return;
    }

    let u8_max = u8::MAX as u32;
    let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / u8_max;
    let dst_alpha = u8_max - src_alpha;

    let mix = |src: u8, dst: u8| (((src as u32) * src_alpha + (dst as u32) * dst_alpha) / u8_max) as u8;
    *dst_pixel = RGBA8::new(
        mix(src_pixel.r, dst_pixel.r),
        mix(src_pixel.g, dst_pixel.g),
        mix(src_pixel.b, dst_pixel.b),
        mix(src_pixel.a, dst_pixel.a),
    );
}
