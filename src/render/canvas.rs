//! Owned RGBA raster buffer, the unit of work for one sprite variant.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::types::Colour;

use super::Primitive;

/// A width x height grid of straight-alpha RGBA pixels (row-major).
///
/// A canvas starts fully transparent unless created with [`Canvas::filled`].
/// It also owns a scratch buffer that backs the transient overlay layers
/// used by [`Canvas::composite`], so repeated compositing steps on one
/// sprite do not allocate a fresh layer each time.
#[derive(Debug)]
pub struct Canvas {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) pixels: Vec<Colour>,
    pub(super) scratch: Vec<Colour>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a canvas with a solid background.
    pub fn filled(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
            scratch: Vec::new(),
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Overwrite one pixel. Coordinates outside the canvas are ignored.
    pub fn put(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Rasterize a primitive directly into this canvas.
    pub fn draw(&mut self, primitive: Primitive) {
        primitive.rasterize(self);
    }

    /// Nearest-neighbour upscale by an integer factor.
    ///
    /// Every destination pixel copies exactly one source pixel, so no
    /// intermediate colours are introduced. A factor of 0 is treated as 1.
    pub fn scaled(&self, factor: u32) -> Canvas {
        let factor = factor.max(1);
        let width = self.width * factor;
        let height = self.height * factor;

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let row = (y / factor) as usize * self.width as usize;
            for x in 0..width {
                pixels.push(self.pixels[row + (x / factor) as usize]);
            }
        }

        Canvas {
            width,
            height,
            pixels,
            scratch: Vec::new(),
        }
    }

    /// Convert to an `image` buffer for encoding.
    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            let colour = self.pixels[(y * self.width + x) as usize];
            Rgba(colour.to_rgba())
        })
    }

    /// Clamp an inclusive x range to the canvas columns.
    pub(super) fn clip_x(&self, x0: i32, x1: i32) -> Option<(i32, i32)> {
        clip(x0, x1, self.width)
    }

    /// Clamp an inclusive y range to the canvas rows.
    pub(super) fn clip_y(&self, y0: i32, y1: i32) -> Option<(i32, i32)> {
        clip(y0, y1, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Clone for Canvas {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            scratch: Vec::new(),
        }
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl Eq for Canvas {}

fn clip(lo: i32, hi: i32, extent: u32) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(extent as i32 - 1);
    (lo <= hi).then_some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.size(), (4, 3));
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn test_filled_background() {
        let bg = Colour::rgb(15, 15, 25);
        let canvas = Canvas::filled(2, 2, bg);
        assert!(canvas.pixels().iter().all(|&c| c == bg));
    }

    #[test]
    fn test_put_clips_silently() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(-1, 0, Colour::WHITE);
        canvas.put(0, 2, Colour::WHITE);
        canvas.put(5, 5, Colour::WHITE);
        assert!(canvas.pixels().iter().all(|c| c.is_transparent()));

        canvas.put(1, 1, Colour::WHITE);
        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.get(2, 1), None);
    }

    #[test]
    fn test_scaled_dimensions() {
        let canvas = Canvas::new(5, 3);
        assert_eq!(canvas.scaled(2).size(), (10, 6));
        assert_eq!(canvas.scaled(3).size(), (15, 9));
        assert_eq!(canvas.scaled(0).size(), (5, 3));
    }

    #[test]
    fn test_scaled_nearest_neighbour_blocks() {
        let mut canvas = Canvas::new(3, 2);
        let colours = [
            Colour::rgb(255, 0, 0),
            Colour::rgb(0, 255, 0),
            Colour::new(0, 0, 255, 128),
            Colour::TRANSPARENT,
            Colour::WHITE,
            Colour::new(10, 20, 30, 40),
        ];
        for (i, &c) in colours.iter().enumerate() {
            canvas.put(i as i32 % 3, i as i32 / 3, c);
        }

        let scaled = canvas.scaled(2);
        for y in 0..2 {
            for x in 0..3 {
                let base = canvas.get(x, y).unwrap();
                for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    assert_eq!(scaled.get(2 * x + dx, 2 * y + dy), Some(base));
                }
            }
        }
    }

    #[test]
    fn test_to_image_matches_pixels() {
        let mut canvas = Canvas::new(2, 1);
        canvas.put(1, 0, Colour::new(255, 0, 0, 128));
        let img = canvas.to_image();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_clone_equality_ignores_scratch() {
        let mut canvas = Canvas::new(2, 2);
        canvas.scratch = vec![Colour::WHITE; 4];
        let copy = canvas.clone();
        assert!(copy.scratch.is_empty());
        assert_eq!(copy, canvas);
    }
}
