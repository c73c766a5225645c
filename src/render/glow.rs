//! Soft glows built from grown copies of a core shape.
//!
//! A glow of spread `g` is `g` rings, one per pixel, each the core geometry
//! grown by its distance from the core. Rings are composited outermost
//! first and each gets its own overlay, so a ring only blends with what is
//! already beneath it. The core goes on last.

use crate::types::Colour;

use super::{Canvas, Geometry, Point, Primitive, Rect};

/// Alpha of the ring `distance` pixels outside the core.
///
/// The outermost ring (`distance == spread`) gets `intensity / spread` and
/// the ring touching the core gets the full `intensity`, so alpha never
/// decreases toward the core.
pub fn ring_alpha(distance: i32, spread: i32, intensity: u8) -> u8 {
    if spread <= 0 || distance < 1 || distance > spread {
        return 0;
    }
    let step = (spread - distance + 1) as f32;
    (intensity as f32 * step / spread as f32).round().clamp(0.0, 255.0) as u8
}

/// A glowing shape.
#[derive(Debug, Clone)]
pub struct Glow {
    core: Geometry,
    colour: Colour,
    core_colour: Option<Colour>,
    spread: i32,
    intensity: u8,
}

impl Glow {
    /// Glow around arbitrary core geometry.
    pub fn new(core: Geometry, colour: impl Into<Colour>) -> Self {
        Self {
            core,
            colour: colour.into(),
            core_colour: None,
            spread: 0,
            intensity: 255,
        }
    }

    /// Glow around a disc.
    pub fn circle(centre: Point, radius: i32, colour: impl Into<Colour>) -> Self {
        Self::new(
            Geometry::Ellipse(Rect::around(centre, radius, radius)),
            colour,
        )
    }

    /// Glow around an ellipse's bounding box.
    pub fn ellipse(bounds: impl Into<Rect>, colour: impl Into<Colour>) -> Self {
        Self::new(Geometry::Ellipse(bounds.into()), colour)
    }

    /// Glow around a rectangle, for signs and light strips.
    pub fn rect(bounds: impl Into<Rect>, colour: impl Into<Colour>) -> Self {
        Self::new(Geometry::Rectangle(bounds.into()), colour)
    }

    /// A neon tube: a line haloed by wider translucent copies of itself.
    pub fn line(from: Point, to: Point, width: u32, colour: impl Into<Colour>) -> Self {
        Self::new(
            Geometry::Line {
                points: vec![from, to],
                width: width.max(1),
            },
            colour,
        )
    }

    /// Pixels of glow beyond the core. Zero or less draws the core alone.
    pub fn spread(mut self, spread: i32) -> Self {
        self.spread = spread;
        self
    }

    /// Alpha of the innermost ring.
    pub fn intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    /// Paint the core in a different colour (defaults to the glow colour,
    /// alpha included).
    pub fn core(mut self, colour: impl Into<Colour>) -> Self {
        self.core_colour = Some(colour.into());
        self
    }

    /// Composite the glow and its core onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        for distance in (1..=self.spread).rev() {
            let alpha = ring_alpha(distance, self.spread, self.intensity);
            if alpha == 0 {
                continue;
            }
            let ring = self.paint(self.core.grown(distance), self.colour.with_alpha(alpha));
            canvas.composite(|layer| layer.draw(ring));
        }

        let core = self.core_colour.unwrap_or(self.colour);
        if !core.is_transparent() {
            let shape = self.paint(self.core.clone(), core);
            canvas.composite(|layer| layer.draw(shape));
        }
    }

    fn paint(&self, geometry: Geometry, colour: Colour) -> Primitive {
        Primitive {
            geometry,
            fill: Some(colour),
            outline: None,
            outline_width: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYAN: Colour = Colour::rgb(0, 255, 255);

    #[test]
    fn test_ring_alpha_monotonic_toward_core() {
        for spread in 1..20 {
            let mut previous = 0;
            for distance in (1..=spread).rev() {
                let alpha = ring_alpha(distance, spread, 180);
                assert!(alpha >= previous, "spread {spread} distance {distance}");
                previous = alpha;
            }
            assert_eq!(ring_alpha(1, spread, 180), 180);
        }
    }

    #[test]
    fn test_ring_alpha_bounds() {
        assert_eq!(ring_alpha(4, 4, 200), 50);
        assert_eq!(ring_alpha(0, 4, 200), 0);
        assert_eq!(ring_alpha(5, 4, 200), 0);
        assert_eq!(ring_alpha(1, 0, 200), 0);
        assert_eq!(ring_alpha(1, -3, 200), 0);
    }

    #[test]
    fn test_zero_spread_is_plain_circle() {
        let mut glowing = Canvas::new(20, 20);
        Glow::circle((10, 10), 5, CYAN)
            .spread(0)
            .intensity(200)
            .draw(&mut glowing);

        let mut plain = Canvas::new(20, 20);
        plain.draw(Primitive::circle((10, 10), 5).fill(CYAN));

        assert_eq!(glowing, plain);
    }

    #[test]
    fn test_negative_spread_is_plain_circle() {
        let mut glowing = Canvas::new(12, 12);
        Glow::circle((6, 6), 3, CYAN).spread(-4).draw(&mut glowing);

        let mut plain = Canvas::new(12, 12);
        plain.draw(Primitive::circle((6, 6), 3).fill(CYAN));

        assert_eq!(glowing, plain);
    }

    #[test]
    fn test_glow_alpha_rises_toward_core() {
        let mut canvas = Canvas::new(40, 40);
        Glow::circle((20, 20), 4, CYAN)
            .spread(10)
            .intensity(120)
            .draw(&mut canvas);

        let alphas: Vec<u8> = (0..=20)
            .map(|x| canvas.get(x, 20).map_or(0, |c| c.a))
            .collect();
        for pair in alphas.windows(2) {
            assert!(pair[0] <= pair[1], "{alphas:?}");
        }
        assert_eq!(canvas.get(20, 20), Some(CYAN));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_zero_spread_keeps_translucent_colour() {
        let haze = CYAN.with_alpha(128);
        let mut glowing = Canvas::new(20, 20);
        Glow::circle((10, 10), 5, haze).spread(0).draw(&mut glowing);

        let mut plain = Canvas::new(20, 20);
        plain.draw(Primitive::circle((10, 10), 5).fill(haze));

        assert_eq!(glowing.get(10, 10), Some(haze));
        assert_eq!(glowing, plain);
    }

    #[test]
    fn test_transparent_core_draws_rings_only() {
        let mut canvas = Canvas::new(20, 20);
        Glow::circle((10, 10), 3, CYAN)
            .spread(3)
            .intensity(90)
            .core(Colour::TRANSPARENT)
            .draw(&mut canvas);
        let centre = canvas.get(10, 10).unwrap();
        assert!(centre.a > 0 && centre.a < 255);
    }

    #[test]
    fn test_neon_line_has_halo() {
        let mut canvas = Canvas::new(20, 20);
        Glow::line((2, 10), (17, 10), 2, CYAN)
            .spread(3)
            .intensity(80)
            .draw(&mut canvas);
        assert_eq!(canvas.get(10, 10), Some(CYAN));
        let halo = canvas.get(10, 12).unwrap();
        assert!(halo.a > 0 && halo.a < 255);
    }
}
