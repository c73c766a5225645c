//! Alpha-over compositing of transient overlay layers.

use crate::types::Colour;

use super::Canvas;

/// Composite `src` over `dst` (straight alpha, source-over).
///
/// A fully transparent source leaves `dst` untouched and a fully opaque
/// source replaces it. Over an opaque destination this is the familiar
/// `result = src * a + dst * (1 - a)` per channel with the result opaque.
pub fn alpha_over(src: Colour, dst: Colour) -> Colour {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 || dst.a == 0 {
        return src;
    }

    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |s: u8, d: u8| {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Colour::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

impl Canvas {
    /// Draw onto a transparent overlay the size of this canvas, then merge
    /// it back with [`alpha_over`].
    ///
    /// Primitives inside the closure write by replacement, so translucent
    /// colours only blend with what was on the canvas before the call.
    /// Pixels the overlay leaves transparent are unchanged.
    pub fn composite<F>(&mut self, paint: F)
    where
        F: FnOnce(&mut Canvas),
    {
        let mut pixels = std::mem::take(&mut self.scratch);
        pixels.clear();
        pixels.resize(self.pixels.len(), Colour::TRANSPARENT);

        let mut overlay = Canvas {
            width: self.width,
            height: self.height,
            pixels,
            scratch: Vec::new(),
        };
        paint(&mut overlay);
        self.merge(&overlay);

        self.scratch = overlay.pixels;
    }

    /// Alpha-over an overlay of this canvas's size onto it.
    fn merge(&mut self, layer: &Canvas) {
        debug_assert_eq!(layer.size(), self.size());
        for (dst, &src) in self.pixels.iter_mut().zip(&layer.pixels) {
            *dst = alpha_over(src, *dst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;

    #[test]
    fn test_alpha_over_extremes() {
        let dst = Colour::rgb(10, 20, 30);
        assert_eq!(alpha_over(Colour::TRANSPARENT, dst), dst);
        assert_eq!(alpha_over(Colour::rgb(1, 2, 3), dst), Colour::rgb(1, 2, 3));

        let src = Colour::new(200, 0, 0, 100);
        assert_eq!(alpha_over(src, Colour::TRANSPARENT), src);
    }

    #[test]
    fn test_alpha_over_opaque_destination() {
        // half-red over white
        let out = alpha_over(Colour::new(255, 0, 0, 128), Colour::WHITE);
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 255);
        assert_eq!(out.g, 127);
        assert_eq!(out.b, 127);
    }

    #[test]
    fn test_alpha_over_translucent_stack() {
        let out = alpha_over(Colour::new(0, 0, 255, 128), Colour::new(255, 0, 0, 128));
        assert!(out.a > 128);
        assert!(out.b > out.r);
    }

    #[test]
    fn test_composite_outside_footprint_unchanged() {
        let bg = Colour::rgb(15, 15, 25);
        let mut canvas = Canvas::filled(8, 8, bg);
        canvas.composite(|layer| {
            layer.draw(Primitive::rect([2, 2, 3, 3]).fill(Colour::new(0, 255, 255, 60)));
        });

        assert_eq!(canvas.get(0, 0), Some(bg));
        assert_eq!(canvas.get(7, 7), Some(bg));
        let tinted = canvas.get(2, 2).unwrap();
        assert_ne!(tinted, bg);
        assert!(tinted.g > bg.g);
    }

    #[test]
    fn test_composite_opaque_overlay_replaces() {
        let mut canvas = Canvas::filled(4, 4, Colour::rgb(50, 50, 50));
        canvas.composite(|layer| {
            layer.draw(Primitive::rect([0, 0, 3, 1]).fill(Colour::WHITE));
        });
        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.get(1, 2), Some(Colour::rgb(50, 50, 50)));
    }

    #[test]
    fn test_composite_reuses_scratch_between_calls() {
        let mut canvas = Canvas::new(4, 4);
        canvas.composite(|layer| layer.put(0, 0, Colour::WHITE));
        canvas.composite(|layer| {
            // the recycled layer starts transparent again
            assert!(layer.pixels().iter().all(|c| c.is_transparent()));
        });
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
    }
}
