//! Drawing primitives.
//!
//! A [`Primitive`] is a stateless value: geometry in the target canvas's own
//! pixel space plus a fill and/or outline colour. Rasterizing one writes
//! straight into the pixel buffer (no blending; use
//! [`Canvas::composite`](super::Canvas::composite) for translucent layering).
//! Anything that falls outside the canvas is clipped.

use crate::types::Colour;

use super::Canvas;

/// A pixel coordinate. Vertices sit on pixel centres.
pub type Point = (i32, i32);

/// An inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Create a box from two corners in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Box of the given radii around a centre.
    pub fn around(centre: Point, rx: i32, ry: i32) -> Self {
        let (cx, cy) = centre;
        Self::new(
            cx.saturating_sub(rx),
            cy.saturating_sub(ry),
            cx.saturating_add(rx),
            cy.saturating_add(ry),
        )
    }

    /// Expand (or shrink, for negative `d`) every side.
    pub fn grown(self, d: i32) -> Self {
        Self::new(
            self.x0.saturating_sub(d),
            self.y0.saturating_sub(d),
            self.x1.saturating_add(d),
            self.y1.saturating_add(d),
        )
    }

    fn width(&self) -> i64 {
        self.x1 as i64 - self.x0 as i64
    }

    fn height(&self) -> i64 {
        self.y1 as i64 - self.y0 as i64
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

impl From<[i32; 4]> for Rect {
    fn from([x0, y0, x1, y1]: [i32; 4]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

/// Shape of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Closed polygon through the vertices.
    Polygon(Vec<Point>),
    /// Open polyline; each segment is drawn `width` pixels thick.
    Line { points: Vec<Point>, width: u32 },
    /// Ellipse inscribed in the box.
    Ellipse(Rect),
    /// Axis-aligned rectangle.
    Rectangle(Rect),
    /// Rectangle with quarter-circle corners.
    RoundedRectangle { bounds: Rect, radius: i32 },
}

impl Geometry {
    /// The same shape pushed outward by `d` pixels on every side.
    ///
    /// Boxes grow, lines get `2 * d` wider and polygon vertices move away
    /// from the centroid. This is what glow rings are made of.
    pub fn grown(&self, d: i32) -> Geometry {
        match self {
            Geometry::Ellipse(bounds) => Geometry::Ellipse(bounds.grown(d)),
            Geometry::Rectangle(bounds) => Geometry::Rectangle(bounds.grown(d)),
            Geometry::RoundedRectangle { bounds, radius } => Geometry::RoundedRectangle {
                bounds: bounds.grown(d),
                radius: radius.saturating_add(d).max(0),
            },
            Geometry::Line { points, width } => Geometry::Line {
                points: points.clone(),
                width: (*width as i64 + 2 * d as i64).clamp(1, u32::MAX as i64) as u32,
            },
            Geometry::Polygon(points) => Geometry::Polygon(offset_from_centroid(points, d)),
        }
    }
}

/// A drawing instruction: geometry plus paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub geometry: Geometry,
    pub fill: Option<Colour>,
    pub outline: Option<Colour>,
    pub outline_width: u32,
}

impl Primitive {
    fn of(geometry: Geometry) -> Self {
        Self {
            geometry,
            fill: None,
            outline: None,
            outline_width: 1,
        }
    }

    /// A closed polygon.
    pub fn polygon(points: impl Into<Vec<Point>>) -> Self {
        Self::of(Geometry::Polygon(points.into()))
    }

    /// A single segment. The stroke colour is set with [`Primitive::fill`].
    pub fn line(from: Point, to: Point, width: u32) -> Self {
        Self::polyline(vec![from, to], width)
    }

    /// Connected segments. The stroke colour is set with [`Primitive::fill`].
    pub fn polyline(points: impl Into<Vec<Point>>, width: u32) -> Self {
        Self::of(Geometry::Line {
            points: points.into(),
            width: width.max(1),
        })
    }

    /// An ellipse inscribed in an inclusive bounding box.
    pub fn ellipse(bounds: impl Into<Rect>) -> Self {
        Self::of(Geometry::Ellipse(bounds.into()))
    }

    /// A circle of `radius` around `centre`.
    pub fn circle(centre: Point, radius: i32) -> Self {
        Self::ellipse(Rect::around(centre, radius, radius))
    }

    /// An axis-aligned rectangle.
    pub fn rect(bounds: impl Into<Rect>) -> Self {
        Self::of(Geometry::Rectangle(bounds.into()))
    }

    /// A rectangle with rounded corners.
    pub fn rounded_rect(bounds: impl Into<Rect>, radius: i32) -> Self {
        Self::of(Geometry::RoundedRectangle {
            bounds: bounds.into(),
            radius: radius.max(0),
        })
    }

    /// Set the fill colour (the stroke colour for lines).
    pub fn fill(mut self, colour: impl Into<Colour>) -> Self {
        self.fill = Some(colour.into());
        self
    }

    /// Set the outline colour.
    pub fn outline(mut self, colour: impl Into<Colour>) -> Self {
        self.outline = Some(colour.into());
        self
    }

    /// Set the outline thickness in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.outline_width = width.max(1);
        self
    }

    /// Rasterize into `canvas`, overwriting covered pixels.
    pub fn rasterize(&self, canvas: &mut Canvas) {
        match &self.geometry {
            Geometry::Line { points, width } => {
                if let Some(colour) = self.fill {
                    stroke_polyline(canvas, points, *width, colour);
                }
            }
            Geometry::Polygon(points) => self.rasterize_polygon(canvas, points),
            Geometry::Ellipse(bounds) => {
                let inner = ellipse_test(*bounds, self.outline_width as f32);
                self.rasterize_region(canvas, *bounds, ellipse_test(*bounds, 0.0), inner);
            }
            Geometry::Rectangle(bounds) => {
                let w = self.outline_width.min(i32::MAX as u32) as i32;
                let (ix0, iy0) = (bounds.x0.saturating_add(w), bounds.y0.saturating_add(w));
                let (ix1, iy1) = (bounds.x1.saturating_sub(w), bounds.y1.saturating_sub(w));
                self.rasterize_region(
                    canvas,
                    *bounds,
                    |x, y| bounds.contains(x, y),
                    move |x, y| x >= ix0 && x <= ix1 && y >= iy0 && y <= iy1,
                );
            }
            Geometry::RoundedRectangle { bounds, radius } => {
                let w = self.outline_width.min(i32::MAX as u32) as i32;
                let hollow = bounds.width() >= 2 * w as i64 && bounds.height() >= 2 * w as i64;
                let inner = rounded_test(bounds.grown(-w), (radius - w).max(0));
                self.rasterize_region(
                    canvas,
                    *bounds,
                    rounded_test(*bounds, *radius),
                    move |x, y| hollow && inner(x, y),
                );
            }
        }
    }

    /// Fill everything `outer` covers, then paint the band between `outer`
    /// and `inner` with the outline colour.
    fn rasterize_region(
        &self,
        canvas: &mut Canvas,
        bounds: Rect,
        outer: impl Fn(i32, i32) -> bool,
        inner: impl Fn(i32, i32) -> bool,
    ) {
        let (Some((x0, x1)), Some((y0, y1))) = (
            canvas.clip_x(bounds.x0, bounds.x1),
            canvas.clip_y(bounds.y0, bounds.y1),
        ) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                if !outer(x, y) {
                    continue;
                }
                match (self.outline, self.fill) {
                    (Some(edge), _) if !inner(x, y) => canvas.put(x, y, edge),
                    (_, Some(fill)) => canvas.put(x, y, fill),
                    _ => {}
                }
            }
        }
    }

    fn rasterize_polygon(&self, canvas: &mut Canvas, points: &[Point]) {
        if points.is_empty() {
            return;
        }

        if let Some(fill) = self.fill {
            if points.len() >= 3 {
                scanline_fill(canvas, points, fill);
            }
        }

        // The boundary belongs to the shape: traced in the outline colour if
        // there is one, otherwise in the fill so thin slivers still show.
        let Some(edge) = self.outline.or(self.fill) else {
            return;
        };
        let width = if self.outline.is_some() { self.outline_width } else { 1 };
        let mut ring = points.to_vec();
        ring.push(points[0]);
        stroke_polyline(canvas, &ring, width, edge);
    }
}

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `from` on the top row, `to` on the bottom row.
    Vertical,
    /// `from` on the left column, `to` on the right column.
    Horizontal,
}

impl Canvas {
    /// Fill a box with a linear blend between two colours, overwriting.
    pub fn gradient(&mut self, bounds: impl Into<Rect>, from: Colour, to: Colour, axis: Axis) {
        let bounds = bounds.into();
        let (Some((x0, x1)), Some((y0, y1))) = (
            self.clip_x(bounds.x0, bounds.x1),
            self.clip_y(bounds.y0, bounds.y1),
        ) else {
            return;
        };

        let (start, span) = match axis {
            Axis::Vertical => (bounds.y0 as i64, bounds.height()),
            Axis::Horizontal => (bounds.x0 as i64, bounds.width()),
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let along = match axis {
                    Axis::Vertical => y,
                    Axis::Horizontal => x,
                };
                let t = if span == 0 {
                    0.0
                } else {
                    (along as i64 - start) as f32 / span as f32
                };
                self.put(x, y, from.lerp(to, t));
            }
        }
    }
}

/// Even-odd scanline fill sampled at pixel centres.
fn scanline_fill(canvas: &mut Canvas, points: &[Point], colour: Colour) {
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(-1);
    let Some((y0, y1)) = canvas.clip_y(min_y, max_y) else {
        return;
    };

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for y in y0..=y1 {
        crossings.clear();
        let scan = y as f32;

        for i in 0..points.len() {
            let (xa, ya) = points[i];
            let (xb, yb) = points[(i + 1) % points.len()];
            // half-open rule: each vertex counts for exactly one edge
            if (ya as f32 > scan) != (yb as f32 > scan) {
                let t = (scan - ya as f32) / (yb as i64 - ya as i64) as f32;
                crossings.push(xa as f32 + t * (xb as i64 - xa as i64) as f32);
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = pair[0].ceil() as i32;
            let end = pair[1].floor() as i32;
            if let Some((x0, x1)) = canvas.clip_x(start, end) {
                for x in x0..=x1 {
                    canvas.put(x, y, colour);
                }
            }
        }
    }
}

fn stroke_polyline(canvas: &mut Canvas, points: &[Point], width: u32, colour: Colour) {
    match points {
        [] => {}
        [only] => stroke_segment(canvas, *only, *only, width, colour),
        _ => {
            for pair in points.windows(2) {
                stroke_segment(canvas, pair[0], pair[1], width, colour);
            }
        }
    }
}

/// One segment: Bresenham for hairlines, a flat-capped band otherwise.
fn stroke_segment(canvas: &mut Canvas, from: Point, to: Point, width: u32, colour: Colour) {
    if width <= 1 {
        bresenham(canvas, from, to, colour);
        return;
    }

    let half = width as f64 / 2.0;
    let reach = half.ceil() + 1.0;

    // Trim to the canvas plus a margin wider than the band, so the caps of
    // a trimmed segment never land on the canvas.
    let lo = (-reach, -reach);
    let hi = (canvas.width() as f64 - 1.0 + reach, canvas.height() as f64 - 1.0 + reach);
    let Some(((x0, y0), (x1, y1))) = clip_segment(to_f64(from), to_f64(to), lo, hi) else {
        return;
    };

    let (dx, dy) = (x1 - x0, y1 - y0);
    let length = (dx * dx + dy * dy).sqrt();

    // A zero-length segment is a square dot.
    let (ux, uy) = if length > f64::EPSILON {
        (dx / length, dy / length)
    } else {
        (1.0, 0.0)
    };

    let (left, right) = ((x0.min(x1) - reach) as i32, (x0.max(x1) + reach) as i32);
    let (top, bottom) = ((y0.min(y1) - reach) as i32, (y0.max(y1) + reach) as i32);
    let (Some((cx0, cx1)), Some((cy0, cy1))) =
        (canvas.clip_x(left, right), canvas.clip_y(top, bottom))
    else {
        return;
    };

    const EPS: f64 = 1e-3;
    for y in cy0..=cy1 {
        for x in cx0..=cx1 {
            let (px, py) = (x as f64 - x0, y as f64 - y0);
            let along = px * ux + py * uy;
            let across = -px * uy + py * ux;
            let on_axis = if length > f64::EPSILON {
                along >= -EPS && along <= length + EPS
            } else {
                along >= -half - EPS && along < half - EPS
            };
            if on_axis && across >= -half - EPS && across < half - EPS {
                canvas.put(x, y, colour);
            }
        }
    }
}

fn bresenham(canvas: &mut Canvas, from: Point, to: Point, colour: Colour) {
    let inside = |(x, y): Point| canvas.get(x, y).is_some();
    let (from, to) = if inside(from) && inside(to) {
        (from, to)
    } else {
        let hi = (canvas.width() as f64 - 1.0, canvas.height() as f64 - 1.0);
        let Some((a, b)) = clip_segment(to_f64(from), to_f64(to), (0.0, 0.0), hi) else {
            return;
        };
        let round = |(x, y): (f64, f64)| (x.round() as i32, y.round() as i32);
        (round(a), round(b))
    };

    let (mut x, mut y) = from;
    let (x1, y1) = to;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.put(x, y, colour);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn to_f64((x, y): Point) -> (f64, f64) {
    (x as f64, y as f64)
}

/// Liang-Barsky: the part of a segment inside the box `lo..=hi`, or `None`
/// if it misses the box entirely.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    lo: (f64, f64),
    hi: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (x0, y0) = from;
    let (dx, dy) = (to.0 - x0, to.1 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [(-dx, x0 - lo.0), (dx, hi.0 - x0), (-dy, y0 - lo.1), (dy, hi.1 - y0)] {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| (x0 + t * dx, y0 + t * dy);
    Some((at(t0), at(t1)))
}

/// Inside test for the ellipse inscribed in `bounds`, shrunk by `inset`.
///
/// Radii are measured to the outer edge of the boundary pixels, so a box
/// `[cx - r, cx + r]` gives a disc exactly `2r + 1` pixels across.
fn ellipse_test(bounds: Rect, inset: f32) -> impl Fn(i32, i32) -> bool {
    let cx = (bounds.x0 as i64 + bounds.x1 as i64) as f32 / 2.0;
    let cy = (bounds.y0 as i64 + bounds.y1 as i64) as f32 / 2.0;
    let rx = bounds.width() as f32 / 2.0 + 0.5 - inset;
    let ry = bounds.height() as f32 / 2.0 + 0.5 - inset;

    move |x, y| {
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (x as f32 - cx) / rx;
        let ny = (y as f32 - cy) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

fn rounded_test(bounds: Rect, radius: i32) -> impl Fn(i32, i32) -> bool {
    let max_radius = (bounds.width().min(bounds.height()) / 2).clamp(0, i32::MAX as i64) as i32;
    let r = radius.min(max_radius);
    let limit = (r as f32 + 0.5) * (r as f32 + 0.5);

    move |x, y| {
        if !bounds.contains(x, y) {
            return false;
        }
        let (left, right) = (bounds.x0.saturating_add(r), bounds.x1.saturating_sub(r));
        let (top, bottom) = (bounds.y0.saturating_add(r), bounds.y1.saturating_sub(r));
        let corner_x = if x < left {
            left
        } else if x > right {
            right
        } else {
            return true;
        };
        let corner_y = if y < top {
            top
        } else if y > bottom {
            bottom
        } else {
            return true;
        };
        let dx = (x as i64 - corner_x as i64) as f32;
        let dy = (y as i64 - corner_y as i64) as f32;
        dx * dx + dy * dy <= limit
    }
}

fn offset_from_centroid(points: &[Point], d: i32) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len() as f32;
    let cx = points.iter().map(|p| p.0 as f32).sum::<f32>() / n;
    let cy = points.iter().map(|p| p.1 as f32).sum::<f32>() / n;

    points
        .iter()
        .map(|&(x, y)| {
            let (vx, vy) = (x as f32 - cx, y as f32 - cy);
            let len = (vx * vx + vy * vy).sqrt();
            if len <= f32::EPSILON {
                return (x, y);
            }
            let scale = d as f32 / len;
            (
                (x as f32 + vx * scale).round() as i32,
                (y as f32 + vy * scale).round() as i32,
            )
        })
        .collect()
}
