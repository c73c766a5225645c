//! Rendering for strike-assets.
//!
//! Canvases, the primitives drawn onto them, overlay compositing, glows and
//! the three-scale PNG export.

mod canvas;
mod composite;
mod draw;
mod export;
mod glow;

pub use canvas::Canvas;
pub use composite::alpha_over;
pub use draw::{Axis, Geometry, Point, Primitive, Rect};
pub use export::{export_scaled, write_png, ScaleVariant};
pub use glow::{ring_alpha, Glow};
