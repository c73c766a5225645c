//! strike-assets - Procedural sprite generator
//!
//! Draws the Cyber Strike sprite catalogs from vector primitives over a
//! themed palette and exports every sprite at 1x, 2x and 3x.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;
pub mod verify;

pub use catalog::{catalog, check_unique, Entry};
pub use config::ProjectConfig;
pub use driver::{generate, generate_entry, generate_style, RunOptions, StyleReport};
pub use error::{AssetError, Result};
pub use render::{
    alpha_over, export_scaled, ring_alpha, write_png, Axis, Canvas, Geometry, Glow, Point,
    Primitive, Rect, ScaleVariant,
};
pub use sprites::{build, Sprite, State, Style};
pub use types::{Colour, Palette, PaletteBuilder};
pub use verify::{verify_catalog, verify_tree, Diagnostic, Severity, VerifyReport};
