//! Core domain types for strike-assets.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - Immutable named colour tokens

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{Palette, PaletteBuilder};
