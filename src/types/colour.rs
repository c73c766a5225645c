//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{AssetError, Result};

/// An RGBA colour value with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut nibbles = [0u8; 4];
                nibbles[3] = 0xF;
                for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = nibbles.map(|n| n << 4 | n);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Linear blend of every channel (0.0 = self, 1.0 = other).
    pub fn lerp(self, other: Colour, t: f32) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;

        Colour::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Darken by a percentage of the remaining lightness (HSL).
    pub fn darken(self, percent: f32) -> Colour {
        adjust_lightness(self, -percent.abs())
    }

    /// Lighten by a percentage of the remaining lightness (HSL).
    pub fn lighten(self, percent: f32) -> Colour {
        adjust_lightness(self, percent.abs())
    }
}

impl FromStr for Colour {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    use palette::{Hsl, IntoColor, Srgb};

    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::new(
        (rgb_out.red * 255.0).round() as u8,
        (rgb_out.green * 255.0).round() as u8,
        (rgb_out.blue * 255.0).round() as u8,
        colour.a,
    )
}

fn invalid_hex(s: &str) -> AssetError {
    AssetError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| AssetError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AssetError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
