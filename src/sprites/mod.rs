//! Sprite builders.
//!
//! A builder turns `(style, sprite, state, size)` into a finished canvas,
//! reading only the palette. The two styles live in their own modules and
//! share the dispatch below.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};
use crate::render::Canvas;
use crate::types::{Palette, PaletteBuilder};

/// Declare a struct of resolved palette colours, one field per token.
macro_rules! palette_tones {
    ($($token:ident),* $(,)?) => {
        #[derive(Debug, Clone, Copy)]
        struct Tones {
            $($token: crate::types::Colour,)*
        }

        impl Tones {
            fn resolve(palette: &crate::types::Palette) -> crate::error::Result<Self> {
                Ok(Self {
                    $($token: palette.colour(stringify!($token))?,)*
                })
            }
        }
    };
}

mod kinds;
mod side_view;
mod top_down;

pub use kinds::{
    Airframe, BuildingKind, CarModel, Depth, Icon, Magnitude, Projectile, RoadKind, RooftopKind,
    SkyKind, Sprite, TankClass, Weapon, Weather, Widget,
};

/// Camera treatment of a catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Side-on cyberpunk look with neon accents.
    #[value(name = "side", alias = "side-view")]
    #[serde(rename = "side", alias = "side-view")]
    SideView,
    /// Strict 90 degree overhead view.
    TopDown,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::SideView, Style::TopDown];

    /// Root directory of this style's catalog.
    pub fn dir_name(self) -> &'static str {
        match self {
            Style::SideView => "Assets",
            Style::TopDown => "Assets_TopDown",
        }
    }

    /// Palette builder seeded with this style's tokens.
    pub fn palette(self) -> PaletteBuilder {
        match self {
            Style::SideView => PaletteBuilder::cyberpunk(),
            Style::TopDown => PaletteBuilder::overhead(),
        }
    }

    /// Name as written on the command line and in `strike.yaml`.
    pub fn label(self) -> &'static str {
        match self {
            Style::SideView => "side",
            Style::TopDown => "top-down",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual state of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Idle,
    BankLeft,
    BankRight,
    Damaged,
    Hover,
    /// Animation frame, counted from zero.
    Frame(u32),
}

impl State {
    pub fn slug(&self) -> String {
        match self {
            State::Idle => "idle".to_string(),
            State::BankLeft => "bank_left".to_string(),
            State::BankRight => "bank_right".to_string(),
            State::Damaged => "damaged".to_string(),
            State::Hover => "hover".to_string(),
            State::Frame(n) => format!("frame_{}", n),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// Draw one sprite state onto a fresh canvas of `size`.
pub fn build(
    style: Style,
    sprite: Sprite,
    state: State,
    size: (u32, u32),
    palette: &Palette,
) -> Result<Canvas> {
    match style {
        Style::SideView => side_view::build(sprite, state, size, palette),
        Style::TopDown => top_down::build(sprite, state, size, palette),
    }
}

fn unsupported_state(sprite: Sprite, state: State) -> AssetError {
    AssetError::UnsupportedState {
        builder: sprite.name(),
        state: state.slug(),
    }
}

fn unsupported_style(sprite: Sprite, style: Style) -> AssetError {
    AssetError::UnsupportedStyle {
        builder: sprite.name(),
        style: style.label().to_string(),
    }
}

/// Reject every state but `Idle`.
fn idle_only(sprite: Sprite, state: State) -> Result<()> {
    match state {
        State::Idle => Ok(()),
        other => Err(unsupported_state(sprite, other)),
    }
}

/// Frame index of an animated sprite with `frames` frames.
fn frame_of(sprite: Sprite, state: State, frames: u32) -> Result<u32> {
    match state {
        State::Frame(n) if n < frames => Ok(n),
        other => Err(unsupported_state(sprite, other)),
    }
}

/// Integer centre of a canvas size.
fn centre(size: (u32, u32)) -> (i32, i32) {
    (size.0 as i32 / 2, size.1 as i32 / 2)
}

/// Point at `radius` from `origin` along `degrees` (0 = east, clockwise).
fn polar(origin: (i32, i32), degrees: f32, radius: f32) -> (i32, i32) {
    let rad = degrees.to_radians();
    (
        (origin.0 as f32 + rad.cos() * radius).round() as i32,
        (origin.1 as f32 + rad.sin() * radius).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_roots_and_palettes() {
        assert_eq!(Style::SideView.dir_name(), "Assets");
        assert_eq!(Style::TopDown.dir_name(), "Assets_TopDown");
        assert_eq!(Style::SideView.palette().build().name, "cyberpunk");
        assert_eq!(Style::TopDown.palette().build().name, "overhead");
    }

    #[test]
    fn test_style_yaml_names() {
        let style: Style = serde_yaml::from_str("top-down").unwrap();
        assert_eq!(style, Style::TopDown);
        let style: Style = serde_yaml::from_str("side-view").unwrap();
        assert_eq!(style, Style::SideView);
        assert!(serde_yaml::from_str::<Style>("isometric").is_err());
    }

    #[test]
    fn test_state_slugs() {
        assert_eq!(State::BankLeft.slug(), "bank_left");
        assert_eq!(State::Frame(3).to_string(), "frame_3");
    }

    #[test]
    fn test_unsupported_state_names_builder() {
        let palette = Palette::overhead();
        let err = build(
            Style::TopDown,
            Sprite::Turret,
            State::Damaged,
            (48, 48),
            &palette,
        )
        .unwrap_err();
        match err {
            AssetError::UnsupportedState { builder, state } => {
                assert_eq!(builder, "turret");
                assert_eq!(state, "damaged");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_frame_out_of_range_rejected() {
        let palette = Palette::cyberpunk();
        let result = build(
            Style::SideView,
            Sprite::Explosion(Magnitude::Small),
            State::Frame(4),
            (32, 32),
            &palette,
        );
        assert!(matches!(result, Err(AssetError::UnsupportedState { .. })));
    }

    #[test]
    fn test_unsupported_style_names_builder() {
        let palette = Palette::overhead();
        let err = build(Style::TopDown, Sprite::Slum, State::Idle, (64, 64), &palette).unwrap_err();
        match err {
            AssetError::UnsupportedStyle { builder, style } => {
                assert_eq!(builder, "slum");
                assert_eq!(style, "top-down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_palette_is_reported() {
        // side-view tokens do not exist in the overhead palette
        let palette = Palette::overhead();
        let result = build(
            Style::SideView,
            Sprite::Drone,
            State::Idle,
            (24, 24),
            &palette,
        );
        assert!(matches!(result, Err(AssetError::UnknownColour { .. })));
    }

    #[test]
    fn test_build_returns_requested_size() {
        let palette = Palette::cyberpunk();
        let canvas = build(
            Style::SideView,
            Sprite::Sky(SkyKind::Dusk),
            State::Idle,
            (64, 256),
            &palette,
        )
        .unwrap();
        assert_eq!(canvas.size(), (64, 256));
    }

    #[test]
    fn test_polar_cardinal_points() {
        assert_eq!(polar((10, 10), 0.0, 5.0), (15, 10));
        assert_eq!(polar((10, 10), 90.0, 5.0), (10, 15));
        assert_eq!(polar((10, 10), 180.0, 5.0), (5, 10));
    }
}
