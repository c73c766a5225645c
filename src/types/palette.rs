//! Palette type for named colour tokens.
//!
//! A palette is assembled once by a [`PaletteBuilder`] (builtin tokens plus
//! any overrides from `strike.yaml`) and is read-only afterwards. Sprite
//! builders share it by reference, including across worker threads.

use std::collections::{BTreeMap, HashMap};

use crate::error::{AssetError, Result};

use super::Colour;

/// Tokens of the side-view cyberpunk theme.
const CYBERPUNK: &[(&str, Colour)] = &[
    ("bg_dark", Colour::rgb(10, 12, 20)),
    ("bg_mid", Colour::rgb(20, 25, 40)),
    ("bg_light", Colour::rgb(30, 40, 60)),
    ("neon_cyan", Colour::rgb(0, 255, 255)),
    ("neon_pink", Colour::rgb(255, 0, 128)),
    ("neon_purple", Colour::rgb(180, 0, 255)),
    ("neon_green", Colour::rgb(0, 255, 128)),
    ("neon_red", Colour::rgb(255, 50, 50)),
    ("neon_yellow", Colour::rgb(255, 220, 0)),
    ("metal_dark", Colour::rgb(40, 45, 55)),
    ("metal_mid", Colour::rgb(70, 75, 85)),
    ("metal_light", Colour::rgb(120, 125, 135)),
    ("glass", Colour::new(150, 200, 255, 180)),
    ("black", Colour::BLACK),
    ("white", Colour::WHITE),
];

/// Tokens of the overhead (top-down) theme.
const OVERHEAD: &[(&str, Colour)] = &[
    ("bg", Colour::rgb(15, 15, 25)),
    ("bg_light", Colour::rgb(25, 25, 40)),
    ("cyan", Colour::rgb(0, 255, 255)),
    ("cyan_dark", Colour::rgb(0, 180, 200)),
    ("pink", Colour::rgb(255, 0, 128)),
    ("pink_dark", Colour::rgb(200, 0, 100)),
    ("purple", Colour::rgb(180, 0, 255)),
    ("purple_dark", Colour::rgb(120, 0, 180)),
    ("green", Colour::rgb(0, 255, 100)),
    ("yellow", Colour::rgb(255, 220, 0)),
    ("orange", Colour::rgb(255, 140, 0)),
    ("red", Colour::rgb(255, 50, 50)),
    ("red_dark", Colour::rgb(180, 30, 30)),
    ("white", Colour::WHITE),
    ("gray", Colour::rgb(120, 120, 130)),
    ("gray_dark", Colour::rgb(60, 60, 70)),
    ("gray_light", Colour::rgb(180, 180, 190)),
    ("building", Colour::rgb(40, 45, 60)),
    ("building_dark", Colour::rgb(25, 30, 45)),
    ("window", Colour::rgb(100, 220, 255)),
    ("window_dark", Colour::rgb(40, 50, 70)),
    ("metal", Colour::rgb(80, 85, 95)),
    ("metal_dark", Colour::rgb(50, 55, 65)),
];

/// A collection of named colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Palette name
    pub name: String,

    /// Token name -> resolved colour
    colours: HashMap<String, Colour>,
}

impl Palette {
    /// The side-view cyberpunk palette with no overrides.
    pub fn cyberpunk() -> Self {
        PaletteBuilder::cyberpunk().build()
    }

    /// The top-down palette with no overrides.
    pub fn overhead() -> Self {
        PaletteBuilder::overhead().build()
    }

    /// Get a colour by token name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.colours.get(name).copied()
    }

    /// Resolve a token, failing with the token and palette names.
    pub fn colour(&self, name: &str) -> Result<Colour> {
        self.get(name).ok_or_else(|| AssetError::UnknownColour {
            token: name.to_string(),
            palette: self.name.clone(),
        })
    }

    /// All tokens sorted by name.
    pub fn tokens(&self) -> Vec<(&str, Colour)> {
        let sorted: BTreeMap<&str, Colour> = self
            .colours
            .iter()
            .map(|(name, colour)| (name.as_str(), *colour))
            .collect();
        sorted.into_iter().collect()
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

/// Builder for a palette: builtin tokens first, then overrides.
#[derive(Debug)]
pub struct PaletteBuilder {
    name: String,
    colours: HashMap<String, Colour>,
}

impl PaletteBuilder {
    /// Create an empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colours: HashMap::new(),
        }
    }

    /// Builder seeded with the side-view tokens.
    pub fn cyberpunk() -> Self {
        Self::seeded("cyberpunk", CYBERPUNK)
    }

    /// Builder seeded with the top-down tokens.
    pub fn overhead() -> Self {
        Self::seeded("overhead", OVERHEAD)
    }

    fn seeded(name: &str, tokens: &[(&str, Colour)]) -> Self {
        let mut builder = Self::new(name);
        for (token, colour) in tokens {
            builder.define(*token, *colour);
        }
        builder
    }

    /// Define (or redefine) a token.
    pub fn define(&mut self, name: impl Into<String>, colour: Colour) {
        self.colours.insert(name.into(), colour);
    }

    /// Override an existing token from a hex string.
    ///
    /// Overrides may only retheme tokens the builders already use; a name
    /// that is not defined is rejected rather than silently ignored.
    pub fn override_hex(&mut self, name: &str, hex: &str) -> Result<()> {
        let name = name.strip_prefix('$').unwrap_or(name);
        if !self.colours.contains_key(name) {
            return Err(AssetError::Parse {
                message: format!(
                    "Cannot override unknown token `{}` in palette `{}`",
                    name, self.name
                ),
                help: Some("Run `strike-assets palette` to list the available tokens".to_string()),
            });
        }
        let colour = Colour::from_hex(hex)?;
        self.colours.insert(name.to_string(), colour);
        Ok(())
    }

    /// Apply every override in a token -> hex map.
    pub fn override_all<'a>(
        &mut self,
        overrides: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<()> {
        for (name, hex) in overrides {
            self.override_hex(name, hex)?;
        }
        Ok(())
    }

    /// Freeze the palette.
    pub fn build(self) -> Palette {
        Palette {
            name: self.name,
            colours: self.colours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyberpunk_tokens() {
        let palette = Palette::cyberpunk();
        assert_eq!(palette.name, "cyberpunk");
        assert_eq!(palette.get("neon_cyan"), Some(Colour::rgb(0, 255, 255)));
        assert_eq!(palette.get("glass"), Some(Colour::new(150, 200, 255, 180)));
        assert_eq!(palette.len(), CYBERPUNK.len());
    }

    #[test]
    fn test_overhead_tokens() {
        let palette = Palette::overhead();
        assert_eq!(palette.get("gray_dark"), Some(Colour::rgb(60, 60, 70)));
        assert_eq!(palette.get("$orange"), Some(Colour::rgb(255, 140, 0)));
        assert!(palette.get("neon_cyan").is_none());
    }

    #[test]
    fn test_colour_unknown_token_names_palette() {
        let palette = Palette::overhead();
        let err = palette.colour("chrome").unwrap_err();
        match err {
            AssetError::UnknownColour { token, palette } => {
                assert_eq!(token, "chrome");
                assert_eq!(palette, "overhead");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_tokens_sorted() {
        let palette = Palette::cyberpunk();
        let names: Vec<&str> = palette.tokens().into_iter().map(|(n, _)| n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"bg_dark"));
    }

    #[test]
    fn test_override_existing_token() {
        let mut builder = PaletteBuilder::overhead();
        builder.override_hex("cyan", "#00E0FF").unwrap();
        let palette = builder.build();
        assert_eq!(palette.get("cyan"), Some(Colour::rgb(0, 0xE0, 0xFF)));
        // untouched tokens keep their builtin value
        assert_eq!(palette.get("pink"), Some(Colour::rgb(255, 0, 128)));
    }

    #[test]
    fn test_override_unknown_token_rejected() {
        let mut builder = PaletteBuilder::cyberpunk();
        assert!(builder.override_hex("chartreuse", "#7FFF00").is_err());
    }

    #[test]
    fn test_override_bad_hex_rejected() {
        let mut builder = PaletteBuilder::cyberpunk();
        assert!(builder.override_hex("neon_pink", "#XYZ").is_err());
    }
}
