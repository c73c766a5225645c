//! Project configuration (strike.yaml) parsing.
//!
//! Every field is optional. Command-line flags take precedence over
//! whatever the file sets.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};
use crate::sprites::Style;
use crate::types::Palette;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "strike.yaml";

/// Project configuration loaded from strike.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory the style roots are created in.
    pub output: PathBuf,

    /// Only generate this style (both when unset).
    pub style: Option<Style>,

    /// Stop at the first failing entry.
    pub fail_fast: bool,

    /// Worker threads; sequential when unset or 1.
    pub jobs: Option<usize>,

    /// Write `assets.json` into each style root.
    pub manifest: bool,

    /// Token overrides per style.
    pub palette: PaletteOverrides,
}

/// Hex overrides keyed by token name, one map per style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    #[serde(alias = "side-view", alias = "side_view")]
    pub side: BTreeMap<String, String>,
    #[serde(alias = "top-down")]
    pub top_down: BTreeMap<String, String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            style: None,
            fail_fast: false,
            jobs: None,
            manifest: false,
            palette: PaletteOverrides::default(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from a strike.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `explicit` if given, else `strike.yaml` in `dir` if it exists,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AssetError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// Styles to generate, in catalog order.
    pub fn styles(&self) -> Vec<Style> {
        match self.style {
            Some(style) => vec![style],
            None => Style::ALL.to_vec(),
        }
    }

    /// Build the palette for `style` with this project's overrides applied.
    pub fn palette_for(&self, style: Style) -> Result<Palette> {
        let overrides = match style {
            Style::SideView => &self.palette.side,
            Style::TopDown => &self.palette.top_down,
        };
        let mut builder = style.palette();
        builder.override_all(overrides)?;
        Ok(builder.build())
    }

    /// Effective worker count (at least 1).
    pub fn effective_jobs(&self) -> usize {
        self.jobs.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config = ProjectConfig::parse("output: build").unwrap();

        assert_eq!(config.output, PathBuf::from("build"));
        assert!(config.style.is_none());
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
output: dist/art
style: top-down
fail_fast: true
jobs: 4
manifest: true
palette:
  top_down:
    cyan: "#00E0FF"
"##;
        let config = ProjectConfig::parse(yaml).unwrap();

        assert_eq!(config.output, PathBuf::from("dist/art"));
        assert_eq!(config.style, Some(Style::TopDown));
        assert!(config.fail_fast);
        assert_eq!(config.effective_jobs(), 4);
        assert!(config.manifest);
        assert_eq!(config.palette.top_down.get("cyan").map(String::as_str), Some("#00E0FF"));
        assert_eq!(config.styles(), vec![Style::TopDown]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.styles(), Style::ALL.to_vec());
        assert_eq!(config.effective_jobs(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ProjectConfig::parse("outptu: build");
        assert!(matches!(result, Err(AssetError::Parse { .. })));
    }

    #[test]
    fn test_palette_override_applied() {
        let yaml = "palette:\n  side:\n    neon_pink: \"#FF00AA\"\n";
        let config = ProjectConfig::parse(yaml).unwrap();
        let palette = config.palette_for(Style::SideView).unwrap();
        assert_eq!(palette.get("neon_pink"), Some(Colour::rgb(0xFF, 0x00, 0xAA)));

        // the other style is untouched
        let overhead = config.palette_for(Style::TopDown).unwrap();
        assert_eq!(overhead, Palette::overhead());
    }

    #[test]
    fn test_palette_override_unknown_token() {
        let yaml = "palette:\n  top_down:\n    neon_pink: \"#FF00AA\"\n";
        let config = ProjectConfig::parse(yaml).unwrap();
        assert!(matches!(
            config.palette_for(Style::TopDown),
            Err(AssetError::Parse { .. })
        ));
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());

        std::fs::write(dir.path().join(CONFIG_FILE), "jobs: 2\n").unwrap();
        let config = ProjectConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.jobs, Some(2));
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = ProjectConfig::load(Path::new("/nonexistent/strike.yaml")).unwrap_err();
        match err {
            AssetError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/strike.yaml"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
