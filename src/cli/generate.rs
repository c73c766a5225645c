//! Generate command implementation.
//!
//! Merges strike.yaml with the command-line flags and runs the driver.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::ProjectConfig;
use crate::driver;
use crate::error::Result;
use crate::output::Printer;
use crate::sprites::Style;

/// Render the sprite catalogs and export every scale
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Only generate one style (default: both)
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Directory the style roots are created in
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Stop at the first sprite that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Render on N worker threads
    #[arg(long, short)]
    pub jobs: Option<usize>,

    /// Write assets.json into each style root
    #[arg(long)]
    pub manifest: bool,

    /// Only print the summary and errors
    #[arg(long, short)]
    pub quiet: bool,

    /// Config file to use instead of ./strike.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Load the project config and apply these flags on top.
    pub fn resolve(&self, dir: &Path) -> Result<ProjectConfig> {
        let mut config = ProjectConfig::discover(self.config.as_deref(), dir)?;

        if let Some(style) = self.style {
            config.style = Some(style);
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(jobs) = self.jobs {
            config.jobs = Some(jobs);
        }
        config.fail_fast |= self.fail_fast;
        config.manifest |= self.manifest;

        Ok(config)
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let config = args.resolve(Path::new("."))?;
    let printer = printer.clone().quiet(args.quiet);

    driver::generate(&config, &printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "output: art\nstyle: side\njobs: 2\n",
        )
        .unwrap();

        let args = GenerateArgs {
            style: Some(Style::TopDown),
            fail_fast: true,
            ..Default::default()
        };
        let config = args.resolve(dir.path()).unwrap();

        assert_eq!(config.style, Some(Style::TopDown));
        assert_eq!(config.output, PathBuf::from("art"));
        assert_eq!(config.jobs, Some(2));
        assert!(config.fail_fast);
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateArgs::default().resolve(dir.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }
}
