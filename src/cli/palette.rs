use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::sprites::Style;

/// Print palette tokens, with strike.yaml overrides applied
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Only print one style's palette (default: both)
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Config file to use instead of ./strike.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let config = ProjectConfig::discover(args.config.as_deref(), Path::new("."))?;
    let styles = match args.style {
        Some(style) => vec![style],
        None => Style::ALL.to_vec(),
    };

    for style in styles {
        let palette = config.palette_for(style)?;
        printer.success(
            "Palette",
            &format!("{} ({}, {})", palette.name, style, plural(palette.len(), "token", "tokens")),
        );

        // Token lines go to stdout as-is so they can be piped
        for (name, colour) in palette.tokens() {
            println!("${}: {}", name, colour);
        }
    }

    Ok(())
}
