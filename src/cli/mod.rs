pub mod completions;
pub mod generate;
pub mod list;
pub mod palette;
pub mod verify;

use clap::{Parser, Subcommand};

/// strike-assets - Procedural sprite generator for Cyber Strike
///
/// Run without a subcommand to generate both catalogs into the current
/// directory.
#[derive(Parser, Debug)]
#[command(name = "strike-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sprite catalogs and export every scale
    Generate(generate::GenerateArgs),

    /// List catalog entries without rendering
    List(list::ListArgs),

    /// Print palette tokens
    Palette(palette::PaletteArgs),

    /// Check a generated tree for missing or mis-sized scale files
    Verify(verify::VerifyArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::Style;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["strike-assets"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "strike-assets",
            "generate",
            "--style",
            "top-down",
            "--jobs",
            "4",
            "--fail-fast",
            "--manifest",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.style, Some(Style::TopDown));
                assert_eq!(args.jobs, Some(4));
                assert!(args.fail_fast);
                assert!(args.manifest);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_side_view_alias() {
        let cli = Cli::try_parse_from(["strike-assets", "list", "--style", "side-view"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => assert_eq!(args.style, Some(Style::SideView)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
