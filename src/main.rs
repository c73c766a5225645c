use clap::Parser;
use miette::Result;
use strike_assets::cli::{self, Cli, Commands};
use strike_assets::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None => cli::generate::run(Default::default(), &printer)?,
        Some(Commands::Generate(args)) => cli::generate::run(args, &printer)?,
        Some(Commands::List(args)) => cli::list::run(args, &printer)?,
        Some(Commands::Palette(args)) => cli::palette::run(args, &printer)?,
        Some(Commands::Verify(args)) => cli::verify::run(args, &printer)?,
        Some(Commands::Completions(args)) => cli::completions::run(args)?,
    }

    Ok(())
}
