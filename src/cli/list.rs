//! List command implementation.
//!
//! Prints each catalog grouped by category, without rendering anything.

use clap::Args;

use crate::catalog::{catalog, Entry};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::sprites::Style;

/// List catalog entries without rendering
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one style (default: both)
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Show base size and state next to each name
    #[arg(long)]
    pub long: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let styles = match args.style {
        Some(style) => vec![style],
        None => Style::ALL.to_vec(),
    };

    for style in styles {
        let entries = catalog(style);
        printer.success(
            "Catalog",
            &format!(
                "{} ({}, {})",
                style,
                style.dir_name(),
                plural(entries.len(), "sprite", "sprites")
            ),
        );
        for (category, group) in group_by_category(&entries) {
            let names: Vec<String> = group
                .iter()
                .map(|e| if args.long { describe(e) } else { e.name.clone() })
                .collect();
            println!("  {}: {}", category, names.join(", "));
        }
    }

    Ok(())
}

fn describe(entry: &Entry) -> String {
    format!("{} {}x{} {}", entry.name, entry.size.0, entry.size.1, entry.state)
}

/// Categories in first-seen order with their entries.
fn group_by_category(entries: &[Entry]) -> Vec<(&'static str, Vec<&Entry>)> {
    let mut groups: Vec<(&'static str, Vec<&Entry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, group)) => group.push(entry),
            None => groups.push((entry.category, vec![entry])),
        }
    }
    groups
}
