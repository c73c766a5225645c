//! Verify command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::sprites::Style;
use crate::verify::{print_report, verify_catalog, verify_tree};

/// Check a generated tree for missing or mis-sized scale files
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Output directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Also check that every entry of this style's catalog was generated
    #[arg(long, value_enum)]
    pub style: Option<Style>,
}

pub fn run(args: VerifyArgs, printer: &Printer) -> Result<()> {
    printer.status("Verifying", &display_path(&args.path));

    let mut report = verify_tree(&args.path)?;
    if let Some(style) = args.style {
        report.merge(verify_catalog(&args.path.join(style.dir_name()), style));
    }

    print_report(&report, printer);

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 {
        return Err(AssetError::Build {
            message: format!(
                "Verification failed: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: Some("Re-run `strike-assets generate` to rebuild the tree".to_string()),
        });
    }

    if warnings > 0 {
        printer.warning(
            "Verified",
            &format!(
                "{} ({})",
                plural(report.sprites, "sprite", "sprites"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else {
        printer.success("Verified", &plural(report.sprites, "sprite", "sprites"));
    }

    Ok(())
}
