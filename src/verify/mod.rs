//! Checks over a generated output tree.
//!
//! Every `name.png` must sit next to `name@2x.png` and `name@3x.png` at
//! exactly two and three times its size. Used by `strike-assets verify`.

mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, VerifyReport};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::catalog;
use crate::error::{AssetError, Result};
use crate::render::ScaleVariant;
use crate::sprites::Style;

const MISSING_VARIANT: &str = "strike::verify::missing-variant";
const ORPHAN_VARIANT: &str = "strike::verify::orphan-variant";
const WRONG_SIZE: &str = "strike::verify::wrong-size";
const UNREADABLE: &str = "strike::verify::unreadable";
const STALE_TEMP: &str = "strike::verify::stale-temp";
const MISSING_ENTRY: &str = "strike::verify::missing-entry";

/// Scale files found for one base path, indexed by variant.
type VariantFiles = [Option<PathBuf>; 3];

/// Walk `root` and check every sprite's scale set.
pub fn verify_tree(root: &Path) -> Result<VerifyReport> {
    if !root.is_dir() {
        return Err(AssetError::Io {
            path: root.to_path_buf(),
            message: "Not a directory".to_string(),
        });
    }

    let mut report = VerifyReport::new();
    let mut sprites: BTreeMap<PathBuf, VariantFiles> = BTreeMap::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".png.tmp") {
            report.push(
                Diagnostic::warning(
                    STALE_TEMP,
                    path,
                    "Leftover temporary file from an interrupted export",
                )
                .with_help("Delete it and re-run `strike-assets generate`"),
            );
            continue;
        }
        if let Some((base, variant)) = split_variant(path) {
            let slot = variant_index(variant);
            sprites.entry(base).or_default()[slot] = Some(path.to_path_buf());
        }
    }

    for files in sprites.values() {
        check_sprite(files, &mut report);
    }

    Ok(report)
}

/// Check that every entry of `style`'s catalog exists under `style_root`
/// at its declared base size.
pub fn verify_catalog(style_root: &Path, style: Style) -> VerifyReport {
    let mut report = VerifyReport::new();

    for entry in catalog(style) {
        let path = ScaleVariant::X1.path_for(&style_root.join(entry.base_path()));
        if !path.is_file() {
            report.push(
                Diagnostic::error(
                    MISSING_ENTRY,
                    &path,
                    format!("{} sprite `{}` was not generated", style, entry.name),
                )
                .with_help(format!("Run `strike-assets generate --style {}`", style.label())),
            );
            continue;
        }
        match image::image_dimensions(&path) {
            Ok(size) if size == entry.size => {}
            Ok((w, h)) => report.push(Diagnostic::error(
                WRONG_SIZE,
                &path,
                format!("Expected {}x{}, found {}x{}", entry.size.0, entry.size.1, w, h),
            )),
            Err(e) => report.push(Diagnostic::error(UNREADABLE, &path, e.to_string())),
        }
    }

    report
}

fn check_sprite(files: &VariantFiles, report: &mut VerifyReport) {
    let Some(base) = &files[0] else {
        for path in files.iter().flatten() {
            report.push(Diagnostic::error(
                ORPHAN_VARIANT,
                path,
                "Scaled variant has no 1x base image",
            ));
        }
        return;
    };

    let (width, height) = match image::image_dimensions(base) {
        Ok(size) => size,
        Err(e) => {
            report.push(Diagnostic::error(UNREADABLE, base, e.to_string()));
            return;
        }
    };

    let mut complete = true;
    for variant in [ScaleVariant::X2, ScaleVariant::X3] {
        let expected = (width * variant.factor(), height * variant.factor());
        let Some(path) = &files[variant_index(variant)] else {
            let missing = variant.path_for(&strip_png(base));
            report.push(
                Diagnostic::error(
                    MISSING_VARIANT,
                    &missing,
                    format!("Missing {} variant", variant.suffix()),
                )
                .with_help("Re-run `strike-assets generate`"),
            );
            complete = false;
            continue;
        };
        match image::image_dimensions(path) {
            Ok(size) if size == expected => {}
            Ok((w, h)) => {
                report.push(Diagnostic::error(
                    WRONG_SIZE,
                    path,
                    format!("Expected {}x{}, found {}x{}", expected.0, expected.1, w, h),
                ));
                complete = false;
            }
            Err(e) => {
                report.push(Diagnostic::error(UNREADABLE, path, e.to_string()));
                complete = false;
            }
        }
    }

    if complete {
        report.sprites += 1;
    }
}

/// Split `dir/name@2x.png` into `(dir/name, X2)`.
fn split_variant(path: &Path) -> Option<(PathBuf, ScaleVariant)> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(".png")?;

    let (stem, variant) = if let Some(s) = stem.strip_suffix("@2x") {
        (s, ScaleVariant::X2)
    } else if let Some(s) = stem.strip_suffix("@3x") {
        (s, ScaleVariant::X3)
    } else {
        (stem, ScaleVariant::X1)
    };
    Some((path.with_file_name(stem), variant))
}

fn strip_png(path: &Path) -> PathBuf {
    path.with_extension("")
}

fn variant_index(variant: ScaleVariant) -> usize {
    match variant {
        ScaleVariant::X1 => 0,
        ScaleVariant::X2 => 1,
        ScaleVariant::X3 => 2,
    }
}

/// Print diagnostics to stdout.
pub fn print_report(report: &VerifyReport, printer: &crate::output::Printer) {
    for d in report.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        println!(
            "  {}[{}]: {} {}",
            label,
            d.code,
            crate::output::display_path(&d.path),
            printer.dim(&d.message)
        );
        if let Some(help) = &d.help {
            println!("    help: {}", help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{export_scaled, write_png, Canvas};
    use pretty_assertions::assert_eq;

    fn sprite(dir: &Path, name: &str) -> PathBuf {
        let base = dir.join(name);
        export_scaled(&Canvas::new(8, 4), &base).unwrap();
        base
    }

    #[test]
    fn test_complete_tree_passes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("UI/HUD")).unwrap();
        sprite(&dir.path().join("UI/HUD"), "hud_corner");
        sprite(dir.path(), "minimap_frame");

        let report = verify_tree(dir.path()).unwrap();
        assert!(report.is_ok(), "{:?}", report.codes());
        assert_eq!(report.sprites, 2);
    }

    #[test]
    fn test_missing_variant_reported() {
        let dir = tempfile::tempdir().unwrap();
        let base = sprite(dir.path(), "trail_0");
        std::fs::remove_file(ScaleVariant::X3.path_for(&base)).unwrap();

        let report = verify_tree(dir.path()).unwrap();
        assert_eq!(report.codes(), vec![MISSING_VARIANT]);
        let d = report.iter().next().unwrap();
        assert_eq!(d.path, dir.path().join("trail_0@3x.png"));
        assert_eq!(report.sprites, 0);
    }

    #[test]
    fn test_wrong_size_reported() {
        let dir = tempfile::tempdir().unwrap();
        let base = sprite(dir.path(), "fire");
        write_png(&Canvas::new(15, 8), &ScaleVariant::X2.path_for(&base)).unwrap();

        let report = verify_tree(dir.path()).unwrap();
        assert_eq!(report.codes(), vec![WRONG_SIZE]);
        assert!(report.has_errors());
    }

    #[test]
    fn test_orphan_variant_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&Canvas::new(4, 4), &dir.path().join("ghost@2x.png")).unwrap();

        let report = verify_tree(dir.path()).unwrap();
        assert_eq!(report.codes(), vec![ORPHAN_VARIANT]);
    }

    #[test]
    fn test_stale_temp_is_warning() {
        let dir = tempfile::tempdir().unwrap();
        sprite(dir.path(), "smoke");
        std::fs::write(dir.path().join("smoke@2x.png.tmp"), b"partial").unwrap();

        let report = verify_tree(dir.path()).unwrap();
        assert_eq!(report.warning_count(), 1);
        assert!(!report.has_errors());
        assert_eq!(report.sprites, 1);
    }

    #[test]
    fn test_unreadable_png_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        let report = verify_tree(dir.path()).unwrap();
        assert_eq!(report.codes(), vec![UNREADABLE]);
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let result = verify_tree(Path::new("/nonexistent/assets"));
        assert!(matches!(result, Err(AssetError::Io { .. })));
    }

    #[test]
    fn test_split_variant() {
        assert_eq!(
            split_variant(Path::new("UI/icon_health@3x.png")),
            Some((PathBuf::from("UI/icon_health"), ScaleVariant::X3))
        );
        assert_eq!(
            split_variant(Path::new("sky_dusk.png")),
            Some((PathBuf::from("sky_dusk"), ScaleVariant::X1))
        );
        assert_eq!(split_variant(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_empty_style_root_misses_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        let report = verify_catalog(dir.path(), Style::TopDown);
        assert_eq!(report.error_count(), catalog(Style::TopDown).len());
    }
}
