//! Catalog driver: build every entry and export its scale set.
//!
//! The driver is the only part of the crate that knows about the output
//! tree. It creates the category directories, hands each finished canvas
//! to [`export_scaled`] and reports progress through the [`Printer`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::{catalog, check_unique, Entry};
use crate::config::ProjectConfig;
use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{export_scaled, ScaleVariant};
use crate::sprites::{self, Style};
use crate::types::Palette;

/// Name of the per-style asset manifest.
pub const MANIFEST_FILE: &str = "assets.json";

/// How a generation run behaves.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the style roots are created in.
    pub output: PathBuf,
    /// Stop after the first failing entry.
    pub fail_fast: bool,
    /// Worker threads; 1 runs sequentially.
    pub jobs: usize,
    /// Write `assets.json` into each style root.
    pub manifest: bool,
}

impl RunOptions {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            output: config.output.clone(),
            fail_fast: config.fail_fast,
            jobs: config.effective_jobs(),
            manifest: config.manifest,
        }
    }
}

/// One exported sprite, as listed in `assets.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    pub category: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Paths relative to the style root, in 1x, 2x, 3x order.
    pub files: Vec<String>,
}

impl ManifestRecord {
    fn new(entry: &Entry) -> Self {
        let files = ScaleVariant::ALL
            .iter()
            .map(|v| format!("{}/{}{}.png", entry.category, entry.name, v.suffix()))
            .collect();
        Self {
            category: entry.category.to_string(),
            name: entry.name.clone(),
            width: entry.size.0,
            height: entry.size.1,
            files,
        }
    }
}

#[derive(Debug, Serialize)]
struct AssetManifest<'a> {
    style: &'a str,
    palette: &'a str,
    sprites: &'a [ManifestRecord],
}

/// What happened to one style's catalog.
#[derive(Debug)]
pub struct StyleReport {
    pub style: Style,
    pub root: PathBuf,
    pub written: Vec<ManifestRecord>,
    /// Failing entry names with their errors, in catalog order.
    pub failures: Vec<(String, AssetError)>,
    /// Entries never attempted because a fail-fast run stopped early.
    pub skipped: usize,
}

impl StyleReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build one entry and write its three scale files under `root`.
pub fn generate_entry(
    style: Style,
    entry: &Entry,
    palette: &Palette,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    let canvas = sprites::build(style, entry.sprite, entry.state, entry.size, palette)?;

    let dir = root.join(entry.category);
    fs::create_dir_all(&dir).map_err(|e| AssetError::Io {
        path: dir.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    export_scaled(&canvas, &root.join(entry.base_path()))
}

/// Generate a whole style catalog into `options.output/<style root>`.
pub fn generate_style(
    style: Style,
    palette: &Palette,
    options: &RunOptions,
    printer: &Printer,
) -> Result<StyleReport> {
    let entries = catalog(style);
    check_unique(&entries)?;

    let root = options.output.join(style.dir_name());
    printer.info(
        "Catalog",
        &format!(
            "{} {} into {}",
            plural(entries.len(), "sprite", "sprites"),
            style,
            display_path(&root)
        ),
    );

    let outcomes = if options.jobs > 1 {
        run_parallel(style, &entries, palette, &root, options)?
    } else {
        run_sequential(style, &entries, palette, &root, options, printer)
    };

    let mut report = StyleReport {
        style,
        root,
        written: Vec::new(),
        failures: Vec::new(),
        skipped: entries.len() - outcomes.len(),
    };

    for (entry, outcome) in entries.iter().zip(outcomes) {
        let Some(outcome) = outcome else {
            report.skipped += 1;
            continue;
        };
        match outcome {
            Ok(_) => {
                if options.jobs > 1 {
                    printer.status("Generated", &describe(entry));
                }
                report.written.push(ManifestRecord::new(entry));
            }
            Err(e) => {
                if options.jobs > 1 {
                    printer.error("Failed", &format!("{}: {}", entry.base_path().display(), e));
                }
                report.failures.push((entry.name.clone(), e));
            }
        }
    }

    if options.manifest {
        write_manifest(&report, palette)?;
    }

    Ok(report)
}

fn describe(entry: &Entry) -> String {
    let (w, h) = entry.size;
    format!("{} ({}x{})", entry.base_path().display(), w, h)
}

/// Results per entry in catalog order; `None` marks an entry skipped by
/// fail-fast. The sequential runner stops pushing instead.
type Outcomes = Vec<Option<Result<Vec<PathBuf>>>>;

fn run_sequential(
    style: Style,
    entries: &[Entry],
    palette: &Palette,
    root: &Path,
    options: &RunOptions,
    printer: &Printer,
) -> Outcomes {
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        printer.status("Generating", &describe(entry));
        let outcome = generate_entry(style, entry, palette, root);
        let failed = outcome.is_err();
        if let Err(e) = &outcome {
            printer.error("Failed", &format!("{}: {}", entry.base_path().display(), e));
        }
        outcomes.push(Some(outcome));
        if failed && options.fail_fast {
            break;
        }
    }

    outcomes
}

fn run_parallel(
    style: Style,
    entries: &[Entry],
    palette: &Palette,
    root: &Path,
    options: &RunOptions,
) -> Result<Outcomes> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()
        .map_err(|e| AssetError::Build {
            message: format!("Failed to start {} worker threads: {}", options.jobs, e),
            help: Some("Try a smaller --jobs value".to_string()),
        })?;

    let stop = AtomicBool::new(false);
    let outcomes: Outcomes = pool.install(|| {
        entries
            .par_iter()
            .map(|entry| {
                if options.fail_fast && stop.load(Ordering::Relaxed) {
                    return None;
                }
                let outcome = generate_entry(style, entry, palette, root);
                if outcome.is_err() {
                    stop.store(true, Ordering::Relaxed);
                }
                Some(outcome)
            })
            .collect()
    });

    Ok(outcomes)
}

fn write_manifest(report: &StyleReport, palette: &Palette) -> Result<()> {
    let manifest = AssetManifest {
        style: report.style.label(),
        palette: &palette.name,
        sprites: &report.written,
    };
    let json = serde_json::to_string_pretty(&manifest).map_err(|e| AssetError::Build {
        message: format!("Failed to serialize asset manifest: {}", e),
        help: None,
    })?;

    fs::create_dir_all(&report.root).map_err(|e| AssetError::Io {
        path: report.root.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;
    let path = report.root.join(MANIFEST_FILE);
    fs::write(&path, json).map_err(|e| AssetError::Io {
        path: path.clone(),
        message: format!("Failed to write asset manifest: {}", e),
    })
}

/// Generate every configured style and print a summary.
///
/// Fails if any entry failed; with `fail_fast` the remaining styles are
/// not attempted either.
pub fn generate(config: &ProjectConfig, printer: &Printer) -> Result<Vec<StyleReport>> {
    let options = RunOptions::from_config(config);
    let mut reports = Vec::new();

    for style in config.styles() {
        let palette = config.palette_for(style)?;
        let report = generate_style(style, &palette, &options, printer)?;
        let stop = options.fail_fast && !report.is_ok();
        reports.push(report);
        if stop {
            break;
        }
    }

    let written: usize = reports.iter().map(|r| r.written.len()).sum();
    let failed: usize = reports.iter().map(|r| r.failures.len()).sum();
    let skipped: usize = reports.iter().map(|r| r.skipped).sum();

    if failed > 0 {
        let mut message = format!(
            "{} failed, {} written",
            plural(failed, "sprite", "sprites"),
            written
        );
        if skipped > 0 {
            message.push_str(&format!(", {} skipped", skipped));
        }
        printer.error("Failed", &message);
        return Err(AssetError::Build {
            message,
            help: Some("See the errors above; each names the sprite and path".to_string()),
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} ({} files) in {}",
            plural(written, "sprite", "sprites"),
            written * ScaleVariant::ALL.len(),
            display_path(&options.output)
        ),
    );

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::{Magnitude, Sprite, State};
    use pretty_assertions::assert_eq;

    fn options(output: &Path) -> RunOptions {
        RunOptions {
            output: output.to_path_buf(),
            fail_fast: false,
            jobs: 1,
            manifest: false,
        }
    }

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_generate_entry_creates_category_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let entry = catalog(Style::TopDown)
            .into_iter()
            .find(|e| e.name == "explosion_small_2")
            .unwrap();

        let paths =
            generate_entry(Style::TopDown, &entry, &Palette::overhead(), dir.path()).unwrap();

        let base = dir.path().join("Effects/Explosions/explosion_small_2");
        assert_eq!(paths[0], ScaleVariant::X1.path_for(&base));
        let img = image::open(&paths[2]).unwrap();
        assert_eq!((img.width(), img.height()), (144, 144));
    }

    #[test]
    fn test_unsupported_state_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let entry = Entry {
            category: "Effects/Explosions",
            name: "explosion_small_9".to_string(),
            sprite: Sprite::Explosion(Magnitude::Small),
            state: State::Frame(9),
            size: (32, 32),
        };

        let result = generate_entry(Style::SideView, &entry, &Palette::cyberpunk(), dir.path());
        assert!(matches!(result, Err(AssetError::UnsupportedState { .. })));
        assert!(!dir.path().join("Effects").exists());
    }

    #[test]
    fn test_full_side_view_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path());
        opts.manifest = true;

        let report =
            generate_style(Style::SideView, &Palette::cyberpunk(), &opts, &quiet()).unwrap();

        assert!(report.is_ok());
        assert_eq!(report.written.len(), catalog(Style::SideView).len());
        assert!(dir.path().join("Assets/UI/minimap_enemy@3x.png").is_file());
        assert!(dir.path().join("Assets/Environment/Slums/slum_building.png").is_file());

        let json = fs::read_to_string(dir.path().join("Assets").join(MANIFEST_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["style"], "side");
        assert_eq!(value["sprites"][0]["name"], "helicopter_idle");
        assert_eq!(value["sprites"][0]["files"][1], "Player/Helicopter/helicopter_idle@2x.png");
    }

    #[test]
    fn test_parallel_output_matches_sequential() {
        let seq = tempfile::tempdir().unwrap();
        let par = tempfile::tempdir().unwrap();
        let palette = Palette::overhead();

        generate_style(Style::TopDown, &palette, &options(seq.path()), &quiet()).unwrap();
        let mut opts = options(par.path());
        opts.jobs = 4;
        generate_style(Style::TopDown, &palette, &opts, &quiet()).unwrap();

        for entry in catalog(Style::TopDown) {
            for variant in ScaleVariant::ALL {
                let rel = variant.path_for(&Path::new("Assets_TopDown").join(entry.base_path()));
                let a = fs::read(seq.path().join(&rel)).unwrap();
                let b = fs::read(par.path().join(&rel)).unwrap();
                assert!(a == b, "{} differs", rel.display());
            }
        }
    }

    #[test]
    fn test_unwritable_root_reports_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        // a file where the style root should be
        fs::write(dir.path().join("Assets_TopDown"), b"").unwrap();

        let opts = options(dir.path());
        let report = generate_style(Style::TopDown, &Palette::overhead(), &opts, &quiet()).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.failures.len(), catalog(Style::TopDown).len());
        assert!(matches!(report.failures[0].1, AssetError::Io { .. }));
    }

    #[test]
    fn test_fail_fast_stops_after_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Assets_TopDown"), b"").unwrap();
        let mut opts = options(dir.path());
        opts.fail_fast = true;

        let report = generate_style(Style::TopDown, &Palette::overhead(), &opts, &quiet()).unwrap();
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.skipped, catalog(Style::TopDown).len() - 1);
    }

    #[test]
    fn test_parallel_report_keeps_catalog_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path());
        opts.jobs = 3;

        let report =
            generate_style(Style::SideView, &Palette::cyberpunk(), &opts, &quiet()).unwrap();
        let written: Vec<&str> = report.written.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<String> = catalog(Style::SideView).into_iter().map(|e| e.name).collect();
        assert_eq!(written, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_parallel_fail_fast_accounts_for_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Assets_TopDown"), b"").unwrap();
        let mut opts = options(dir.path());
        opts.fail_fast = true;
        opts.jobs = 4;

        let report = generate_style(Style::TopDown, &Palette::overhead(), &opts, &quiet()).unwrap();
        assert!(report.written.is_empty());
        assert!(!report.failures.is_empty());
        assert_eq!(
            report.failures.len() + report.skipped,
            catalog(Style::TopDown).len()
        );
        assert!(matches!(report.failures[0].1, AssetError::Io { .. }));
    }

    #[test]
    fn test_generate_fails_when_any_entry_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Assets"), b"").unwrap();
        let config = ProjectConfig {
            output: dir.path().to_path_buf(),
            style: Some(Style::SideView),
            ..Default::default()
        };

        let result = generate(&config, &quiet());
        assert!(matches!(result, Err(AssetError::Build { .. })));
    }
}
