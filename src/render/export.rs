//! PNG output at 1x, 2x and 3x.
//!
//! Every finished canvas is written as three nearest-neighbour copies named
//! `{base}.png`, `{base}@2x.png` and `{base}@3x.png`.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{AssetError, Result};

use super::Canvas;

/// One of the three fixed pixel densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleVariant {
    X1,
    X2,
    X3,
}

impl ScaleVariant {
    /// Every variant in write order.
    pub const ALL: [ScaleVariant; 3] = [ScaleVariant::X1, ScaleVariant::X2, ScaleVariant::X3];

    /// Integer upscale factor.
    pub fn factor(self) -> u32 {
        match self {
            ScaleVariant::X1 => 1,
            ScaleVariant::X2 => 2,
            ScaleVariant::X3 => 3,
        }
    }

    /// File name suffix placed before `.png`.
    pub fn suffix(self) -> &'static str {
        match self {
            ScaleVariant::X1 => "",
            ScaleVariant::X2 => "@2x",
            ScaleVariant::X3 => "@3x",
        }
    }

    /// Output path for a base path with no extension.
    pub fn path_for(self, base: &Path) -> PathBuf {
        let mut name = base.as_os_str().to_os_string();
        name.push(self.suffix());
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Write a canvas to a PNG file as-is.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    canvas
        .to_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Export a canvas at every scale variant.
///
/// `base` has no extension and no suffix. All three files are first
/// written next to their targets under a temporary name and only renamed
/// into place once every write has succeeded, so a failure never leaves a
/// partial set behind. Parent directories must already exist.
///
/// Returns the written paths in variant order.
pub fn export_scaled(canvas: &Canvas, base: &Path) -> Result<Vec<PathBuf>> {
    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(ScaleVariant::ALL.len());

    for variant in ScaleVariant::ALL {
        let target = variant.path_for(base);
        let temp = temp_path(&target);
        let scaled = canvas.scaled(variant.factor());

        if let Err(e) = write_png(&scaled, &temp) {
            discard(&staged);
            let _ = fs::remove_file(&temp);
            return Err(e);
        }
        staged.push((temp, target));
    }

    for (i, (temp, target)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(temp, target) {
            discard(&staged[i..]);
            for (_, done) in &staged[..i] {
                let _ = fs::remove_file(done);
            }
            return Err(AssetError::Io {
                path: target.clone(),
                message: e.to_string(),
            });
        }
    }

    Ok(staged.into_iter().map(|(_, target)| target).collect())
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        let _ = fs::remove_file(temp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_variant_paths() {
        let base = Path::new("Effects/Explosions/explosion_medium_2");
        let names: Vec<PathBuf> = ScaleVariant::ALL.iter().map(|v| v.path_for(base)).collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("Effects/Explosions/explosion_medium_2.png"),
                PathBuf::from("Effects/Explosions/explosion_medium_2@2x.png"),
                PathBuf::from("Effects/Explosions/explosion_medium_2@3x.png"),
            ]
        );
    }

    #[test]
    fn test_write_png_with_transparency() {
        let mut canvas = Canvas::new(2, 1);
        canvas.put(1, 0, Colour::new(255, 0, 0, 128));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_export_solid_red_at_three_scales() {
        let mut canvas = Canvas::new(64, 64);
        canvas.draw(Primitive::rect([0, 0, 63, 63]).fill(Colour::rgb(255, 0, 0)));

        let dir = tempdir().unwrap();
        let base = dir.path().join("red");
        let written = export_scaled(&canvas, &base).unwrap();
        assert_eq!(written.len(), 3);

        for (path, size) in written.iter().zip([64, 128, 192]) {
            let img = image::open(path).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (size, size));
            assert!(img.pixels().all(|p| p.0 == [255, 0, 0, 255]));
        }
    }

    #[test]
    fn test_export_keeps_blocks() {
        let mut canvas = Canvas::new(3, 2);
        canvas.put(0, 0, Colour::rgb(0, 255, 255));
        canvas.put(2, 1, Colour::new(255, 0, 128, 90));

        let dir = tempdir().unwrap();
        let base = dir.path().join("blocks");
        export_scaled(&canvas, &base).unwrap();

        let img = image::open(dir.path().join("blocks@3x.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (9, 6));
        for (x, y) in [(0, 0), (2, 2), (1, 2)] {
            assert_eq!(img.get_pixel(x, y).0, [0, 255, 255, 255]);
        }
        for (x, y) in [(6, 3), (8, 5)] {
            assert_eq!(img.get_pixel(x, y).0, [255, 0, 128, 90]);
        }
        assert_eq!(img.get_pixel(3, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_export_missing_directory_fails_cleanly() {
        let canvas = Canvas::new(4, 4);
        let dir = tempdir().unwrap();
        let base = dir.path().join("not_created").join("sprite");

        let err = export_scaled(&canvas, &base).unwrap_err();
        match err {
            AssetError::Io { path, .. } => {
                assert!(path.starts_with(dir.path().join("not_created")))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_leaves_no_temp_files() {
        let canvas = Canvas::new(2, 2);
        let dir = tempdir().unwrap();
        export_scaled(&canvas, &dir.path().join("tiny")).unwrap();

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["tiny.png", "tiny@2x.png", "tiny@3x.png"]);
    }
}
