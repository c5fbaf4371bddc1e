//! Icon assembly and generation driver
//!
//! Renders each registered icon in both color variants and writes the PNG
//! files. The glyph is drawn once, directly onto the colored backdrop.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use thiserror::Error;
use tracing::debug;

use crate::canvas::Canvas;
use crate::registry::{IconDescriptor, IconVariant, ICONS};

/// Canvas side length in pixels
pub const ICON_SIZE: u32 = 81;

/// Margin around the glyph strokes
pub const GLYPH_MARGIN: u32 = 10;

/// Inset of the circular backdrop from the canvas edge
pub const BACKDROP_MARGIN: u32 = 8;

/// Alpha of the circular backdrop
pub const BACKDROP_ALPHA: u8 = 200;

/// Failure while writing icon files
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Render one icon variant as an RGBA image
pub fn render_icon(descriptor: &IconDescriptor, variant: IconVariant) -> RgbaImage {
    let mut canvas = Canvas::new(ICON_SIZE);

    // Semi-transparent circular backdrop in the variant color
    let (r, g, b) = variant.color(descriptor);
    let center = ICON_SIZE as f32 / 2.0;
    let radius = center - BACKDROP_MARGIN as f32;
    canvas.fill_circle(center, center, radius, Rgba([r, g, b, BACKDROP_ALPHA]));

    // White glyph on top
    descriptor.shape.draw(&mut canvas, ICON_SIZE, GLYPH_MARGIN);

    canvas.into_image()
}

/// Render one icon variant and write it into `dir`, overwriting any
/// existing file
pub fn write_icon(
    descriptor: &IconDescriptor,
    variant: IconVariant,
    dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let path = dir.join(descriptor.file_name(variant));
    let img = render_icon(descriptor, variant);
    img.save(&path).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "icon written");
    println!("Created: {}", path.display());
    Ok(path)
}

/// Generate every registered icon in both variants into `dir`, creating the
/// directory if missing. Returns the number of files written.
pub fn generate_all(dir: &Path) -> Result<usize, GenerateError> {
    std::fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for descriptor in &ICONS {
        for variant in [IconVariant::Normal, IconVariant::Active] {
            write_icon(descriptor, variant, dir)?;
            written += 1;
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::WHITE;
    use crate::registry::{ACTIVE_COLOR, NORMAL_COLOR};

    // Inside the backdrop circle but clear of every glyph's strokes
    const BACKDROP_PROBE: (u32, u32) = (14, 40);

    #[test]
    fn test_render_dimensions_and_transparency() {
        for descriptor in &ICONS {
            let img = render_icon(descriptor, IconVariant::Normal);
            assert_eq!(img.width(), ICON_SIZE);
            assert_eq!(img.height(), ICON_SIZE);
            assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
            assert_eq!(img.get_pixel(ICON_SIZE - 1, 0).0, [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_backdrop_color_matches_variant() {
        let (x, y) = BACKDROP_PROBE;
        for descriptor in &ICONS {
            let normal = render_icon(descriptor, IconVariant::Normal);
            let (r, g, b) = NORMAL_COLOR;
            assert_eq!(normal.get_pixel(x, y).0, [r, g, b, BACKDROP_ALPHA]);

            let active = render_icon(descriptor, IconVariant::Active);
            let (r, g, b) = ACTIVE_COLOR;
            assert_eq!(active.get_pixel(x, y).0, [r, g, b, BACKDROP_ALPHA]);
        }
    }

    #[test]
    fn test_glyph_strokes_are_opaque_white() {
        for descriptor in &ICONS {
            for variant in [IconVariant::Normal, IconVariant::Active] {
                let img = render_icon(descriptor, variant);
                let white = img.pixels().filter(|p| p.0 == WHITE.0).count();
                assert!(white > 50, "{} has too few glyph pixels", descriptor.name);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for descriptor in &ICONS {
            for variant in [IconVariant::Normal, IconVariant::Active] {
                let a = render_icon(descriptor, variant);
                let b = render_icon(descriptor, variant);
                assert_eq!(a.as_raw(), b.as_raw());
            }
        }
    }

    #[test]
    fn test_generate_all_writes_ten_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("icons");

        let written = generate_all(&out).unwrap();
        assert_eq!(written, 10);

        for descriptor in &ICONS {
            for variant in [IconVariant::Normal, IconVariant::Active] {
                let path = out.join(descriptor.file_name(variant));
                assert!(path.exists(), "missing {}", path.display());
                let img = image::open(&path).unwrap().to_rgba8();
                assert_eq!(img.width(), ICON_SIZE);
                assert_eq!(img.height(), ICON_SIZE);
            }
        }
    }

    #[test]
    fn test_rerun_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(generate_all(dir.path()).unwrap(), 10);
        let first = std::fs::read(dir.path().join("home.png")).unwrap();

        assert_eq!(generate_all(dir.path()).unwrap(), 10);
        let second = std::fs::read(dir.path().join("home.png")).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 10);
    }
}
