//! Downsampling, PNG output and file path generation

use image::imageops::FilterType;
use image::{Rgba, Rgba32FImage, RgbaImage};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::geometry::FINAL_SIZE;
use crate::pose::Pose;
use crate::renderer::Canvas;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during directory creation or file write
    #[error("IO error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Image encoding error
    #[error("Image error writing {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Which file of a character set is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputName {
    /// One pose frame, `<pose>.png`
    Pose(Pose),
    /// The character icon, `icon.png`
    Icon,
}

impl OutputName {
    /// File name including the `.png` extension.
    pub fn file_name(&self) -> String {
        format!("{}.png", self)
    }

    /// The pose this file is rendered from.
    pub fn pose(&self) -> Pose {
        match self {
            OutputName::Pose(pose) => *pose,
            OutputName::Icon => Pose::ICON,
        }
    }

    /// All twelve files of a character set: eleven poses, then the icon.
    pub fn all() -> impl Iterator<Item = OutputName> {
        Pose::ALL.into_iter().map(OutputName::Pose).chain(std::iter::once(OutputName::Icon))
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputName::Pose(pose) => f.write_str(pose.as_str()),
            OutputName::Icon => f.write_str("icon"),
        }
    }
}

/// Generate the output path for one sprite file.
///
/// | Name | Output |
/// |------|--------|
/// | `Pose(Sit)` for "bunny" | `{out}/bunny/sit.png` |
/// | `Icon` for "bunny" | `{out}/bunny/icon.png` |
pub fn sprite_path(out_dir: &Path, character: &str, name: OutputName) -> PathBuf {
    out_dir.join(character).join(name.file_name())
}

/// Save an RGBA image to a PNG file.
///
/// Creates missing parent directories first; an existing directory is not
/// an error. An existing file at `path` is overwritten.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|source| OutputError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| OutputError::Image { path: path.to_path_buf(), source })
}

/// Downsample a supersampled canvas to the final sprite size.
///
/// Uses a Lanczos3 filter on alpha-premultiplied colors so that fully
/// transparent pixels (which carry black) don't darken the anti-aliased
/// rim of the figure.
pub fn finalize(canvas: &Canvas) -> RgbaImage {
    downsample(canvas.image(), FINAL_SIZE, FINAL_SIZE)
}

/// Premultiplied Lanczos3 resize of an RGBA image.
///
/// An output pixel stays fully transparent unless some source pixel with
/// nonzero alpha lies in its footprint, dilated by one output pixel; the
/// kernel's side lobe would otherwise leave a faint halo off the silhouette.
pub fn downsample(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let mut premultiplied = Rgba32FImage::new(w, h);
    for (x, y, p) in image.enumerate_pixels() {
        let a = p[3] as f32 / 255.0;
        premultiplied.put_pixel(
            x,
            y,
            Rgba([
                p[0] as f32 / 255.0 * a,
                p[1] as f32 / 255.0 * a,
                p[2] as f32 / 255.0 * a,
                a,
            ]),
        );
    }

    let resized = image::imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);
    let footprint = Footprint::of(image, width, height);

    let mut out = RgbaImage::new(width, height);
    for (x, y, p) in resized.enumerate_pixels() {
        if footprint.near(x, y) {
            out.put_pixel(x, y, unpremultiply(p));
        }
    }
    out
}

/// Which output cells contain at least one source pixel with nonzero alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Footprint {
    /// Map every visible source pixel of `image` onto a `width`×`height` grid.
    pub fn of(image: &RgbaImage, width: u32, height: u32) -> Self {
        let (w, h) = image.dimensions();
        let mut cells = vec![false; width as usize * height as usize];
        if w > 0 && h > 0 {
            for (x, y, p) in image.enumerate_pixels() {
                if p[3] != 0 {
                    let cx = (x as u64 * width as u64 / w as u64) as usize;
                    let cy = (y as u64 * height as u64 / h as u64) as usize;
                    cells[cy * width as usize + cx] = true;
                }
            }
        }
        Self { width, height, cells }
    }

    /// Whether the cell itself is covered.
    pub fn covered(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[(y * self.width + x) as usize]
    }

    /// Whether the cell or any of its eight neighbours is covered.
    pub fn near(&self, x: u32, y: u32) -> bool {
        let (x0, y0) = (x.saturating_sub(1), y.saturating_sub(1));
        (y0..=y + 1).any(|ny| (x0..=x + 1).any(|nx| self.covered(nx, ny)))
    }
}

/// Convert a premultiplied float pixel back to straight 8-bit RGBA.
///
/// Lanczos rings slightly past [0, 1], so values are clamped. A pixel whose
/// alpha rounds to zero becomes fully transparent black.
fn unpremultiply(p: &Rgba<f32>) -> Rgba<u8> {
    let a = p[3].clamp(0.0, 1.0);
    let alpha = (a * 255.0).round() as u8;
    if alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(p[0]), channel(p[1]), channel(p[2]), alpha])
}
