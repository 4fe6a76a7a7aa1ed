//! Image saving utilities.

use std::fs;
use std::path::Path;

use image::{imageops::FilterType, ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Resize an image to `size`×`size` and save it as PNG.
///
/// The image is:
/// 1. Resized with Lanczos3, ignoring the source aspect ratio
/// 2. Written as PNG regardless of the file extension
///
/// The parent directory is created if it does not exist. An existing file
/// at `path` is overwritten.
///
/// # Errors
///
/// Returns [`Error::DirectoryCreate`] if the parent directory cannot be
/// created and [`Error::Write`] if the PNG cannot be encoded or written.
pub fn save_square_png<P: AsRef<Path>>(img: &RgbaImage, path: P, size: u32) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let resized = image::imageops::resize(img, size, size, FilterType::Lanczos3);

    resized
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {size}x{size} PNG to {}", path.display());

    Ok(())
}
