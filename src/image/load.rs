//! Image loading utilities.

use std::path::Path;

use image::{GenericImageView, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as 8-bit RGBA.
///
/// Any layout the decoder produces (RGB, luma, 16-bit channels) is
/// converted to four 8-bit channels. Fully opaque alpha is added when
/// the source has none.
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if the path does not exist and
/// [`Error::Decode`] if it cannot be read or decoded.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    tracing::debug!("Loaded {}x{} {:?} image", width, height, img.color());

    Ok(img.to_rgba8())
}
