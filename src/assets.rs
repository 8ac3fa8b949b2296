//! Best-effort raster loading for body and satellite sprites.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::RasterImage;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image not found at {0}")]
    Missing(PathBuf),
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {0} has no pixels")]
    Empty(PathBuf),
}

/// Load and decode an image into RGBA.
pub fn load_image(path: &Path) -> Result<RasterImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }
    let decoded = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    RasterImage::from_rgba(width, height, decoded.into_raw())
        .ok_or_else(|| AssetError::Empty(path.to_path_buf()))
}

/// Load an image, logging and swallowing any failure so callers can fall back
/// to vector drawing.
pub fn load_optional(path: &Path) -> Option<RasterImage> {
    match load_image(path) {
        Ok(image) => {
            log::debug!(
                "loaded sprite {} ({}x{})",
                path.display(),
                image.width,
                image.height
            );
            Some(image)
        }
        Err(err) => {
            log::warn!("{err}; drawing vector shape instead");
            None
        }
    }
}
