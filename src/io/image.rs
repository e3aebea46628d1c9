//! Guide image shown underneath the editing grid

use std::path::{Path, PathBuf};

use crate::io::error::{PointyboxError, Result};
use crate::store::document::Resolution;

/// Reference image the shapes are traced over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideImage {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl GuideImage {
    /// Decode the image to validate it and record its size
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or is not a decodable image.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|e| PointyboxError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        log::debug!(
            "Loaded guide image {} ({}x{} px)",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            path: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
        })
    }

    /// Location the image was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pixel size as (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixels covered by one grid cell when the image spans `resolution`
    ///
    /// Rounded up so a partial cell still counts.
    pub const fn cell_size(&self, resolution: Resolution) -> (u32, u32) {
        (
            self.width.div_ceil(resolution.width()),
            self.height.div_ceil(resolution.height()),
        )
    }
}
