// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading and saving.
//!
//! This module loads image files into RGB buffers for overlay
//! rendering and writes composited results back out as PNG.

use anyhow::{Context, Result};
use image::RgbImage;
use std::path::Path;

/// Load an image file as an 8-bit RGB buffer. Grayscale sources are
/// expanded to three channels for consistency.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?;
    Ok(image.to_rgb8())
}

/// Write an RGB buffer to disk as PNG.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    Ok(())
}
