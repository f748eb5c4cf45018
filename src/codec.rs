//! Image decoding and re-encoding.
//!
//! The builder only needs one capability from an image library: decode a
//! file, resize it, and write it back out in the same container format.
//! `ImageCodec` is that seam; `RasterCodec` implements it with the `image`
//! crate. Decoders and writers are scoped to a single call, so a failing
//! file never holds a handle past `shrink`.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

pub trait ImageCodec {
    /// Decode `source`, resize it to exactly `width` x `height`, and write it
    /// to `dest` encoded in the container format implied by `dest`.
    fn shrink(&self, source: &Path, dest: &Path, width: u32, height: u32) -> Result<()>;
}

/// `image`-crate backed codec for PNG and JPEG sources.
///
/// PDF and other containers the crate cannot decode come back as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterCodec;

impl ImageCodec for RasterCodec {
    fn shrink(&self, source: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
        let decoded = ImageReader::open(source)
            .with_context(|| format!("opening {}", source.display()))?
            .with_guessed_format()
            .with_context(|| format!("sniffing format of {}", source.display()))?
            .decode()
            .with_context(|| format!("decoding {}", source.display()))?;

        let format = ImageFormat::from_path(dest)
            .with_context(|| format!("no encoder for {}", dest.display()))?;

        let resized = decoded.resize_exact(width, height, FilterType::CatmullRom);
        let encodable = match format {
            // JPEG has no alpha channel.
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
            _ => resized,
        };

        encodable
            .save_with_format(dest, format)
            .with_context(|| format!("encoding {}", dest.display()))
    }
}
