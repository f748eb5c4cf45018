//! Filename classification: which files belong in the catalog, and which
//! imageset and scale each one maps to.
//!
//! The scale markers are matched anywhere in the stem, not only as a suffix,
//! so `Icon@2x_extra.png` lands in `Icon_extra.imageset` as a 2x variant.

use crate::catalog::model::Scale;
use std::path::Path;

/// Extensions accepted into the catalog, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".pdf"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Imageset name, the stem with the scale marker stripped.
    pub asset_name: String,
    pub scale: Scale,
    /// Original file name, marker and extension case preserved.
    pub file_name: String,
}

/// True when the file name ends in one of [`IMAGE_EXTENSIONS`].
pub fn is_catalog_image(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// Map a file name to its imageset name and scale.
///
/// `@2x` wins over `@3x` when both appear; only the first occurrence of the
/// winning marker is removed.
pub fn classify(file_name: &str) -> Classified {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    let (asset_name, scale) = [Scale::Two, Scale::Three]
        .into_iter()
        .find_map(|scale| {
            let marker = scale.marker()?;
            stem.contains(marker)
                .then(|| (stem.replacen(marker, "", 1), scale))
        })
        .unwrap_or_else(|| (stem.to_string(), Scale::One));

    Classified {
        asset_name,
        scale,
        file_name: file_name.to_string(),
    }
}
