//! Descriptor types for `Contents.json` files.
//!
//! Field declaration order is the serialization order, so the structs below
//! mirror the on-disk layout Xcode expects: `images` before `info`, `version`
//! before `author`, and `idiom`/`filename`/`scale` within each image entry.

use serde::{Deserialize, Serialize};

/// Catalog format version written into every descriptor.
pub const CATALOG_VERSION: u32 = 1;
/// Author tag written into every descriptor.
pub const CATALOG_AUTHOR: &str = "xcode";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub version: u32,
    pub author: String,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        Self {
            version: CATALOG_VERSION,
            author: CATALOG_AUTHOR.to_string(),
        }
    }
}

/// Top-level `Contents.json` of the `.xcassets` directory. It never carries
/// an `images` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootDescriptor {
    pub info: CatalogInfo,
}

/// `Contents.json` of a single `.imageset` directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub images: Vec<Variant>,
    pub info: CatalogInfo,
}

impl GroupDescriptor {
    pub fn contains_file(&self, filename: &str) -> bool {
        self.images.iter().any(|image| image.filename == filename)
    }
}

/// One scale-specific image inside an imageset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub idiom: Idiom,
    pub filename: String,
    pub scale: Scale,
}

impl Variant {
    pub fn universal(filename: impl Into<String>, scale: Scale) -> Self {
        Self {
            idiom: Idiom::Universal,
            filename: filename.into(),
            scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    Universal,
}

/// Pixel-density multiplier encoded by the `@2x`/`@3x` filename markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    #[serde(rename = "1x")]
    One,
    #[serde(rename = "2x")]
    Two,
    #[serde(rename = "3x")]
    Three,
}

impl Scale {
    /// Filename marker for the scale, `None` for the 1x baseline.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Scale::One => None,
            Scale::Two => Some("@2x"),
            Scale::Three => Some("@3x"),
        }
    }
}
