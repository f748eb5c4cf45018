//! Build Xcode asset catalogs whose images are 1x1 placeholders.
//!
//! The catalog keeps every name and scale of the source tree while the pixel
//! content collapses to a single pixel, which is enough for projects that
//! need the catalog to exist but never display the artwork.

pub mod builder;
pub mod catalog;
pub mod codec;

pub use builder::{CatalogBuilder, PLACEHOLDER_SIZE, Reporter, StdoutReporter, build_catalog};
pub use catalog::{
    Classified, GroupDescriptor, Merge, RootDescriptor, Scale, Variant, classify,
    is_catalog_image, merge_variant,
};
pub use codec::{ImageCodec, RasterCodec};
