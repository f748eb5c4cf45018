//! Asset catalog model.
//!
//! An `.xcassets` directory holds a root `Contents.json` plus one
//! `<name>.imageset` directory per asset, each with its own descriptor listing
//! the scale variants. `classify` maps source file names onto that structure,
//! `merge` accumulates variants without touching disk, and `layout` owns the
//! paths and descriptor reads/writes.

pub mod classify;
pub mod layout;
pub mod merge;
pub mod model;

pub use classify::{Classified, IMAGE_EXTENSIONS, classify, is_catalog_image};
pub use layout::{
    DESCRIPTOR_FILE, IMAGESET_SUFFIX, group_descriptor_path, imageset_dir, load_group_descriptor,
    root_descriptor_path, write_group_descriptor, write_root_descriptor,
};
pub use merge::{Merge, merge_variant};
pub use model::{
    CATALOG_AUTHOR, CATALOG_VERSION, CatalogInfo, GroupDescriptor, Idiom, RootDescriptor, Scale,
    Variant,
};
