//! Pure descriptor merging for imagesets.

use crate::catalog::model::{GroupDescriptor, Variant};

/// Outcome of [`merge_variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    Appended,
    AlreadyPresent,
}

/// Append `variant` unless an entry with the same filename already exists.
///
/// Filenames stay unique within a descriptor; an existing entry is never
/// replaced, even when its scale differs.
pub fn merge_variant(mut descriptor: GroupDescriptor, variant: Variant) -> (GroupDescriptor, Merge) {
    if descriptor.contains_file(&variant.filename) {
        return (descriptor, Merge::AlreadyPresent);
    }
    descriptor.images.push(variant);
    (descriptor, Merge::Appended)
}
