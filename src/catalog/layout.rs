//! On-disk layout of an `.xcassets` directory and descriptor I/O.

use crate::catalog::model::{GroupDescriptor, RootDescriptor};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DESCRIPTOR_FILE: &str = "Contents.json";
pub const IMAGESET_SUFFIX: &str = ".imageset";

pub fn root_descriptor_path(catalog_root: &Path) -> PathBuf {
    catalog_root.join(DESCRIPTOR_FILE)
}

pub fn imageset_dir(catalog_root: &Path, asset_name: &str) -> PathBuf {
    catalog_root.join(format!("{asset_name}{IMAGESET_SUFFIX}"))
}

pub fn group_descriptor_path(imageset_dir: &Path) -> PathBuf {
    imageset_dir.join(DESCRIPTOR_FILE)
}

/// Write the root descriptor on one line, spaced as
/// `{"info": {"version": 1, "author": "xcode"}}`.
pub fn write_root_descriptor(catalog_root: &Path) -> Result<()> {
    let path = root_descriptor_path(catalog_root);
    let mut serializer = Serializer::with_formatter(Vec::new(), SpacedFormatter);
    RootDescriptor::default()
        .serialize(&mut serializer)
        .context("serializing root descriptor")?;
    fs::write(&path, serializer.into_inner())
        .with_context(|| format!("writing {}", path.display()))
}

/// Single-line formatter with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Read an imageset descriptor, or a fresh empty one when none exists yet.
///
/// A descriptor that exists but does not parse is an error.
pub fn load_group_descriptor(imageset_dir: &Path) -> Result<GroupDescriptor> {
    let path = group_descriptor_path(imageset_dir);
    if !path.exists() {
        return Ok(GroupDescriptor::default());
    }
    let raw = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Write an imageset descriptor pretty-printed with two-space indentation.
pub fn write_group_descriptor(imageset_dir: &Path, descriptor: &GroupDescriptor) -> Result<()> {
    let path = group_descriptor_path(imageset_dir);
    let body = serde_json::to_string_pretty(descriptor)
        .with_context(|| format!("serializing {}", path.display()))?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{Scale, Variant};
    use tempfile::TempDir;

    #[test]
    fn missing_descriptor_starts_empty() -> Result<()> {
        let temp = TempDir::new()?;
        let descriptor = load_group_descriptor(temp.path())?;
        assert!(descriptor.images.is_empty());
        assert_eq!(descriptor.info.author, "xcode");
        Ok(())
    }

    #[test]
    fn descriptor_round_trips_through_disk() -> Result<()> {
        let temp = TempDir::new()?;
        let mut descriptor = GroupDescriptor::default();
        descriptor.images.push(Variant::universal("A@2x.png", Scale::Two));
        write_group_descriptor(temp.path(), &descriptor)?;
        assert_eq!(load_group_descriptor(temp.path())?, descriptor);
        Ok(())
    }

    #[test]
    fn malformed_descriptor_is_an_error() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(group_descriptor_path(temp.path()), "{ not json")?;
        let err = load_group_descriptor(temp.path()).expect_err("should not parse");
        assert!(format!("{err:#}").contains("Contents.json"));
        Ok(())
    }

    #[test]
    fn root_descriptor_uses_spaced_separators() -> Result<()> {
        let temp = TempDir::new()?;
        write_root_descriptor(temp.path())?;
        let text = fs::read_to_string(root_descriptor_path(temp.path()))?;
        assert_eq!(text, r#"{"info": {"version": 1, "author": "xcode"}}"#);
        Ok(())
    }

    #[test]
    fn imageset_dir_appends_suffix() {
        let dir = imageset_dir(Path::new("out/Assets.xcassets"), "Logo");
        assert_eq!(dir, PathBuf::from("out/Assets.xcassets/Logo.imageset"));
        assert_eq!(
            group_descriptor_path(&dir),
            PathBuf::from("out/Assets.xcassets/Logo.imageset/Contents.json")
        );
    }
}
