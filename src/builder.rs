//! Catalog build pipeline.
//!
//! A build resets the output directory, seeds the root descriptor, then walks
//! the input tree one file at a time: classify, shrink into the imageset
//! directory, merge the variant into that imageset's descriptor. Codec
//! failures are reported and skipped; every other error aborts the build.

use crate::catalog::{
    Classified, Variant, classify, imageset_dir, is_catalog_image, load_group_descriptor,
    merge_variant, write_group_descriptor, write_root_descriptor,
};
use crate::codec::{ImageCodec, RasterCodec};
use anyhow::{Context, Error, Result, bail};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Pixel dimensions of every placeholder image.
pub const PLACEHOLDER_SIZE: (u32, u32) = (1, 1);

/// Receives per-file progress from a build.
pub trait Reporter {
    fn processed(&mut self, file_name: &str);
    fn failed(&mut self, file_name: &str, error: &Error);
}

/// Prints one line per file on stdout.
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn processed(&mut self, file_name: &str) {
        let (width, height) = PLACEHOLDER_SIZE;
        println!("Processed: {file_name} -> {width}x{height}");
    }

    fn failed(&mut self, file_name: &str, error: &Error) {
        println!("Failed to process {file_name}: {error:#}");
    }
}

/// Build `output` from the images under `input` with the default codec,
/// reporting progress on stdout.
pub fn build_catalog(input: &Path, output: &Path) -> Result<()> {
    CatalogBuilder::new(RasterCodec).build(input, output, &mut StdoutReporter)
}

pub struct CatalogBuilder<C> {
    codec: C,
}

impl<C: ImageCodec> CatalogBuilder<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn build(&self, input: &Path, output: &Path, reporter: &mut dyn Reporter) -> Result<()> {
        if !input.is_dir() {
            bail!("input directory {} does not exist", input.display());
        }
        fs::read_dir(input).with_context(|| format!("reading {}", input.display()))?;

        reset_output(output)?;
        write_root_descriptor(output)?;

        let walker = WalkDir::new(input).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable entries below the root are reported and skipped.
                Err(err) if err.depth() > 0 => {
                    let location = err
                        .path()
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| input.display().to_string());
                    reporter.failed(&location, &Error::new(err));
                    continue;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("walking {}", input.display()));
                }
            };
            if is_directory(&entry) {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                // Non-UTF-8 names cannot be written into a descriptor.
                continue;
            };
            if !is_catalog_image(file_name) {
                continue;
            }
            self.add_image(entry.path(), classify(file_name), output, reporter)?;
        }
        Ok(())
    }

    fn add_image(
        &self,
        source: &Path,
        classified: Classified,
        output: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let dir = imageset_dir(output, &classified.asset_name);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let dest = dir.join(&classified.file_name);
        let (width, height) = PLACEHOLDER_SIZE;
        if let Err(err) = self.codec.shrink(source, &dest, width, height) {
            reporter.failed(&classified.file_name, &err);
            return Ok(());
        }
        reporter.processed(&classified.file_name);

        let descriptor = load_group_descriptor(&dir)?;
        let variant = Variant::universal(classified.file_name, classified.scale);
        let (descriptor, _) = merge_variant(descriptor, variant);
        write_group_descriptor(&dir, &descriptor)
    }
}

/// Directories, including symlinks to directories, are not catalog entries.
/// Symlinks to files count as files.
fn is_directory(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir())
}

fn reset_output(output: &Path) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("removing existing {}", output.display()))?;
    }
    fs::create_dir_all(output).with_context(|| format!("creating {}", output.display()))
}
