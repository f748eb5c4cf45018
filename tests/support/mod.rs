#![allow(dead_code)]

use anyhow::{Context, Error, Result};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use placeholder_catalog::Reporter;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the compiled `build-catalog` binary.
pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_build-catalog"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    Ok(output)
}

/// Write a solid-color PNG, creating parent directories as needed.
pub fn write_png(path: &Path, width: u32, height: u32) -> Result<()> {
    ensure_parent(path)?;
    RgbaImage::from_pixel(width, height, Rgba([40, 120, 200, 255]))
        .save(path)
        .with_context(|| format!("writing fixture {}", path.display()))
}

pub fn write_jpeg(path: &Path, width: u32, height: u32) -> Result<()> {
    ensure_parent(path)?;
    RgbImage::from_pixel(width, height, Rgb([250, 80, 10]))
        .save(path)
        .with_context(|| format!("writing fixture {}", path.display()))
}

pub fn write_bytes(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).with_context(|| format!("writing fixture {}", path.display()))
}

pub fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// `images` entries of an imageset descriptor.
pub fn image_entries(descriptor: &Value) -> Vec<Value> {
    descriptor
        .get("images")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

pub fn image_filenames(descriptor: &Value) -> Vec<String> {
    image_entries(descriptor)
        .iter()
        .filter_map(|entry| entry.get("filename").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Sorted names of the direct children of `dir`.
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Reporter that records events instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub processed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl Reporter for RecordingReporter {
    fn processed(&mut self, file_name: &str) {
        self.processed.push(file_name.to_string());
    }

    fn failed(&mut self, file_name: &str, error: &Error) {
        self.failed.push((file_name.to_string(), format!("{error:#}")));
    }
}
