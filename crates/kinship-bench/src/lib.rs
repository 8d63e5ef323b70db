//! Family-tree generator and benchmark utilities for kinship.
//!
//! This crate provides deterministic generation of synthetic pedigrees for
//! benchmarking and property-based testing of `kinship-core`.

use std::path::PathBuf;

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_family};

/// Returns the path where the huge-tier family fixture is stored on disk.
///
/// The file lives under `target/bench-fixtures/family-huge.json` so it is
/// gitignored and shared between the `gen-family` binary and any benchmark
/// that wants a file-backed input.
pub fn huge_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join("family-huge.json")
}
