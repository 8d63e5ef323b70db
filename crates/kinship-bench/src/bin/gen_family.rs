//! Generates the huge-tier family fixture to disk.
//!
//! Writes `target/bench-fixtures/family-huge.json`, which can be fed to the
//! `kinship` binary for end-to-end timing.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use kinship_bench::{SizeTier, generate_family, huge_fixture_path};

fn main() -> Result<(), Box<dyn Error>> {
    let path = huge_fixture_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Generating Huge tier...");
    let family = generate_family(&SizeTier::Huge.config(42));
    eprintln!(
        "Generated {} people, {} relationship rows",
        family.people.len(),
        family.relationships.len()
    );

    eprintln!("Writing JSON to {}...", path.display());
    let writer = BufWriter::new(fs::File::create(&path)?);
    serde_json::to_writer(writer, &family)?;

    let size = fs::metadata(&path)?.len();
    eprintln!("JSON: {:.1} MB", size as f64 / (1024.0 * 1024.0));
    Ok(())
}
