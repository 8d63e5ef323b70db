/// Command module for the `kinship` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed family file plus its arguments and returns
/// `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod ancestors;
pub mod complete;
pub mod inspect;
pub mod path;
pub mod relate;
pub mod relatives;

use kinship_core::{FamilyFile, KinshipGraph, build_graph_with_diagnostics};
use tracing::warn;

/// Builds the kinship graph for a command that only needs the graph.
///
/// Skipped and overwritten rows are summarised at warn level; the per-row
/// detail is logged by `kinship-core` at debug level (`-v`).
fn graph_for(family: &FamilyFile) -> KinshipGraph {
    let (graph, diagnostics) = build_graph_with_diagnostics(&family.people, &family.relationships);
    if !diagnostics.is_empty() {
        warn!(
            count = diagnostics.len(),
            "some relationship rows were skipped or overwritten; run `kinship inspect` for detail"
        );
    }
    graph
}

/// Serialises `value` as pretty JSON followed by a newline.
fn write_json<W: std::io::Write, T: serde::Serialize>(w: &mut W, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
