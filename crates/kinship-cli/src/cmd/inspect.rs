//! Implementation of `kinship inspect <file>`.
//!
//! Builds the graph and prints summary statistics plus data-quality findings:
//! - people, parent links and spouse pairs
//! - one-sided spouse pointers (left behind by remarriage rows)
//! - roots, leaves and the deepest generation
//! - every skipped or overwritten relationship row
//! - ancestry cycles (someone recorded as their own ancestor)
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed, followed by one line
//! per finding.
//!
//! Exit codes: 0 = success (findings do not fail the command), 2 = parse
//! failure.
use kinship_core::{
    FamilyFile, GraphStats, KinshipGraph, PersonId, build_graph_with_diagnostics,
    detect_ancestry_cycles, graph_stats,
};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

/// Everything `inspect` reports about one family file.
#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    stats: GraphStats,
    diagnostics: Vec<String>,
    cycles: Vec<Vec<&'a PersonId>>,
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if writing to stdout fails.
pub fn run(family: &FamilyFile, format: &OutputFormat) -> Result<(), CliError> {
    let (graph, diagnostics) = build_graph_with_diagnostics(&family.people, &family.relationships);
    let report = InspectReport {
        stats: graph_stats(&graph),
        diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        cycles: cycle_ids(&graph),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => super::write_json(&mut out, &report),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn cycle_ids(graph: &KinshipGraph) -> Vec<Vec<&PersonId>> {
    detect_ancestry_cycles(graph)
        .iter()
        .map(|cycle| cycle.iter().filter_map(|&idx| graph.id(idx)).collect())
        .collect()
}

fn print_human<W: std::io::Write>(w: &mut W, report: &InspectReport<'_>) -> std::io::Result<()> {
    let s = &report.stats;
    writeln!(w, "people:             {}", s.people)?;
    writeln!(w, "parent links:       {}", s.parent_edges)?;
    writeln!(w, "spouse pairs:       {}", s.spouse_pairs)?;
    writeln!(w, "one-sided spouses:  {}", s.one_sided_spouses)?;
    writeln!(w, "roots:              {}", s.roots)?;
    writeln!(w, "leaves:             {}", s.leaves)?;
    writeln!(w, "generations:        {}", s.deepest_generation)?;
    writeln!(w, "skipped rows:       {}", report.diagnostics.len())?;
    writeln!(w, "ancestry cycles:    {}", report.cycles.len())?;

    for diagnostic in &report.diagnostics {
        writeln!(w, "warning: {diagnostic}")?;
    }
    for cycle in &report.cycles {
        let ids: Vec<&str> = cycle.iter().map(|id| id.as_str()).collect();
        writeln!(w, "cycle: {}", ids.join(" -> "))?;
    }
    Ok(())
}
