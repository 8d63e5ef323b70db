//! Implementation of `kinship complete <file>`.
//!
//! Suggests the parent rows a family file is missing: where a person has a
//! recorded child, their spouse is proposed as that child's other parent
//! unless already recorded. Nothing is written back; the output is meant to
//! be reviewed and appended by hand.
//!
//! Output (human mode): one `<parent> -> <child> (spouse of <via>)` line per
//! suggestion on stdout, and a count summary on stderr unless `--quiet`.
//! Output (JSON mode): `{"suggestions": [...], "relationships": [...],
//! "count"}` where `relationships` holds the suggestions as ready-to-append
//! input rows.
//!
//! Exit codes: 0 = success (including no suggestions), 2 = parse failure.
use std::io::Write as _;

use kinship_core::{FamilyFile, RelationshipEdge, SuggestedEdge, suggest_coparent_edges};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct CompleteOutput<'a> {
    suggestions: &'a [SuggestedEdge],
    relationships: Vec<RelationshipEdge>,
    count: usize,
}

/// Runs the `complete` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if writing to stdout or stderr fails.
pub fn run(family: &FamilyFile, format: &OutputFormat, quiet: bool) -> Result<(), CliError> {
    let graph = super::graph_for(family);
    let suggestions = suggest_coparent_edges(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &suggestions),
        OutputFormat::Json => super::write_json(
            &mut out,
            &CompleteOutput {
                suggestions: &suggestions,
                relationships: suggestions
                    .iter()
                    .map(SuggestedEdge::to_relationship_edge)
                    .collect(),
                count: suggestions.len(),
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))?;

    if !quiet && matches!(format, OutputFormat::Human) {
        let stderr = std::io::stderr();
        let mut err_out = stderr.lock();
        writeln!(err_out, "{} missing parent link(s) suggested", suggestions.len()).map_err(
            |e| CliError::IoError {
                source: "stderr".to_owned(),
                detail: e.to_string(),
            },
        )?;
    }
    Ok(())
}

fn print_human<W: std::io::Write>(w: &mut W, suggestions: &[SuggestedEdge]) -> std::io::Result<()> {
    for s in suggestions {
        writeln!(w, "{} -> {} (spouse of {})", s.parent, s.child, s.via)?;
    }
    Ok(())
}
