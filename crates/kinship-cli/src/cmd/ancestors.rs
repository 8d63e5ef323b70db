//! Implementation of `kinship ancestors <file> <id>`.
//!
//! Lists every ancestor of a person at its nearest generational distance,
//! nearest first, with the matching term (parent, grandparent, ...).
//!
//! Output (human mode): `<distance>\t<id>\t<name>\t<term>` per ancestor.
//! Output (JSON mode): `{"person", "ancestors": [{"id", "name", "distance",
//! "term"}], "count"}`.
//!
//! Exit codes: 0 = success (including no ancestors), 1 = unknown person,
//! 2 = parse failure.
use kinship_core::{FamilyFile, KinshipTerm, PersonId, ancestors_of};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct AncestorRow<'a> {
    id: &'a PersonId,
    name: &'a str,
    distance: u32,
    term: KinshipTerm,
}

#[derive(Serialize)]
struct AncestorsOutput<'a> {
    person: &'a str,
    ancestors: &'a [AncestorRow<'a>],
    count: usize,
}

/// Runs the `ancestors` command.
///
/// # Errors
///
/// Returns [`CliError::PersonNotFound`] if `id` is not in the file.
pub fn run(family: &FamilyFile, id: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = super::graph_for(family);
    let entries = ancestors_of(&graph, id)?;

    let rows: Vec<AncestorRow<'_>> = entries
        .iter()
        .filter_map(|entry| {
            let person = graph.person(entry.ancestor)?;
            Some(AncestorRow {
                id: graph.id(entry.ancestor)?,
                name: person.display_name(),
                distance: entry.distance,
                term: KinshipTerm::Ancestor {
                    generations: entry.distance.saturating_sub(1),
                },
            })
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &rows),
        OutputFormat::Json => super::write_json(
            &mut out,
            &AncestorsOutput {
                person: id,
                ancestors: &rows,
                count: rows.len(),
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, rows: &[AncestorRow<'_>]) -> std::io::Result<()> {
    for row in rows {
        writeln!(w, "{}\t{}\t{}\t{}", row.distance, row.id, row.name, row.term)?;
    }
    Ok(())
}
