//! Implementation of `kinship relatives <file> <id>`.
//!
//! Relates every other person in the file to the given person and lists the
//! ones with some relationship: blood, marriage or in-law. With
//! `--include-unrelated`, people with no relationship at all are listed too.
//!
//! Output (human mode): `<id>\t<name>\t<term><context>` per person, in file
//! order.
//! Output (JSON mode): `{"person", "relatives": [{"id", "name", "term",
//! "context", "description"}], "count"}`.
//!
//! Exit codes: 0 = success, 1 = unknown person, 2 = parse failure.
use kinship_core::{
    FamilyFile, KinshipTerm, PersonId, PersonRecord, RelationshipContext, RelationshipResult,
    classify_all,
};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct RelativeRow<'a> {
    id: &'a PersonId,
    name: &'a str,
    #[serde(flatten)]
    result: &'a RelationshipResult,
}

#[derive(Serialize)]
struct RelativesOutput<'a> {
    person: &'a str,
    relatives: &'a [RelativeRow<'a>],
    count: usize,
}

/// Runs the `relatives` command.
///
/// # Errors
///
/// Returns [`CliError::PersonNotFound`] if `id` is not in the file.
pub fn run(
    family: &FamilyFile,
    id: &str,
    include_unrelated: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::graph_for(family);
    let results = classify_all(&graph, id)?;

    let rows: Vec<RelativeRow<'_>> = results
        .iter()
        .filter(|(_, result)| include_unrelated || is_related(result))
        .map(|(other, result)| RelativeRow {
            id: other,
            name: graph
                .person_by_id(other.as_str())
                .map_or(other.as_str(), PersonRecord::display_name),
            result,
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &rows),
        OutputFormat::Json => super::write_json(
            &mut out,
            &RelativesOutput {
                person: id,
                relatives: &rows,
                count: rows.len(),
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

/// An in-law is kept even though its term is `not related`.
fn is_related(result: &RelationshipResult) -> bool {
    result.term != KinshipTerm::NotRelated || result.context != RelationshipContext::None
}

fn print_human<W: std::io::Write>(w: &mut W, rows: &[RelativeRow<'_>]) -> std::io::Result<()> {
    for row in rows {
        writeln!(
            w,
            "{}\t{}\t{}{}",
            row.id, row.name, row.result.term, row.result.context
        )?;
    }
    Ok(())
}
