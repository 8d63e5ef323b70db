//! Implementation of `kinship relate <file> <a> [<b> | --all]`.
//!
//! Names the relationship of person A to person B ("A is B's ...").
//! With `--all`, A is related to every other person in the file, in file
//! order.
//!
//! Output (human mode): the description sentence, one per line.
//! Output (JSON mode): `{"a", "b", "term", "context", "description"}` for a
//! pair, or `{"person", "relationships": [...]}` for `--all`.
//!
//! Exit codes: 0 = success, 1 = unknown person id, 2 = parse failure.
use kinship_core::{FamilyFile, KinshipGraph, PersonId, RelationshipResult};
use kinship_core::{classify_all, classify_with_context};
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct PairOutput<'a> {
    a: &'a str,
    b: &'a str,
    #[serde(flatten)]
    result: &'a RelationshipResult,
}

#[derive(Serialize)]
struct RelatedOutput<'a> {
    id: &'a PersonId,
    #[serde(flatten)]
    result: &'a RelationshipResult,
}

#[derive(Serialize)]
struct AllOutput<'a> {
    person: &'a str,
    relationships: Vec<RelatedOutput<'a>>,
}

/// Runs `relate` for a single pair.
///
/// # Errors
///
/// Returns [`CliError::PersonNotFound`] if either id is not in the file.
pub fn run(family: &FamilyFile, a: &str, b: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = super::graph_for(family);
    require_person(&graph, a)?;
    require_person(&graph, b)?;

    let result = classify_with_context(&graph, a, b);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human_pair(&mut out, &result),
        OutputFormat::Json => super::write_json(
            &mut out,
            &PairOutput {
                a,
                b,
                result: &result,
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

/// Runs `relate --all`: person `a` against everyone else.
///
/// # Errors
///
/// Returns [`CliError::PersonNotFound`] if `a` is not in the file.
pub fn run_all(family: &FamilyFile, a: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = super::graph_for(family);
    let results = classify_all(&graph, a)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human_all(&mut out, &results),
        OutputFormat::Json => super::write_json(
            &mut out,
            &AllOutput {
                person: a,
                relationships: results
                    .iter()
                    .map(|(id, result)| RelatedOutput { id, result })
                    .collect(),
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn require_person(graph: &KinshipGraph, id: &str) -> Result<(), CliError> {
    match graph.node_index(id) {
        Some(_) => Ok(()),
        None => Err(CliError::PersonNotFound {
            person_id: id.to_owned(),
        }),
    }
}

fn print_human_pair<W: std::io::Write>(
    w: &mut W,
    result: &RelationshipResult,
) -> std::io::Result<()> {
    writeln!(w, "{}", result.description)
}

fn print_human_all<W: std::io::Write>(
    w: &mut W,
    results: &[(PersonId, RelationshipResult)],
) -> std::io::Result<()> {
    for (id, result) in results {
        writeln!(w, "{id}\t{}", result.description)?;
    }
    Ok(())
}
