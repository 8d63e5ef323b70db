//! Implementation of `kinship path <file> <from> <to>`.
//!
//! Finds the shortest chain of parent, child and spouse links between two
//! people. Where several chains tie, the one found first (parents before
//! children before spouse) is reported.
//!
//! Output (human mode): the ids on one line, separated by ` -> `, followed by
//! the names on a second line.
//! Output (JSON mode): `{"path": [{"id", "name"}, ...], "length": N}` where
//! `length` counts links, not people.
//!
//! Exit codes: 0 = path found, 1 = unknown person / no path, 2 = parse
//! failure.
use kinship_core::{FamilyFile, KinshipGraph, PersonId, shortest_path};
use petgraph::stable_graph::NodeIndex;
use serde::Serialize;

use crate::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct Step<'a> {
    id: &'a PersonId,
    name: &'a str,
}

#[derive(Serialize)]
struct PathOutput<'a> {
    path: Vec<Step<'a>>,
    length: usize,
}

/// Runs the `path` command.
///
/// # Errors
///
/// - [`CliError::PersonNotFound`] if either id is not in the file.
/// - [`CliError::NoPath`] if the two people are not connected.
pub fn run(
    family: &FamilyFile,
    from: &str,
    to: &str,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::graph_for(family);
    let Some(nodes) = shortest_path(&graph, from, to)? else {
        return Err(CliError::NoPath {
            from: from.to_owned(),
            to: to.to_owned(),
        });
    };
    let steps = steps(&graph, &nodes);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &steps),
        OutputFormat::Json => super::write_json(
            &mut out,
            &PathOutput {
                length: steps.len().saturating_sub(1),
                path: steps,
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn steps<'g>(graph: &'g KinshipGraph, nodes: &[NodeIndex]) -> Vec<Step<'g>> {
    nodes
        .iter()
        .filter_map(|&idx| {
            let person = graph.person(idx)?;
            Some(Step {
                id: graph.id(idx)?,
                name: person.display_name(),
            })
        })
        .collect()
}

fn print_human<W: std::io::Write>(w: &mut W, steps: &[Step<'_>]) -> std::io::Result<()> {
    let ids: Vec<&str> = steps.iter().map(|s| s.id.as_str()).collect();
    let names: Vec<&str> = steps.iter().map(|s| s.name).collect();
    writeln!(w, "{}", ids.join(" -> "))?;
    writeln!(w, "{}", names.join(" -> "))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use kinship_core::{PersonRecord, RelationshipEdge, build_graph};

    use super::*;

    fn id(s: &str) -> PersonId {
        PersonId::try_from(s).expect("valid id")
    }

    #[test]
    fn human_output_lists_ids_then_names() {
        let people = vec![
            PersonRecord::new(id("1")).with_first_name("Ann"),
            PersonRecord::new(id("2")),
        ];
        let edges = vec![RelationshipEdge::parent(id("1"), id("2"))];
        let graph = build_graph(&people, &edges);
        let nodes = shortest_path(&graph, "2", "1")
            .expect("known ids")
            .expect("connected");

        let mut buf = Vec::new();
        print_human(&mut buf, &steps(&graph, &nodes)).expect("write to vec");
        assert_eq!(String::from_utf8(buf).expect("utf-8"), "2 -> 1\n2 -> Ann\n");
    }
}
