//! End-to-end scenarios: JSON family document → graph → classification.
#![allow(clippy::expect_used)]

use kinship_core::{
    BuildDiagnostic, KinshipGraph, KinshipTerm, RelationshipContext, build_graph_with_diagnostics,
    classify, classify_with_context, parse_family, shortest_path,
};

fn load(json: &str) -> KinshipGraph {
    let family = parse_family(json).expect("valid family document");
    build_graph_with_diagnostics(&family.people, &family.relationships).0
}

/// Spreadsheet-shaped rows: numeric ids, capitalised headers, mixed-case types.
const SHEET_EXPORT: &str = r#"{
  "People": [
    { "ID": 1, "First_Name": "Rose", "Last_Name": "Hart" },
    { "ID": 2, "First_Name": "Tom", "Last_Name": "Hart" },
    { "ID": 3, "First_Name": "Ivy", "Last_Name": "Hart" },
    { "ID": 4, "First_Name": "Sam", "Last_Name": "Hart" },
    { "ID": 5, "First_Name": "Lea", "Last_Name": "Moss" },
    { "ID": 6, "First_Name": "Kit", "Last_Name": "Hart" },
    { "ID": 7, "First_Name": "Max", "Last_Name": "Hart" },
    { "ID": 8, "First_Name": "Zoe", "Last_Name": "Vale" },
    { "ID": 9, "First_Name": "Ned", "Last_Name": "Hart" }
  ],
  "Relationship": [
    { "Person1_ID": 1, "Person2_ID": 2, "Relationship_Type": "Spouse" },
    { "Person1_ID": 1, "Person2_ID": 3, "Relationship_Type": "parent" },
    { "Person1_ID": 2, "Person2_ID": 3, "Relationship_Type": "PARENT" },
    { "Person1_ID": 4, "Person2_ID": 1, "Relationship_Type": "child" },
    { "Person1_ID": 4, "Person2_ID": 2, "Relationship_Type": "child" },
    { "Person1_ID": 4, "Person2_ID": 5, "Relationship_Type": "spouse" },
    { "Person1_ID": 4, "Person2_ID": 6, "Relationship_Type": "parent" },
    { "Person1_ID": 3, "Person2_ID": 7, "Relationship_Type": "parent" },
    { "Person1_ID": 2, "Person2_ID": 9, "Relationship_Type": "parent" },
    { "Person1_ID": 8, "Person2_ID": 9, "Relationship_Type": "parent" },
    { "Person1_ID": 3, "Person2_ID": 99, "Relationship_Type": "parent" }
  ]
}"#;

#[test]
fn numeric_ids_are_canonical_strings() {
    let g = load(SHEET_EXPORT);
    assert_eq!(g.person_count(), 9);
    assert_eq!(
        g.person_by_id("5").and_then(|p| p.first_name.as_deref()),
        Some("Lea")
    );
}

#[test]
fn unknown_person_rows_are_reported_not_fatal() {
    let family = parse_family(SHEET_EXPORT).expect("valid");
    let (g, diags) = build_graph_with_diagnostics(&family.people, &family.relationships);
    assert_eq!(g.parent_edge_count(), 8);
    assert!(diags.iter().any(|d| matches!(
        d,
        BuildDiagnostic::UnknownPerson { person_id: Some(id), .. } if id.as_str() == "99"
    )));
}

/// One blank endpoint, one untyped row and one nameless person among good
/// rows: the document still loads and only the bad rows are dropped.
const SHEET_WITH_BLANK_CELLS: &str = r#"{
  "People": [
    { "ID": 1, "First_Name": "Rose" },
    { "ID": "", "First_Name": "Ghost" },
    { "ID": 2, "First_Name": "Tom" },
    { "ID": 3, "First_Name": "Ivy" }
  ],
  "Relationship": [
    { "Person1_ID": 1, "Person2_ID": 3, "Relationship_Type": "parent" },
    { "Person1_ID": 2, "Person2_ID": "", "Relationship_Type": "parent" },
    { "Person1_ID": 2, "Person2_ID": 3 },
    { "Person1_ID": 1, "Person2_ID": 2, "Relationship_Type": "spouse" }
  ]
}"#;

#[test]
fn blank_cells_drop_only_their_rows() {
    let family = parse_family(SHEET_WITH_BLANK_CELLS).expect("blank cells are not fatal");
    assert_eq!(family.people.len(), 4);
    assert_eq!(family.relationships.len(), 4);

    let (g, diags) = build_graph_with_diagnostics(&family.people, &family.relationships);
    assert_eq!(g.person_count(), 3);
    assert_eq!(g.parent_edge_count(), 1);
    assert_eq!(
        diags,
        vec![
            BuildDiagnostic::MissingPersonId { row_index: 1 },
            BuildDiagnostic::UnknownPerson {
                edge_index: 1,
                person_id: None,
            },
            BuildDiagnostic::UnsupportedType {
                edge_index: 2,
                value: None,
            },
        ]
    );

    assert_eq!(classify(&g, "1", "3"), KinshipTerm::Parent);
    assert_eq!(classify(&g, "1", "2"), KinshipTerm::Spouse);
    assert_eq!(classify(&g, "2", "3"), KinshipTerm::NotRelated);
    assert_eq!(
        classify_with_context(&g, "2", "3").context,
        RelationshipContext::InLaw
    );
}

#[test]
fn half_sibling_scenario() {
    // Ivy (Rose + Tom) and Ned (Tom + Zoe) share only Tom.
    let g = load(SHEET_EXPORT);
    let result = classify_with_context(&g, "3", "9");
    assert_eq!(result.term, KinshipTerm::Sibling);
    assert_eq!(result.context, RelationshipContext::Half);
    assert_eq!(result.description, "Ivy is Ned's sibling (half)");
}

#[test]
fn grandparent_scenario() {
    let g = load(SHEET_EXPORT);
    assert_eq!(classify(&g, "1", "7").to_string(), "grandparent");
    assert_eq!(classify(&g, "7", "1").to_string(), "grandchild");
}

#[test]
fn cousin_scenario() {
    // Max (Ivy's child) and Kit (Sam's child) share Rose and Tom.
    let g = load(SHEET_EXPORT);
    assert_eq!(classify(&g, "7", "6").to_string(), "cousin");
    assert_eq!(classify(&g, "6", "7").to_string(), "cousin");
}

#[test]
fn aunt_uncle_scenario() {
    let g = load(SHEET_EXPORT);
    assert_eq!(classify(&g, "4", "7"), KinshipTerm::AuntUncle);
    assert_eq!(classify(&g, "7", "4"), KinshipTerm::NieceNephew);
}

#[test]
fn in_law_scenario() {
    // Lea married Sam; she has no ancestry of her own in the tree.
    let g = load(SHEET_EXPORT);
    let result = classify_with_context(&g, "5", "3");
    assert_eq!(result.term, KinshipTerm::NotRelated);
    assert_eq!(result.context, RelationshipContext::InLaw);
    assert_eq!(result.description, "Lea is Ivy's not related (in-law)");
}

#[test]
fn disconnected_scenario() {
    let g = load(
        r#"{ "people": [ { "id": "x" }, { "id": "y" } ], "relationships": [] }"#,
    );
    let result = classify_with_context(&g, "x", "y");
    assert_eq!(result.term, KinshipTerm::NotRelated);
    assert_eq!(result.context, RelationshipContext::None);
    assert_eq!(shortest_path(&g, "x", "y").expect("both exist"), None);
}

#[test]
fn path_through_marriage() {
    let g = load(SHEET_EXPORT);
    let path = shortest_path(&g, "5", "6")
        .expect("both exist")
        .expect("connected");
    let ids: Vec<&str> = path
        .iter()
        .filter_map(|&n| g.id(n).map(|id| id.as_str()))
        .collect();
    assert_eq!(ids, vec!["5", "4", "6"]);
}
