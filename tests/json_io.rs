#![allow(non_snake_case)]
#![cfg(feature = "serde")]

use chordmerge::chordal::*;
use chordmerge::graph::Graph;
use serde_json::{json, Value};

#[test]
fn test_graph_from_json() {
    let G: Graph = serde_json::from_str(
        r#"{"nodes":4,"labels":["A","B","C","D"],"edges":[[0,1],[1,2],[2,3]]}"#,
    )
    .unwrap();
    assert_eq!(G.nnodes(), 4);
    assert_eq!(G.nedges(), 3);
    assert_eq!(G.label(2), Some("C"));

    // invalid edges are rejected at deserialization
    assert!(serde_json::from_str::<Graph>(r#"{"nodes":2,"edges":[[0,2]]}"#).is_err());
}

#[test]
fn test_settings_from_json() {
    let settings: DecompositionSettings =
        serde_json::from_str(r#"{"ordering":"natural","verbose":true}"#).unwrap();
    assert_eq!(settings.ordering, "natural");
    assert!(settings.verbose);
    assert_eq!(settings.merge_method, "greedy");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_provenance_json() {
    let G = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)])
        .unwrap()
        .with_labels(["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect())
        .unwrap();
    let result = decompose(&G).unwrap();
    let value = serde_json::to_value(&result.provenance).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    let links = value["links"].as_array().unwrap();

    // 4 buses, 3 cliques, 2 merges
    assert_eq!(nodes.len(), 9);
    assert_eq!(
        nodes[0],
        json!({"id": 0, "kind": "bus", "label": "A", "size": 1, "xPos": 0})
    );
    assert_eq!(
        nodes[4],
        json!({"id": 4, "kind": "clique", "label": "Clique 1", "size": 2, "xPos": 1})
    );
    assert_eq!(
        nodes[8],
        json!({"id": 8, "kind": "merge", "label": "Merge 2", "size": 4, "cost": 2, "xPos": 3})
    );

    // 6 bus memberships and 2 links per merge
    assert_eq!(links.len(), 10);
    let into_last: Vec<&Value> = links
        .iter()
        .filter(|l| l["target"] == 8)
        .collect();
    assert_eq!(
        into_last,
        vec![
            &json!({"source": 7, "target": 8, "value": 3}),
            &json!({"source": 6, "target": 8, "value": 2}),
        ]
    );
}

#[test]
fn test_result_json() {
    let G = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    let result = decompose(&G).unwrap();

    let mut buffer = Vec::new();
    result.write_to_json(&mut buffer).unwrap();
    let value: Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(value["ninitial"], 3);
    assert_eq!(
        value["linkage"],
        json!([
            {"first": 0, "second": 1, "cost": -2, "size": 3},
            {"first": 3, "second": 2, "cost": 2, "size": 4}
        ])
    );
    assert_eq!(
        value["cost_trace"][0],
        json!({"sdp_cost": 36, "linking_constraints": 2, "largest_clique": 2})
    );
    assert_eq!(value["dendrogram"][1], json!([3.0, 2.0, 2.0, 3.0]));
}
