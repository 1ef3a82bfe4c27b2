use super::*;
use serde::Serialize;
use std::io::{self, Write};

// Document layout for a decomposition result.  Cliques are listed by
// history index; linkage rows refer to those indices.

#[derive(Serialize)]
struct JsonDecomposition<'a> {
    nodes: usize,
    fill_in: &'a [(usize, usize)],
    elimination_order: &'a [usize],
    cliques: Vec<&'a Clique>,
    ninitial: usize,
    linkage: &'a [LinkageRow],
    dendrogram: Vec<[f64; 4]>,
    cost_trace: &'a [CostTraceEntry],
    provenance: &'a ProvenanceGraph,
}

impl DecompositionResult {
    /// Write linkage, cost trace, cliques and provenance as a single JSON
    /// document.
    pub fn write_to_json(&self, out: &mut impl Write) -> Result<(), io::Error> {
        let json_data = JsonDecomposition {
            nodes: self.extension.graph.nnodes(),
            fill_in: &self.extension.fill_in,
            elimination_order: &self.extension.elimination_order,
            cliques: self.history.iter().collect(),
            ninitial: self.history.ninitial(),
            linkage: self.linkage.rows(),
            dendrogram: self.linkage.to_dendrogram(),
            cost_trace: &self.cost_trace,
            provenance: &self.provenance,
        };

        let json = serde_json::to_string(&json_data)?;
        out.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[test]
fn test_write_to_json() {
    let graph = crate::graph::Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let result = decompose(&graph).unwrap();

    let mut buffer = Vec::new();
    result.write_to_json(&mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(value["nodes"], 3);
    assert_eq!(value["cliques"], serde_json::json!([[0, 1], [1, 2], [0, 1, 2]]));
    assert_eq!(value["linkage"][0]["cost"], -2);
    assert_eq!(value["provenance"]["nodes"][0]["kind"], "bus");
    assert_eq!(value["provenance"]["nodes"][5]["xPos"], 2);
    assert_eq!(value["provenance"]["links"].as_array().unwrap().len(), 6);
}
