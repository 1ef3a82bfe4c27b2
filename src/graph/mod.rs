//! Undirected simple graphs over dense node indices.
//!
//! A [`Graph`] is the input boundary of the decomposition pipeline: an
//! already materialized network whose nodes are numbered `0..n` and whose
//! edges are unordered pairs.  Self-loops are rejected and repeated edges
//! are stored once, so the graph is always simple.

#![allow(non_snake_case)]

use crate::algebra::CscMatrix;
use indexmap::IndexSet;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod chordality;
pub use chordality::*;

/// Ordered set of node indices
pub type VertexSet = IndexSet<usize>;

/// Error type returned by graph construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge endpoint is not a node of the graph
    #[error("node {node} is out of bounds for a graph with {n} nodes")]
    NodeOutOfBounds { node: usize, n: usize },
    /// Edge joins a node to itself
    #[error("self-loop at node {0}")]
    SelfLoop(usize),
    /// Number of labels does not match the number of nodes
    #[error("{labels} labels supplied for a graph with {n} nodes")]
    LabelCountMismatch { labels: usize, n: usize },
}

/// Undirected simple graph on the nodes `0..n`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "GraphData", into = "GraphData")
)]
pub struct Graph {
    adjacency: Vec<VertexSet>,
    labels: Option<Vec<String>>,
    nedges: usize,
}

impl Graph {
    /// A graph with `n` nodes and no edges
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: (0..n).map(|_| VertexSet::new()).collect(),
            labels: None,
            nedges: 0,
        }
    }

    /// Build a graph from an edge list.  Repeated edges are merged.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut G = Graph::new(n);
        for &(u, v) in edges {
            G.add_edge(u, v)?;
        }
        Ok(G)
    }

    /// Attach a human-readable label to every node
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self, GraphError> {
        if labels.len() != self.nnodes() {
            return Err(GraphError::LabelCountMismatch {
                labels: labels.len(),
                n: self.nnodes(),
            });
        }
        self.labels = Some(labels);
        Ok(self)
    }

    /// Insert the edge `{u, v}`.  Returns `false` if it was already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        let n = self.nnodes();
        for node in [u, v] {
            if node >= n {
                return Err(GraphError::NodeOutOfBounds { node, n });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let is_new = self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        if is_new {
            self.nedges += 1;
        }
        Ok(is_new)
    }

    pub fn nnodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn nedges(&self) -> usize {
        self.nedges
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|adj| adj.contains(&v))
    }

    pub fn neighbors(&self, v: usize) -> &VertexSet {
        &self.adjacency[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Node label, if labels were attached
    pub fn label(&self, v: usize) -> Option<&str> {
        self.labels.as_ref().map(|l| l[v].as_str())
    }

    /// All edges as `(u, v)` with `u < v`, in lexicographic order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.nedges);
        for (u, adj) in self.adjacency.iter().enumerate() {
            let mut higher: Vec<usize> = adj.iter().copied().filter(|&v| v > u).collect();
            higher.sort_unstable();
            edges.extend(higher.into_iter().map(|v| (u, v)));
        }
        edges
    }

    /// True if every edge of `other` is an edge of `self` on the same node set
    pub fn is_supergraph_of(&self, other: &Graph) -> bool {
        self.nnodes() == other.nnodes()
            && other.edges().iter().all(|&(u, v)| self.has_edge(u, v))
    }

    /// Connected components, each sorted, ordered by smallest member
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let n = self.nnodes();
        let mut visited = vec![false; n];
        let mut components = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            let mut component = vec![root];
            let mut stack = vec![root];
            visited[root] = true;
            while let Some(v) = stack.pop() {
                for &w in &self.adjacency[v] {
                    if !visited[w] {
                        visited[w] = true;
                        component.push(w);
                        stack.push(w);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }

    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// Upper triangle of `W = A + D`, where `A` is the 0/1 adjacency
    /// matrix and `D[i,i] = degree(i) + 1`.  `W` is strictly diagonally
    /// dominant with a positive diagonal, hence positive definite.
    pub fn dominant_pattern_matrix(&self) -> CscMatrix<f64> {
        let n = self.nnodes();
        let nnz = self.nedges + n;
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(nnz);
        let mut nzval = Vec::with_capacity(nnz);

        colptr.push(0);
        for j in 0..n {
            let mut rows: Vec<usize> = self.adjacency[j].iter().copied().filter(|&i| i < j).collect();
            rows.sort_unstable();
            nzval.extend(std::iter::repeat(1.0).take(rows.len()));
            rowval.extend(rows);
            rowval.push(j);
            nzval.push((self.degree(j) + 1) as f64);
            colptr.push(rowval.len());
        }
        CscMatrix::new(n, n, colptr, rowval, nzval)
    }

    /// True if the graph admits a perfect elimination ordering
    pub fn is_chordal(&self) -> bool {
        perfect_elimination_ordering(self).is_some()
    }
}

// serialized form of a graph: node count, optional labels and an edge list
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GraphData {
    nodes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<String>>,
    edges: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphData> for Graph {
    type Error = GraphError;
    fn try_from(data: GraphData) -> Result<Self, GraphError> {
        let G = Graph::from_edges(data.nodes, &data.edges)?;
        match data.labels {
            Some(labels) => G.with_labels(labels),
            None => Ok(G),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphData {
    fn from(G: Graph) -> Self {
        GraphData {
            nodes: G.nnodes(),
            edges: G.edges(),
            labels: G.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edges() {
        let mut G = Graph::new(3);
        assert!(G.add_edge(0, 1).unwrap());
        assert!(!G.add_edge(1, 0).unwrap());
        assert_eq!(G.nedges(), 1);
        assert!(G.has_edge(1, 0));
        assert_eq!(G.add_edge(2, 2), Err(GraphError::SelfLoop(2)));
        assert_eq!(
            G.add_edge(0, 3),
            Err(GraphError::NodeOutOfBounds { node: 3, n: 3 })
        );
    }

    #[test]
    fn test_edges_sorted() {
        let G = Graph::from_edges(4, &[(3, 0), (2, 1), (0, 1), (1, 3)]).unwrap();
        assert_eq!(G.edges(), vec![(0, 1), (0, 3), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_labels() {
        let G = Graph::new(2);
        assert_eq!(
            G.clone().with_labels(vec!["a".into()]),
            Err(GraphError::LabelCountMismatch { labels: 1, n: 2 })
        );
        let G = G.with_labels(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(G.label(1), Some("b"));
    }

    #[test]
    fn test_components() {
        let G = Graph::from_edges(5, &[(0, 3), (1, 4)]).unwrap();
        assert_eq!(
            G.connected_components(),
            vec![vec![0, 3], vec![1, 4], vec![2]]
        );
        assert!(!G.is_connected());
        assert!(Graph::new(0).is_connected());
    }

    #[test]
    fn test_dominant_pattern_matrix() {
        // path 0 - 1 - 2
        let G = Graph::from_edges(3, &[(1, 2), (0, 1)]).unwrap();
        let W = G.dominant_pattern_matrix();
        assert!(W.is_triu());
        assert_eq!(W.colptr, vec![0, 1, 3, 5]);
        assert_eq!(W.rowval, vec![0, 0, 1, 1, 2]);
        assert_eq!(W.nzval, vec![2., 1., 3., 1., 2.]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_graph_json() {
        let G = Graph::from_edges(3, &[(0, 2), (1, 2)]).unwrap();
        let json = serde_json::to_string(&G).unwrap();
        assert_eq!(json, r#"{"nodes":3,"edges":[[0,2],[1,2]]}"#);
        let H: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(G.edges(), H.edges());

        let bad = serde_json::from_str::<Graph>(r#"{"nodes":2,"edges":[[0,0]]}"#);
        assert!(bad.is_err());
    }
}
