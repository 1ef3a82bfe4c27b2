use super::*;
use crate::algebra::*;
use itertools::Itertools;

// The clique graph has one node per active clique and an edge between
// every pair of cliques that share at least one network node.  Edge
// weights are the negated overlap, so a minimum weight spanning tree
// keeps the pairs with the largest intersections.
//
// Edges are generated for pairs (i,j), i < j, in the order the active
// cliques are given.  Kruskal sorts them stably by weight, so among
// equal weights the first generated edge wins.  Within an edge the
// lexicographically smaller clique comes first, which for the initial
// maximal cliques is also history order.

/// An edge of the clique graph between two cliques, addressed by history index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliqueEdge {
    pub first: usize,
    pub second: usize,
    /// number of network nodes shared by both cliques
    pub overlap: usize,
}

impl CliqueEdge {
    pub fn weight(&self) -> isize {
        -(self.overlap as isize)
    }
}

/// Weighted intersection graph over a set of active cliques.
#[derive(Debug, Clone)]
pub struct CliqueGraph {
    nodes: Vec<usize>,
    edges: Vec<CliqueEdge>,
    // positions in `nodes` of the endpoints of each edge
    ends: Vec<(usize, usize)>,
}

impl CliqueGraph {
    /// Build the clique graph over the cliques `active` of `history`.
    pub fn new(history: &CliqueHistory, active: &[usize]) -> Self {
        let (edges, ends) = active
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter_map(|((i, &ci), (k, &ck))| {
                let overlap = history[ci].intersect_dim(&history[ck]);
                if overlap == 0 {
                    return None;
                }
                // endpoints are stored lexicographically smaller clique first
                let (first, second) = if history[ck].iter().lt(history[ci].iter()) {
                    (ck, ci)
                } else {
                    (ci, ck)
                };
                let edge = CliqueEdge {
                    first,
                    second,
                    overlap,
                };
                Some((edge, (i, k)))
            })
            .unzip();

        Self {
            nodes: active.to_vec(),
            edges,
            ends,
        }
    }

    /// history indices of the cliques in the graph
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// all edges, in generation order
    pub fn edges(&self) -> &[CliqueEdge] {
        &self.edges
    }

    /// Minimum weight spanning tree by Kruskal's algorithm.
    ///
    /// Fails with [`ChordalError::DisconnectedCliqueGraph`] if the graph
    /// has more than one connected component.  The returned edges are in
    /// generation order, not in the order Kruskal accepted them.
    pub fn spanning_tree(&self) -> Result<SpanningTree, ChordalError> {
        let nnodes = self.nodes.len();

        if nnodes <= 1 {
            return Ok(SpanningTree {
                nodes: self.nodes.clone(),
                edges: Vec::new(),
            });
        }

        let mut p = vec![0; self.edges.len()];
        sortperm_by(&mut p, &self.edges, |a, b| a.weight().cmp(&b.weight()));

        let mut dsu = DisjointSetUnion::new(nnodes);
        let mut accepted = vec![false; self.edges.len()];
        let mut naccepted = 0;

        for &k in p.iter() {
            let (u, v) = self.ends[k];
            if dsu.union(u, v) {
                accepted[k] = true;
                naccepted += 1;
                if naccepted == nnodes - 1 {
                    break;
                }
            }
        }

        if naccepted < nnodes - 1 {
            return Err(ChordalError::DisconnectedCliqueGraph {
                cliques: nnodes,
                components: dsu.nsets(),
            });
        }

        let edges = self
            .edges
            .iter()
            .zip(accepted)
            .filter_map(|(e, keep)| keep.then_some(*e))
            .collect();

        Ok(SpanningTree {
            nodes: self.nodes.clone(),
            edges,
        })
    }
}

/// A spanning tree of the clique graph.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    nodes: Vec<usize>,
    edges: Vec<CliqueEdge>,
}

impl SpanningTree {
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn edges(&self) -> &[CliqueEdge] {
        &self.edges
    }

    /// Number of linking constraints, i.e. the summed overlap over all
    /// tree edges.
    pub fn linking_constraints(&self) -> usize {
        self.edges.iter().map(|e| e.overlap).sum()
    }

    /// size of the largest clique in the tree
    pub fn largest_clique(&self, history: &CliqueHistory) -> usize {
        self.nodes
            .iter()
            .map(|&c| history[c].len())
            .max()
            .unwrap_or(0)
    }
}
