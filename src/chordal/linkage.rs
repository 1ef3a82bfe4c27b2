use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One merge event: the history indices of the two merged cliques, the
/// merge cost and the size of the merged clique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkageRow {
    pub first: usize,
    pub second: usize,
    pub cost: isize,
    pub size: usize,
}

/// Ordered record of every merge performed, analogous to the linkage
/// output of agglomerative clustering.
///
/// The clique created by row `k` has history index `ninitial + k`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Linkage {
    ninitial: usize,
    rows: Vec<LinkageRow>,
}

impl Linkage {
    pub fn new(ninitial: usize) -> Self {
        Self {
            ninitial,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, row: LinkageRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// number of cliques before the first merge
    pub fn ninitial(&self) -> usize {
        self.ninitial
    }

    pub fn rows(&self) -> &[LinkageRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkageRow> {
        self.rows.iter()
    }

    /// Linkage matrix in the layout used by hierarchical clustering
    /// dendrogram renderers.
    ///
    /// Each row is `[first, second, cost, count]`, where `count` is the
    /// number of original cliques below the new cluster rather than the
    /// size of the merged clique.
    pub fn to_dendrogram(&self) -> Vec<[f64; 4]> {
        let mut counts = vec![1usize; self.ninitial];
        counts.reserve(self.rows.len());

        self.rows
            .iter()
            .map(|row| {
                let count = counts[row.first] + counts[row.second];
                counts.push(count);
                [
                    row.first as f64,
                    row.second as f64,
                    row.cost as f64,
                    count as f64,
                ]
            })
            .collect()
    }
}

impl Index<usize> for Linkage {
    type Output = LinkageRow;
    fn index(&self, idx: usize) -> &LinkageRow {
        &self.rows[idx]
    }
}

/// Cost heuristic recorded at the start of every merge iteration, and
/// once more for the final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostTraceEntry {
    /// SDP variable count of the active cliques and their spanning tree
    pub sdp_cost: isize,
    /// summed clique overlap over the spanning tree edges
    pub linking_constraints: usize,
    /// size of the largest active clique
    pub largest_clique: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dendrogram_counts() {
        // four cliques: 0+1 -> 4, 2+3 -> 5, 4+5 -> 6
        let mut linkage = Linkage::new(4);
        linkage.push(LinkageRow { first: 0, second: 1, cost: -2, size: 3 });
        linkage.push(LinkageRow { first: 2, second: 3, cost: -2, size: 3 });
        linkage.push(LinkageRow { first: 4, second: 5, cost: 5, size: 5 });

        let z = linkage.to_dendrogram();
        assert_eq!(z.len(), 3);
        assert_eq!(z[0], [0.0, 1.0, -2.0, 2.0]);
        assert_eq!(z[1], [2.0, 3.0, -2.0, 2.0]);
        assert_eq!(z[2], [4.0, 5.0, 5.0, 4.0]);
        assert_eq!(linkage[2].size, 5);
    }

    #[test]
    fn test_empty_linkage() {
        let linkage = Linkage::new(1);
        assert!(linkage.is_empty());
        assert!(linkage.to_dendrogram().is_empty());
    }
}
