use super::VertexSet;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A set of network nodes, stored in ascending order.
///
/// Cliques are never modified after construction; merging two cliques
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Clique {
    vertices: VertexSet,
}

impl Clique {
    pub fn new(vertices: impl IntoIterator<Item = usize>) -> Self {
        let mut v: Vec<usize> = vertices.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        Self {
            vertices: v.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    pub fn is_subset(&self, other: &Clique) -> bool {
        self.vertices.is_subset(&other.vertices)
    }

    /// Return the number of elements in self ∩ other.
    pub fn intersect_dim(&self, other: &Clique) -> usize {
        let (sa, sb) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };
        sa.vertices.iter().filter(|e| sb.vertices.contains(*e)).count()
    }

    /// Return the number of elements in self ∪ other.
    pub fn union_dim(&self, other: &Clique) -> usize {
        self.len() + other.len() - self.intersect_dim(other)
    }

    /// A new clique holding the members of both
    pub fn union(&self, other: &Clique) -> Clique {
        Clique::new(self.iter().chain(other.iter()))
    }
}

impl From<Vec<usize>> for Clique {
    fn from(v: Vec<usize>) -> Self {
        Clique::new(v)
    }
}

impl From<Clique> for Vec<usize> {
    fn from(c: Clique) -> Self {
        c.vertices.into_iter().collect()
    }
}

/// Append-only list of every clique created during a decomposition.
///
/// The first `ninitial` entries are the maximal cliques of the chordal
/// extension; each merge appends its result.  Indices are stable for the
/// lifetime of the history and are what the linkage record refers to.
#[derive(Debug, Clone, Default)]
pub struct CliqueHistory {
    cliques: Vec<Clique>,
    ninitial: usize,
}

impl CliqueHistory {
    pub fn new(initial: Vec<Clique>) -> Self {
        let ninitial = initial.len();
        Self {
            cliques: initial,
            ninitial,
        }
    }

    /// Append a clique and return its history index
    pub(crate) fn push(&mut self, clique: Clique) -> usize {
        self.cliques.push(clique);
        self.cliques.len() - 1
    }

    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    /// number of maximal cliques the history started from
    pub fn ninitial(&self) -> usize {
        self.ninitial
    }

    pub fn initial(&self) -> &[Clique] {
        &self.cliques[..self.ninitial]
    }

    pub fn get(&self, idx: usize) -> Option<&Clique> {
        self.cliques.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clique> {
        self.cliques.iter()
    }
}

impl Index<usize> for CliqueHistory {
    type Output = Clique;
    fn index(&self, idx: usize) -> &Clique {
        &self.cliques[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clique_set_sizes() {
        let a = Clique::new([3, 1, 2, 1]);
        let b = Clique::new([2, 3, 4]);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(a.intersect_dim(&b), 2);
        assert_eq!(a.union_dim(&b), 4);
        assert_eq!(a.union(&b), Clique::new([1, 2, 3, 4]));
        assert!(!a.is_subset(&b));
        assert!(Clique::new([2, 3]).is_subset(&a));
    }

    #[test]
    fn test_history_indices() {
        let mut h = CliqueHistory::new(vec![Clique::new([0, 1]), Clique::new([1, 2])]);
        let merged = h[0].union(&h[1]);
        assert_eq!(h.push(merged), 2);
        assert_eq!(h.ninitial(), 2);
        assert_eq!(h.initial().len(), 2);
        assert_eq!(h[2], Clique::new([0, 1, 2]));
        assert!(h.get(3).is_none());
    }
}
