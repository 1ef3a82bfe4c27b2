#![allow(non_snake_case)]

use super::*;
use crate::graph::{is_perfect_elimination_ordering, Graph};

/// Maximal cliques of a chordal graph, given a perfect elimination
/// ordering `peo` of it (first entry eliminated first).
///
/// Returns [`ChordalError::NotPerfectEliminationOrdering`] if `peo` is not
/// a perfect elimination ordering of `G`.  Cliques have ascending members
/// and are sorted lexicographically.
pub fn maximal_cliques(G: &Graph, peo: &[usize]) -> Result<Vec<Clique>, ChordalError> {
    if !is_perfect_elimination_ordering(G, peo) {
        return Err(ChordalError::NotPerfectEliminationOrdering);
    }
    Ok(cliques_from_peo(G, peo))
}

// Every clique of a chordal graph is {v} ∪ higher(v) for some v, where
// higher(v) are the neighbors of v eliminated after it.  The candidate for
// p fails to be maximal iff some child v (a node whose earliest eliminated
// higher neighbor is p) has exactly one more higher neighbor than p, in
// which case {p} ∪ higher(p) == higher(v).
//
// No check is made that `peo` really is a perfect elimination ordering.
pub(crate) fn cliques_from_peo(G: &Graph, peo: &[usize]) -> Vec<Clique> {
    let n = G.nnodes();

    let mut position = vec![0; n];
    for (k, &v) in peo.iter().enumerate() {
        position[v] = k;
    }

    let higher: Vec<Vec<usize>> = (0..n)
        .map(|v| {
            G.neighbors(v)
                .iter()
                .copied()
                .filter(|&w| position[w] > position[v])
                .collect()
        })
        .collect();

    let mut is_maximal = vec![true; n];
    for v in 0..n {
        let Some(&p) = higher[v].iter().min_by_key(|&&w| position[w]) else {
            continue;
        };
        if higher[v].len() == higher[p].len() + 1 {
            is_maximal[p] = false;
        }
    }

    let mut cliques: Vec<Clique> = peo
        .iter()
        .filter(|&&v| is_maximal[v])
        .map(|&v| Clique::new(std::iter::once(v).chain(higher[v].iter().copied())))
        .collect();

    cliques.sort_by(|a, b| a.iter().cmp(b.iter()));
    cliques
}
