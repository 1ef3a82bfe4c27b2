#![allow(non_snake_case)]

use super::*;
use crate::algebra::CscMatrix;
use crate::graph::{is_perfect_elimination_ordering, Graph};
use crate::qdldl::*;

/// A chordal supergraph of a network graph together with the elimination
/// ordering that certifies its chordality.
#[derive(Debug, Clone)]
pub struct ChordalExtension {
    /// the chordal graph, on the same node set as the input
    pub graph: Graph,
    /// perfect elimination ordering of `graph`, first entry eliminated first
    pub elimination_order: Vec<usize>,
    /// edges added to the input graph, as `(u, v)` with `u < v`
    pub fill_in: Vec<(usize, usize)>,
}

impl ChordalExtension {
    /// maximal cliques of the extension, sorted lexicographically
    pub fn maximal_cliques(&self) -> Vec<Clique> {
        cliques_from_peo(&self.graph, &self.elimination_order)
    }
}

/// Chordal extension of `G` from the fill-in of a sparse factorization.
///
/// The graph is encoded as `W = A + D`, where `A` is the adjacency matrix
/// and `D[i,i] = degree(i) + 1`.  `W` is strictly diagonally dominant and
/// so always has an `LDLᵀ` factorization with positive `D`.  The
/// off-diagonal pattern of `L` is the chordal graph, and the elimination
/// ordering of the factorization is a perfect elimination ordering of it.
pub fn chordal_extension(
    G: &Graph,
    settings: &DecompositionSettings,
) -> Result<ChordalExtension, ChordalError> {
    let n = G.nnodes();

    if n == 0 {
        return Ok(ChordalExtension {
            graph: G.clone(),
            elimination_order: Vec::new(),
            fill_in: Vec::new(),
        });
    }

    let W = G.dominant_pattern_matrix();

    let mut opts = QDLDLSettingsBuilder::default();
    opts.amd_dense_scale(settings.amd_dense_scale);
    if settings.ordering == "natural" {
        opts.perm((0..n).collect());
    }
    let opts = opts.build().map_err(|e| invariant_violation(&e))?;

    let factors = factor_pattern(&W, opts)?;

    // column j of L holds the later neighbors of perm[j]
    let perm = &factors.perm;
    let L = &factors.L;
    let mut graph = G.clone();
    let mut fill_in = Vec::new();

    for j in 0..n {
        for &r in L.column_rows(j) {
            let (u, v) = (perm[r].min(perm[j]), perm[r].max(perm[j]));
            if graph.add_edge(u, v)? {
                fill_in.push((u, v));
            }
        }
    }
    fill_in.sort_unstable();

    if settings.check_chordality && !is_perfect_elimination_ordering(&graph, perm) {
        return Err(ChordalError::FactorizationInvariantViolation {
            reason: "fill pattern is not chordal".to_string(),
        });
    }

    Ok(ChordalExtension {
        graph,
        elimination_order: factors.perm,
        fill_in,
    })
}

// LDLᵀ of a pattern matrix that must be positive definite
fn factor_pattern(
    W: &CscMatrix<f64>,
    opts: QDLDLSettings,
) -> Result<QDLDLFactorisation<f64>, ChordalError> {
    let factors = QDLDLFactorisation::new(W, Some(opts)).map_err(|e| invariant_violation(&e))?;

    if !factors.is_positive_definite() {
        return Err(ChordalError::FactorizationInvariantViolation {
            reason: format!(
                "{} of {} pivots are positive",
                factors.positive_inertia(),
                factors.D.len()
            ),
        });
    }
    Ok(factors)
}

fn invariant_violation(e: &impl std::fmt::Display) -> ChordalError {
    ChordalError::FactorizationInvariantViolation {
        reason: e.to_string(),
    }
}
