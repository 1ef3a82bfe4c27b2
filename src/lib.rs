//! __chordmerge__ prepares electrical network graphs for clique decomposed
//! semidefinite relaxations of power flow problems.
//!
//! Given a network graph, the crate
//!
//! * computes a chordal extension from the fill-in of a sparse $LDL^T$
//!   factorization of a diagonally dominant matrix with the graph's
//!   sparsity pattern,
//! * extracts the maximal cliques of the extension,
//! * greedily merges cliques along a minimum weight spanning tree of the
//!   clique graph, scoring each merge by the change in SDP variable count.
//!
//! The merge sweep always runs down to a single clique.  The result holds
//! the full merge history as a linkage record (usable as dendrogram data),
//! a per-iteration cost trace and a provenance graph relating buses,
//! cliques and merges, so that a caller can pick any point of the
//! size/overlap tradeoff after the fact.
//!
//! ```
//! use chordmerge::chordal::decompose;
//! use chordmerge::graph::Graph;
//!
//! let G = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
//! let result = decompose(&G).unwrap();
//!
//! assert_eq!(result.initial_cliques().len(), 3);
//! assert_eq!(result.linkage.len(), 2);
//! let best = result.best_step().unwrap();
//! let cliques = result.cliques_after(best).unwrap();
//! assert_eq!(cliques.len(), 2);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

#![allow(non_snake_case)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod chordal;
pub mod graph;
pub mod io;
pub mod qdldl;
pub mod timers;
