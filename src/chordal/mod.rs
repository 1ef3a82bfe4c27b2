//! Chordal decomposition and greedy clique merging.
//!
//! The pipeline runs leaves first:
//!
//! 1. [`chordal_extension`] fills a network graph to a chordal supergraph
//!    using the sparsity pattern of a Cholesky-type factor.
//! 2. [`maximal_cliques`] sweeps a perfect elimination ordering of the
//!    chordal graph and keeps the maximal clique candidates.
//! 3. [`CliqueGraph`] weights clique overlaps and yields a minimum weight
//!    [`SpanningTree`].
//! 4. The [`cost`] functions count SDP variables.
//! 5. The merge engine repeatedly merges the cheapest spanning tree edge
//!    until one clique remains, recording a [`Linkage`], a
//!    [`CostTraceEntry`] per iteration and a [`ProvenanceGraph`].
//!
//! [`CliqueDecomposer`] drives the whole sequence and returns a
//! [`DecompositionResult`].

pub use crate::graph::VertexSet;

mod clique;
mod clique_graph;
pub mod cost;
mod decomposition;
mod disjoint_set_union;
mod error;
mod extension;
mod info_print;
#[cfg(feature = "serde")]
mod json;
mod linkage;
mod maximal_cliques;
mod merge;
mod provenance;
mod settings;

pub use clique::*;
pub use clique_graph::*;
pub use decomposition::*;
pub use error::*;
pub use extension::*;
pub use linkage::*;
pub use maximal_cliques::*;
pub(crate) use disjoint_set_union::*;
pub(crate) use merge::*;
pub use provenance::*;
pub use settings::*;
