use crate::chordal::SettingsError;
use crate::graph::GraphError;
use thiserror::Error;

/// Error type returned by the decomposition pipeline.
///
/// Every variant aborts the pipeline; no partial result is produced.
#[derive(Error, Debug)]
pub enum ChordalError {
    /// The diagonally dominant pattern matrix failed to factor as
    /// positive definite.  Unreachable for well formed graphs.
    #[error("factorization invariant violated: {reason}")]
    FactorizationInvariantViolation { reason: String },
    /// The active cliques do not form a connected clique graph, so no
    /// spanning tree exists.  The source network must be connected.
    #[error("clique graph over {cliques} cliques has {components} connected components")]
    DisconnectedCliqueGraph { cliques: usize, components: usize },
    /// A supplied elimination order is not a perfect elimination
    /// ordering of the graph
    #[error("order is not a perfect elimination ordering of the graph")]
    NotPerfectEliminationOrdering,
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Verbose output could not be written
    #[error("failed to write output: {0}")]
    Print(#[from] std::io::Error),
}
