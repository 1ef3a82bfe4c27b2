//! Sparse matrix storage and numeric helpers used by the factorization.
//!
//! Only the small subset of linear algebra needed to assemble the
//! diagonally dominant pattern matrix of a network graph and pass it to
//! the [`qdldl`](crate::qdldl) factorization lives here.

mod csc;
mod floats;
mod matrix_traits;
mod utils;

pub use csc::*;
pub use floats::*;
pub use matrix_traits::*;
pub(crate) use utils::*;
