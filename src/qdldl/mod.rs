//! Sparse $LDL^T$ factorization used as the fill-in oracle for chordal extension.
//!
//! The factorization computes a fill-reducing ordering (AMD by default),
//! permutes the input symmetrically and factors it.  Only the sparsity
//! pattern of `L` and the inertia of `D` are consumed by the rest of the
//! crate; the numeric values are computed so that a failure of positive
//! definiteness can be detected.

#[allow(clippy::module_inception)]
mod qdldl;
pub use self::qdldl::*;
