use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in the factorization.
///
/// The pipeline itself only ever factors `f64` pattern matrices, but the
/// factorization is written against this trait so that it can be checked
/// with other float types in isolation.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT:
    'static + Send + Float + NumAssign + Default + FromPrimitive + Display + LowerExp + Debug + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}
