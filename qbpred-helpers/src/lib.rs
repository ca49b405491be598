//! Shared data model and numeric utilities for the qbpred workspace:
//! the quarterback record types, regression sample extraction, distance
//! metrics and the synthetic dataset generator.

use ndarray::{NdFloat, ScalarOperand};

use num_traits::{AsPrimitive, FromPrimitive, NumCast, Signed};
use rand::distr::uniform::SampleUniform;

use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

mod common;
mod distance;
mod sample;
pub mod synthetic;

pub use common::{QbRecord, StatLine};
pub use distance::{Distance, L1Dist, L2Dist, LInfDist};
pub use sample::{sample_set, SampleSet, StatPair};
pub use synthetic::synthetic_records;

/// Element type every estimator in the workspace is generic over.
pub trait Float:
    NdFloat
    + FromPrimitive
    + Default
    + Signed
    + Sum
    + AsPrimitive<usize>
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + num_traits::MulAdd<Output = Self>
    + SampleUniform
    + ScalarOperand
    + std::marker::Unpin
{
    fn cast<T: NumCast>(x: T) -> Option<Self> {
        NumCast::from(x)
    }
}

impl Float for f32 {}

impl Float for f64 {}
