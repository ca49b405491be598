use ndarray::ArrayView1;

use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A distance metric over feature vectors.
///
/// `rdistance` is a cheaper "reduced" form that preserves ordering, such as
/// the squared Euclidean distance. Ranking neighbors only needs the reduced
/// form, so implementations should override it when a faster variant exists.
pub trait Distance<F: Float>: Clone + Send + Sync + Unpin {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F;

    #[inline]
    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.distance(a, b)
    }

    #[inline]
    fn rdist_to_dist(&self, rdist: F) -> F {
        rdist
    }

    #[inline]
    fn dist_to_rdist(&self, dist: F) -> F {
        dist
    }
}

/// Manhattan distance.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct L1Dist;

impl<F: Float> Distance<F> for L1Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        (&a - &b).mapv(|v| v.abs()).sum()
    }
}

/// Euclidean distance; the reduced form is the squared distance.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct L2Dist;

impl<F: Float> Distance<F> for L2Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.rdistance(a, b).sqrt()
    }

    #[inline]
    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        (&a - &b).mapv(|v| v * v).sum()
    }

    #[inline]
    fn rdist_to_dist(&self, rdist: F) -> F {
        rdist.sqrt()
    }

    #[inline]
    fn dist_to_rdist(&self, dist: F) -> F {
        dist * dist
    }
}

/// Chebyshev distance: the largest coordinate difference.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LInfDist;

impl<F: Float> Distance<F> for LInfDist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        (&a - &b).fold(F::zero(), |acc, &v| acc.max(v.abs()))
    }
}
