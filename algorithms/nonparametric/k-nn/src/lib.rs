use std::error::Error;
use std::fmt::{Display, Formatter};

use ndarray::{Array1, ArrayView1};
use qbpred_helpers::{Distance, Float, QbRecord};

/// NFL success thresholds. A record counts as successful when at least two
/// of the three hold. Domain constants, not learned values.
pub const SUCCESS_MIN_TOUCHDOWNS: f64 = 25.0;
pub const SUCCESS_MIN_YARDS: f64 = 2900.0;
pub const SUCCESS_MAX_INTERCEPTIONS: f64 = 12.0;

/// Errors that can occur when using the k-NN success classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum KnnError {
    /// k must be at least 1
    InvalidK,
    /// k cannot exceed the number of usable records
    KTooLarge,
    /// No usable records to classify against
    EmptyTrainingSet,
    /// Query dimensionality does not match the training records
    MismatchedDimensions,
    /// Invalid distance comparison (likely due to NaN values in the query)
    InvalidDistance,
}

impl Display for KnnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KnnError::InvalidK => write!(f, "k must be at least 1"),
            KnnError::KTooLarge => write!(f, "k cannot exceed the number of usable records"),
            KnnError::EmptyTrainingSet => write!(f, "No usable records to classify against"),
            KnnError::MismatchedDimensions => {
                write!(f, "Query dimensionality does not match the training records")
            }
            KnnError::InvalidDistance => write!(
                f,
                "Invalid distance comparison (likely due to NaN values in the query)"
            ),
        }
    }
}

impl Error for KnnError {}

/// Whether a historical record cleared the NFL success bar: at least two of
/// the touchdown, yardage and interception thresholds.
pub fn is_nfl_success<F: Float>(record: &QbRecord<F>) -> bool {
    let nfl = &record.nfl;
    let mut met = 0;
    if nfl.touchdowns >= F::cast(SUCCESS_MIN_TOUCHDOWNS).unwrap() {
        met += 1;
    }
    if nfl.yards >= F::cast(SUCCESS_MIN_YARDS).unwrap() {
        met += 1;
    }
    if nfl.interceptions <= F::cast(SUCCESS_MAX_INTERCEPTIONS).unwrap() {
        met += 1;
    }
    met >= 2
}

/// Rows `KnnClassifier` can train on: records whose college features and
/// core NFL stats are all finite.
pub fn usable_records<F: Float>(records: &[QbRecord<F>]) -> usize {
    records
        .iter()
        .filter(|r| r.college_features().is_some() && r.nfl.core_is_finite())
        .count()
}

/// A k-nearest-neighbors estimator of NFL success likelihood.
///
/// The training set is the college feature vector of every usable record
/// together with its precomputed success label. A query ranks the records
/// by distance and reports the share of successful ones among the `k`
/// closest, as a percentage.
///
/// # Type Parameters
///
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
/// * `D`: The distance metric. The predictor's contract is Euclidean
///   (`L2Dist`), but any metric implementing `Distance` can be swapped in.
#[derive(Debug, Clone)]
pub struct KnnClassifier<F, D>
where
    F: Float,
    D: Distance<F>,
{
    k: usize,
    features: Vec<Array1<F>>,
    successes: Vec<bool>,
    dim: usize,
    distance: D,
}

impl<F, D> KnnClassifier<F, D>
where
    F: Float,
    D: Distance<F>,
{
    /// Builds a classifier over the usable subset of `records`.
    ///
    /// Records with missing or non-finite college features or core NFL
    /// stats are dropped up front, in dataset order. `k` is validated here
    /// against the retained count so queries cannot fail on it later; it is
    /// never silently clamped.
    ///
    /// # Errors
    ///
    /// Returns `KnnError::InvalidK` if `k` is 0, `KnnError::EmptyTrainingSet`
    /// if no usable records remain, `KnnError::KTooLarge` if `k` exceeds the
    /// retained count, and `KnnError::MismatchedDimensions` if the retained
    /// records disagree on dimensionality (some with wins, some without).
    pub fn new(k: usize, records: &[QbRecord<F>], distance: D) -> Result<Self, KnnError> {
        if k == 0 {
            return Err(KnnError::InvalidK);
        }

        let mut features = Vec::with_capacity(records.len());
        let mut successes = Vec::with_capacity(records.len());
        for record in records {
            let Some(feat) = record.college_features() else {
                continue;
            };
            if !record.nfl.core_is_finite() {
                continue;
            }
            successes.push(is_nfl_success(record));
            features.push(feat);
        }

        if features.is_empty() {
            return Err(KnnError::EmptyTrainingSet);
        }
        if k > features.len() {
            return Err(KnnError::KTooLarge);
        }
        let dim = features[0].len();
        if features.iter().any(|f| f.len() != dim) {
            return Err(KnnError::MismatchedDimensions);
        }

        Ok(Self {
            k,
            features,
            successes,
            dim,
            distance,
        })
    }

    /// Number of records the classifier trained on.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Neighbor count the classifier was built with.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Share of successful quarterbacks among the `k` college profiles
    /// closest to `query`, as a percentage in `[0, 100]`.
    ///
    /// Ranking uses the metric's reduced distance, which preserves order.
    /// The sort is stable, so equidistant records resolve by their dataset
    /// order and repeated calls give identical answers. Nothing is written
    /// back to the training data; each call works on its own scratch
    /// ranking.
    ///
    /// # Errors
    ///
    /// Returns `KnnError::MismatchedDimensions` if the query length differs
    /// from the training records, and `KnnError::InvalidDistance` if a
    /// distance comes back NaN.
    pub fn predict_success_rate(&self, query: ArrayView1<F>) -> Result<F, KnnError> {
        if query.len() != self.dim {
            return Err(KnnError::MismatchedDimensions);
        }

        let mut ranked: Vec<(F, bool)> = self
            .features
            .iter()
            .zip(self.successes.iter())
            .map(|(feat, &success)| (self.distance.rdistance(feat.view(), query), success))
            .collect();
        if ranked.iter().any(|(d, _)| d.is_nan()) {
            return Err(KnnError::InvalidDistance);
        }

        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // k <= ranked.len() holds by construction.
        let successful = ranked[..self.k].iter().filter(|(_, s)| *s).count();
        Ok(F::cast(100.0).unwrap() * F::cast(successful).unwrap() / F::cast(self.k).unwrap())
    }
}
