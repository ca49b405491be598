//! College-to-NFL quarterback prediction.
//!
//! Two independent estimators over the same historical records: a simple
//! linear regression per stat pair trained by batch gradient descent, and a
//! k-nearest-neighbors estimate of NFL success likelihood. The [`service`]
//! module drives the regression side over all three stat pairs at once.

pub mod service;

pub use k_nn::{
    is_nfl_success, usable_records, KnnClassifier, KnnError, SUCCESS_MAX_INTERCEPTIONS,
    SUCCESS_MIN_TOUCHDOWNS, SUCCESS_MIN_YARDS,
};
pub use linear_regression::{FittedLine, GradientDescent, RegressionError};
pub use qbpred_helpers::{
    sample_set, synthetic_records, Distance, Float, L1Dist, L2Dist, LInfDist, QbRecord,
    SampleSet, StatLine, StatPair,
};
pub use service::{CollegeProfile, ForecastReport, PairForecast, StatForecaster, FEATURE_SCALE};
