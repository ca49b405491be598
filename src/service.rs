//! Drives the regression side over the three college-to-NFL stat pairs and
//! turns a college profile into per-stat forecasts.

use linear_regression::{FittedLine, GradientDescent, RegressionError};
use qbpred_helpers::{sample_set, Float, QbRecord, StatPair};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Feature scale applied to every college input column before fitting.
/// Yard totals reach the thousands and the fixed-rate optimizer diverges on
/// them unless the inputs are rescaled first.
pub const FEATURE_SCALE: f64 = 1000.0;

/// College averages supplied by the caller for a regression forecast.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollegeProfile<F: Float> {
    pub touchdowns: F,
    pub yards: F,
    pub interceptions: F,
}

impl<F: Float> CollegeProfile<F> {
    pub fn new(touchdowns: F, yards: F, interceptions: F) -> Self {
        CollegeProfile {
            touchdowns,
            yards,
            interceptions,
        }
    }

    pub fn value_for(&self, pair: StatPair) -> F {
        match pair {
            StatPair::Touchdowns => self.touchdowns,
            StatPair::Yards => self.yards,
            StatPair::Interceptions => self.interceptions,
        }
    }
}

/// One fitted stat pair: the line, its fit error, the number of rows it was
/// trained on and the prediction for the queried profile.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairForecast<F: Float> {
    pub stat: StatPair,
    pub line: FittedLine<F>,
    pub rmse: F,
    pub samples: usize,
    pub predicted: F,
}

/// Forecasts for the three stat pairs. A `None` entry means the dataset had
/// no usable rows for that pair; no made-up zero line is ever reported in
/// its place.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastReport<F: Float> {
    pub touchdowns: Option<PairForecast<F>>,
    pub yards: Option<PairForecast<F>>,
    pub interceptions: Option<PairForecast<F>>,
}

impl<F: Float> ForecastReport<F> {
    pub fn get(&self, pair: StatPair) -> Option<&PairForecast<F>> {
        match pair {
            StatPair::Touchdowns => self.touchdowns.as_ref(),
            StatPair::Yards => self.yards.as_ref(),
            StatPair::Interceptions => self.interceptions.as_ref(),
        }
    }

    fn set(&mut self, pair: StatPair, forecast: PairForecast<F>) {
        let slot = match pair {
            StatPair::Touchdowns => &mut self.touchdowns,
            StatPair::Yards => &mut self.yards,
            StatPair::Interceptions => &mut self.interceptions,
        };
        *slot = Some(forecast);
    }

    /// The pairs that had usable data, in fixed stat order.
    pub fn iter(&self) -> impl Iterator<Item = &PairForecast<F>> {
        [
            self.touchdowns.as_ref(),
            self.yards.as_ref(),
            self.interceptions.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Fits each stat pair independently and predicts a profile's NFL numbers.
#[derive(Debug, Clone)]
pub struct StatForecaster<F: Float> {
    optimizer: GradientDescent<F>,
}

impl<F: Float> Default for StatForecaster<F> {
    fn default() -> Self {
        StatForecaster {
            optimizer: GradientDescent::with_scale(F::cast(FEATURE_SCALE).unwrap()),
        }
    }
}

impl<F: Float> StatForecaster<F> {
    pub fn new(optimizer: GradientDescent<F>) -> Self {
        StatForecaster { optimizer }
    }

    /// Forecasts all three stat pairs for `profile`.
    ///
    /// Each pair extracts its own sample columns, so rows dropped for one
    /// stat still contribute to the others. A pair with no usable rows is
    /// left out of the report rather than fitted to nothing.
    pub fn forecast(
        &self,
        records: &[QbRecord<F>],
        profile: &CollegeProfile<F>,
    ) -> Result<ForecastReport<F>, RegressionError> {
        let mut report = ForecastReport::default();
        for pair in StatPair::ALL {
            let sample = sample_set(records, pair);
            if sample.is_empty() {
                continue;
            }
            let line = self.optimizer.fit(sample.x.view(), sample.y.view())?;
            let rmse = line.rmse(sample.x.view(), sample.y.view())?;
            let predicted = line.predict(profile.value_for(pair));
            report.set(
                pair,
                PairForecast {
                    stat: pair,
                    line,
                    rmse,
                    samples: sample.len(),
                    predicted,
                },
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use qbpred_helpers::StatLine;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn record(college: (f64, f64, f64), nfl: (f64, f64, f64)) -> QbRecord<f64> {
        QbRecord::new(
            StatLine::new(college.0, college.1, college.2),
            StatLine::new(nfl.0, nfl.1, nfl.2),
        )
    }

    #[test]
    fn pairs_are_fitted_from_independent_samples() {
        let records = vec![
            record((20.0, 3000.0, 10.0), (25.0, 3500.0, 12.0)),
            record((15.0, f64::NAN, 8.0), (18.0, 2800.0, 9.0)),
            record((22.0, 3200.0, 9.0), (24.0, 3600.0, 11.0)),
        ];
        let profile = CollegeProfile::new(20.0, 3000.0, 9.0);
        let report = StatForecaster::default().forecast(&records, &profile).unwrap();

        assert_eq!(report.touchdowns.unwrap().samples, 3);
        assert_eq!(report.yards.unwrap().samples, 2);
        assert_eq!(report.interceptions.unwrap().samples, 3);
    }

    #[test]
    fn pair_without_usable_rows_is_reported_missing() {
        let records = vec![
            record((20.0, f64::NAN, 10.0), (25.0, 3500.0, 12.0)),
            record((15.0, 2500.0, 8.0), (18.0, f64::NAN, 9.0)),
        ];
        let profile = CollegeProfile::new(20.0, 3000.0, 9.0);
        let report = StatForecaster::default().forecast(&records, &profile).unwrap();

        assert!(report.yards.is_none());
        assert!(report.touchdowns.is_some());
        assert!(report.interceptions.is_some());
        assert_eq!(report.iter().count(), 2);
    }

    #[test]
    fn empty_dataset_reports_every_pair_missing() {
        let records: Vec<QbRecord<f64>> = Vec::new();
        let profile = CollegeProfile::new(20.0, 3000.0, 9.0);
        let report = StatForecaster::default().forecast(&records, &profile).unwrap();

        for pair in StatPair::ALL {
            assert!(report.get(pair).is_none());
        }
        assert_eq!(report.iter().count(), 0);
    }

    #[test]
    fn yard_magnitude_pair_converges_under_the_default_scale() {
        // nfl yards = 0.9 * college yards - 200, with a little jitter.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let records: Vec<QbRecord<f64>> = (0..40)
            .map(|_| {
                let yards = rng.random_range(800.0..4800.0);
                let noise = rng.random_range(-50.0..50.0);
                record((20.0, yards, 9.0), (20.0, 0.9 * yards - 200.0 + noise, 9.0))
            })
            .collect();
        let profile = CollegeProfile::new(20.0, 3000.0, 9.0);
        let report = StatForecaster::default().forecast(&records, &profile).unwrap();

        let yards = report.yards.unwrap();
        assert_abs_diff_eq!(yards.line.slope, 0.9, epsilon = 0.05);
        assert!(yards.rmse.is_finite());
        assert_abs_diff_eq!(
            yards.predicted,
            yards.line.predict(3000.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn predictions_use_the_matching_profile_value() {
        let records = vec![
            record((10.0, 1000.0, 5.0), (12.0, 1200.0, 6.0)),
            record((20.0, 2000.0, 10.0), (22.0, 2200.0, 11.0)),
            record((30.0, 3000.0, 15.0), (32.0, 3200.0, 16.0)),
        ];
        let profile = CollegeProfile::new(25.0, 2500.0, 12.0);
        let report = StatForecaster::default().forecast(&records, &profile).unwrap();

        for pair in StatPair::ALL {
            let forecast = report.get(pair).unwrap();
            assert_eq!(forecast.stat, pair);
            assert_abs_diff_eq!(
                forecast.predicted,
                forecast.line.predict(profile.value_for(pair)),
                epsilon = 1e-12
            );
        }
    }
}
