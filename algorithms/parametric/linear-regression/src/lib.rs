use std::error::Error;
use std::fmt::{Display, Formatter};

use ndarray::{Array1, ArrayView1};
use qbpred_helpers::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Errors that can occur when fitting or evaluating a regression line.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// The x and y columns must have the same number of rows
    MismatchedLengths,
}

impl Display for RegressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::MismatchedLengths => {
                write!(f, "x and y columns must have the same number of rows")
            }
        }
    }
}

impl Error for RegressionError {}

/// A fitted simple regression line `y = slope * x + intercept`.
///
/// The default value is the zero line, which is also what a fit over empty
/// columns produces.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FittedLine<F: Float> {
    pub slope: F,
    pub intercept: F,
}

impl<F: Float> FittedLine<F> {
    pub fn new(slope: F, intercept: F) -> Self {
        FittedLine { slope, intercept }
    }

    pub fn predict(&self, v: F) -> F {
        self.slope * v + self.intercept
    }

    /// Mean squared error of this line over the given columns. Empty columns
    /// evaluate to zero.
    pub fn mse(&self, x: ArrayView1<F>, y: ArrayView1<F>) -> Result<F, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::MismatchedLengths);
        }
        if x.is_empty() {
            return Ok(F::zero());
        }
        let n = F::cast(x.len()).unwrap();
        let sum = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| {
                let residual = yi - self.predict(xi);
                residual * residual
            })
            .sum::<F>();
        Ok(sum / n)
    }

    /// Root mean squared error, in the units of the target column.
    pub fn rmse(&self, x: ArrayView1<F>, y: ArrayView1<F>) -> Result<F, RegressionError> {
        Ok(self.mse(x, y)?.sqrt())
    }
}

/// Batch gradient descent for a simple linear regression.
///
/// Every iteration steps slope and intercept against the gradient of the
/// mean squared error over the whole sample. The `scale` factor divides the
/// inputs before training and the fitted slope is mapped back to original
/// units afterwards; with inputs in the thousands the fixed learning rate
/// diverges unless they are rescaled first. The intercept is never scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescent<F: Float> {
    learning_rate: F,
    iterations: u32,
    scale: F,
}

impl<F: Float> Default for GradientDescent<F> {
    fn default() -> Self {
        GradientDescent {
            learning_rate: F::cast(1e-3).unwrap(),
            iterations: 10_000,
            scale: F::one(),
        }
    }
}

impl<F: Float> GradientDescent<F> {
    pub fn new(learning_rate: F, iterations: u32, scale: F) -> Self {
        GradientDescent {
            learning_rate,
            iterations,
            scale,
        }
    }

    /// Default learning rate and iteration count with the given feature
    /// scale.
    pub fn with_scale(scale: F) -> Self {
        GradientDescent {
            scale,
            ..GradientDescent::default()
        }
    }

    /// Fits a line to the paired columns.
    ///
    /// Mismatched column lengths are rejected. Empty columns fit the zero
    /// line; that degenerate result is well defined, not an error.
    pub fn fit(&self, x: ArrayView1<F>, y: ArrayView1<F>) -> Result<FittedLine<F>, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::MismatchedLengths);
        }
        if x.is_empty() {
            return Ok(FittedLine::default());
        }

        let scaled: Array1<F> = x.mapv(|v| v / self.scale);
        let n = F::cast(x.len()).unwrap();
        let two = F::cast(2.0).unwrap();

        let mut slope = F::zero();
        let mut intercept = F::zero();

        for _ in 0..self.iterations {
            let predictions = scaled.mapv(|v| slope * v + intercept);
            let errors = &y - &predictions;
            let intercept_gradient = -(two / n) * errors.sum();
            let slope_gradient = -(two / n) * (&scaled * &errors).sum();
            slope = slope - self.learning_rate * slope_gradient;
            intercept = intercept - self.learning_rate * intercept_gradient;
        }

        Ok(FittedLine {
            slope: slope / self.scale,
            intercept,
        })
    }
}
