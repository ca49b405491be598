use crate::Float;
use ndarray::Array1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Per-season statistical averages for one quarterback at one level of play.
///
/// Missing or unparseable source values are carried as non-finite floats so
/// each consumer can decide how to filter them; they are never silently
/// replaced with zero. Wins are optional because many datasets do not track
/// them.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine<F: Float> {
    pub touchdowns: F,
    pub yards: F,
    pub interceptions: F,
    pub wins: Option<F>,
}

impl<F: Float> StatLine<F> {
    pub fn new(touchdowns: F, yards: F, interceptions: F) -> Self {
        StatLine {
            touchdowns,
            yards,
            interceptions,
            wins: None,
        }
    }

    pub fn with_wins(touchdowns: F, yards: F, interceptions: F, wins: F) -> Self {
        StatLine {
            touchdowns,
            yards,
            interceptions,
            wins: Some(wins),
        }
    }

    /// True when touchdowns, yards and interceptions are all finite numbers.
    pub fn core_is_finite(&self) -> bool {
        self.touchdowns.is_finite() && self.yards.is_finite() && self.interceptions.is_finite()
    }
}

/// One historical player: college averages paired with NFL averages.
///
/// Records are immutable once loaded. Queries never write distances or
/// labels back onto them.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QbRecord<F: Float> {
    pub college: StatLine<F>,
    pub nfl: StatLine<F>,
}

impl<F: Float> QbRecord<F> {
    pub fn new(college: StatLine<F>, nfl: StatLine<F>) -> Self {
        QbRecord { college, nfl }
    }

    /// College feature vector for distance queries: touchdowns, yards,
    /// interceptions, plus wins when the record carries them.
    ///
    /// Returns `None` when any used component is non-finite, so callers can
    /// drop unusable records instead of computing garbage distances.
    pub fn college_features(&self) -> Option<Array1<F>> {
        if !self.college.core_is_finite() {
            return None;
        }
        match self.college.wins {
            Some(wins) if !wins.is_finite() => None,
            Some(wins) => Some(Array1::from_vec(vec![
                self.college.touchdowns,
                self.college.yards,
                self.college.interceptions,
                wins,
            ])),
            None => Some(Array1::from_vec(vec![
                self.college.touchdowns,
                self.college.yards,
                self.college.interceptions,
            ])),
        }
    }
}
