use crate::{Float, QbRecord};
use ndarray::Array1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The three college-to-NFL stat pairs the regression side models.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatPair {
    Touchdowns,
    Yards,
    Interceptions,
}

impl StatPair {
    pub const ALL: [StatPair; 3] = [
        StatPair::Touchdowns,
        StatPair::Yards,
        StatPair::Interceptions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatPair::Touchdowns => "touchdowns",
            StatPair::Yards => "yards",
            StatPair::Interceptions => "interceptions",
        }
    }

    fn columns<F: Float>(&self, record: &QbRecord<F>) -> (F, F) {
        match self {
            StatPair::Touchdowns => (record.college.touchdowns, record.nfl.touchdowns),
            StatPair::Yards => (record.college.yards, record.nfl.yards),
            StatPair::Interceptions => (record.college.interceptions, record.nfl.interceptions),
        }
    }
}

/// Paired regression columns extracted from the records for one stat pair.
/// `x` and `y` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet<F: Float> {
    pub x: Array1<F>,
    pub y: Array1<F>,
}

impl<F: Float> SampleSet<F> {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Extracts one stat pair from the records, dropping rows where either side
/// is missing or non-finite. Each pair is filtered on its own columns only,
/// so a dirty value in one stat does not cost the row for the others.
pub fn sample_set<F: Float>(records: &[QbRecord<F>], pair: StatPair) -> SampleSet<F> {
    let mut x = Vec::with_capacity(records.len());
    let mut y = Vec::with_capacity(records.len());
    for record in records {
        let (cx, cy) = pair.columns(record);
        if cx.is_finite() && cy.is_finite() {
            x.push(cx);
            y.push(cy);
        }
    }
    SampleSet {
        x: Array1::from_vec(x),
        y: Array1::from_vec(y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatLine;

    fn record(college: (f64, f64, f64), nfl: (f64, f64, f64)) -> QbRecord<f64> {
        QbRecord::new(
            StatLine::new(college.0, college.1, college.2),
            StatLine::new(nfl.0, nfl.1, nfl.2),
        )
    }

    #[test]
    fn extracts_matching_columns() {
        let records = vec![
            record((20.0, 3000.0, 10.0), (25.0, 3500.0, 12.0)),
            record((15.0, 2500.0, 8.0), (18.0, 2800.0, 9.0)),
        ];
        let sample = sample_set(&records, StatPair::Touchdowns);
        assert_eq!(sample.len(), 2);
        assert_eq!(sample.x[0], 20.0);
        assert_eq!(sample.y[0], 25.0);
        assert_eq!(sample.x[1], 15.0);

        let sample = sample_set(&records, StatPair::Interceptions);
        assert_eq!(sample.y[1], 9.0);
    }

    #[test]
    fn dirty_rows_only_drop_from_their_own_pair() {
        let records = vec![
            record((20.0, 3000.0, 10.0), (25.0, 3500.0, 12.0)),
            record((15.0, f64::NAN, 8.0), (18.0, 2800.0, 9.0)),
            record((22.0, 3200.0, f64::NAN), (24.0, 3600.0, 11.0)),
        ];
        assert_eq!(sample_set(&records, StatPair::Touchdowns).len(), 3);
        assert_eq!(sample_set(&records, StatPair::Yards).len(), 2);
        assert_eq!(sample_set(&records, StatPair::Interceptions).len(), 2);
    }

    #[test]
    fn empty_records_give_empty_sample() {
        let records: Vec<QbRecord<f64>> = Vec::new();
        let sample = sample_set(&records, StatPair::Yards);
        assert!(sample.is_empty());
        assert_eq!(sample.len(), 0);
    }
}
