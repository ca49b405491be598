//! CSV ingestion for historical quarterback datasets.
//!
//! The expected layout matches the bundled sample file: a header row, a
//! display-name column and per-season college and NFL averages. Empty or
//! absent cells become missing values rather than zeros, and rows that fail
//! to deserialize are skipped with a warning instead of aborting the load.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use qbpred::{QbRecord, StatLine};
use serde::Deserialize;

/// One row as it appears on disk. Every stat is optional so partially filled
/// rows still load; columns the predictor does not use (the player name among
/// them) are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    college_avg_touchdowns: Option<f64>,
    #[serde(default)]
    college_avg_yards: Option<f64>,
    #[serde(default)]
    college_avg_interceptions: Option<f64>,
    #[serde(default)]
    college_avg_wins: Option<f64>,
    #[serde(default)]
    nfl_avg_touchdowns: Option<f64>,
    #[serde(default)]
    nfl_avg_yards: Option<f64>,
    #[serde(default)]
    nfl_avg_interceptions: Option<f64>,
    #[serde(default)]
    nfl_avg_wins: Option<f64>,
}

impl RawRow {
    fn into_record(self) -> QbRecord<f64> {
        QbRecord::new(
            stat_line(
                self.college_avg_touchdowns,
                self.college_avg_yards,
                self.college_avg_interceptions,
                self.college_avg_wins,
            ),
            stat_line(
                self.nfl_avg_touchdowns,
                self.nfl_avg_yards,
                self.nfl_avg_interceptions,
                self.nfl_avg_wins,
            ),
        )
    }
}

fn stat_line(
    touchdowns: Option<f64>,
    yards: Option<f64>,
    interceptions: Option<f64>,
    wins: Option<f64>,
) -> StatLine<f64> {
    let stat = |value: Option<f64>| value.unwrap_or(f64::NAN);
    match wins.filter(|w| w.is_finite()) {
        Some(w) => StatLine::with_wins(stat(touchdowns), stat(yards), stat(interceptions), w),
        None => StatLine::new(stat(touchdowns), stat(yards), stat(interceptions)),
    }
}

/// Result of one load: the parsed records plus what happened along the way.
#[derive(Debug)]
pub struct LoadedData {
    pub records: Vec<QbRecord<f64>>,
    /// True when every loaded record carries a college win average, in which
    /// case win averages join the k-NN feature vector.
    pub uses_wins: bool,
    /// Rows dropped because they could not be deserialized.
    pub skipped: usize,
}

#[derive(Debug)]
pub enum LoaderError {
    Open { path: PathBuf, source: std::io::Error },
    Read { path: PathBuf, source: csv::Error },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Open { path, source } => {
                write!(f, "could not open {}: {}", path.display(), source)
            }
            LoaderError::Read { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for LoaderError {}

/// Reads records from any CSV source.
///
/// Malformed rows are counted and skipped. College win averages are kept only
/// when every row has one, so all feature vectors share one dimensionality;
/// NFL win averages are stored as found because no estimator reads them.
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<LoadedData, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in rdr.deserialize::<RawRow>().enumerate() {
        let raw = match row {
            Ok(raw) => raw,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                eprintln!("warning: skipping line {}: {err}", index + 2);
                skipped += 1;
                continue;
            }
        };
        records.push(raw.into_record());
    }

    let uses_wins = !records.is_empty() && records.iter().all(|r| r.college.wins.is_some());
    if !uses_wins {
        for record in &mut records {
            record.college.wins = None;
        }
    }

    Ok(LoadedData {
        records,
        uses_wins,
        skipped,
    })
}

/// Reads records from a CSV file on disk.
pub fn load_records(path: &Path) -> Result<LoadedData, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_records_from_reader(file).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbpred::usable_records;

    const FULL_HEADER: &str = "NFL_Player_Display,college_avg_touchdowns,college_avg_yards,\
                               college_avg_interceptions,college_avg_wins,nfl_avg_touchdowns,\
                               nfl_avg_yards,nfl_avg_interceptions,nfl_avg_wins\n";

    fn load(csv: String) -> LoadedData {
        load_records_from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn loads_rows_and_ignores_the_name_column() {
        let data = load(format!(
            "{FULL_HEADER}\
             Joe Passer,24.5,3100.0,9.0,10.0,20.0,2800.0,11.0,8.0\n\
             Sam Scrambler,18.0,2400.0,12.0,7.0,12.0,2100.0,14.0,6.0\n"
        ));
        assert_eq!(data.records.len(), 2);
        assert_eq!(data.skipped, 0);
        assert!(data.uses_wins);
        assert_eq!(data.records[0].college.touchdowns, 24.5);
        assert_eq!(data.records[1].nfl.yards, 2100.0);
        assert_eq!(data.records[0].nfl.wins, Some(8.0));
    }

    #[test]
    fn malformed_rows_are_skipped_and_counted() {
        let data = load(format!(
            "{FULL_HEADER}\
             Joe Passer,24.5,3100.0,9.0,10.0,20.0,2800.0,11.0,8.0\n\
             Broken Row,abc,3100.0,9.0,10.0,20.0,2800.0,11.0,8.0\n"
        ));
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.skipped, 1);
    }

    #[test]
    fn empty_cells_become_missing_values_not_zeros() {
        let data = load(format!(
            "{FULL_HEADER}\
             Draft Prospect,24.5,3100.0,9.0,10.0,,,,\n"
        ));
        let record = &data.records[0];
        assert!(record.nfl.touchdowns.is_nan());
        assert!(record.nfl.yards.is_nan());
        assert!(record.nfl.wins.is_none());
        assert!(record.college.core_is_finite());
    }

    #[test]
    fn partial_college_wins_are_stripped_from_every_record() {
        let data = load(format!(
            "{FULL_HEADER}\
             Joe Passer,24.5,3100.0,9.0,10.0,20.0,2800.0,11.0,8.0\n\
             No Wins Guy,18.0,2400.0,12.0,,12.0,2100.0,14.0,6.0\n"
        ));
        assert!(!data.uses_wins);
        assert!(data.records.iter().all(|r| r.college.wins.is_none()));
        // NFL wins are not features, so they survive the normalization.
        assert_eq!(data.records[0].nfl.wins, Some(8.0));
    }

    #[test]
    fn absent_wins_columns_load_three_dimensional_records() {
        let data = load(
            "NFL_Player_Display,college_avg_touchdowns,college_avg_yards,\
             college_avg_interceptions,nfl_avg_touchdowns,nfl_avg_yards,nfl_avg_interceptions\n\
             Joe Passer,24.5,3100.0,9.0,20.0,2800.0,11.0\n"
                .to_owned(),
        );
        assert!(!data.uses_wins);
        let features = data.records[0].college_features().unwrap();
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn bundled_sample_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/qb_stats_sample.csv");
        let data = load_records(&path).unwrap();
        assert_eq!(data.records.len(), 15);
        assert_eq!(data.skipped, 1);
        assert!(data.uses_wins);
        // The draft prospect row has no NFL stats yet, so k-NN can use one
        // record fewer than the loader returns.
        assert_eq!(usable_records(&data.records), 14);
    }
}
