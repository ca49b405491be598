//! Seeded generation of plausible quarterback records, for demos and tests
//! that need a dataset without touching the filesystem.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{Float, QbRecord, StatLine};

/// Generates `n` quarterback records from a seeded generator. The same seed
/// always produces the same records.
///
/// College averages are drawn uniformly from plausible ranges; the NFL
/// averages follow them through a mild linear link plus uniform noise, so
/// regression over the generated pairs has actual signal. Wins are always
/// present.
pub fn synthetic_records<F: Float>(n: usize, seed: u64) -> Vec<QbRecord<F>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n).map(|_| synthetic_record(&mut rng)).collect()
}

fn synthetic_record<F: Float, R: Rng>(rng: &mut R) -> QbRecord<F> {
    let c_tds: F = uniform(rng, 10.0, 45.0);
    let c_yds: F = uniform(rng, 1500.0, 4800.0);
    let c_ints: F = uniform(rng, 2.0, 18.0);
    let c_wins: F = uniform(rng, 2.0, 14.0);

    let n_tds = linked(rng, c_tds, 0.8, -2.0, 4.0);
    let n_yds = linked(rng, c_yds, 0.9, -350.0, 450.0);
    let n_ints = linked(rng, c_ints, 0.7, 2.0, 3.0);
    let n_wins = linked(rng, c_wins, 0.6, 1.0, 2.0);

    QbRecord::new(
        StatLine::with_wins(c_tds, c_yds, c_ints, c_wins),
        StatLine::with_wins(n_tds, n_yds, n_ints, n_wins),
    )
}

fn uniform<F: Float, R: Rng>(rng: &mut R, lo: f64, hi: f64) -> F {
    rng.random_range(F::cast(lo).unwrap()..F::cast(hi).unwrap())
}

/// `slope * x + intercept` plus uniform noise in `[-spread, spread]`,
/// clamped at zero.
fn linked<F: Float, R: Rng>(rng: &mut R, x: F, slope: f64, intercept: f64, spread: f64) -> F {
    let noise: F = uniform(rng, -spread, spread);
    let value = F::cast(slope).unwrap() * x + F::cast(intercept).unwrap() + noise;
    value.max(F::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_records() {
        let a = synthetic_records::<f64>(50, 17);
        let b = synthetic_records::<f64>(50, 17);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = synthetic_records::<f64>(50, 17);
        let b = synthetic_records::<f64>(50, 18);
        assert_ne!(a, b);
    }

    #[test]
    fn records_are_finite_and_non_negative() {
        for record in synthetic_records::<f64>(200, 3) {
            assert!(record.college.core_is_finite());
            assert!(record.nfl.core_is_finite());
            assert!(record.college.touchdowns >= 0.0);
            assert!(record.nfl.yards >= 0.0);
            assert!(record.college.wins.is_some());
            assert!(record.nfl.wins.is_some());
        }
    }

    #[test]
    fn requested_count_is_generated() {
        assert_eq!(synthetic_records::<f32>(0, 1).len(), 0);
        assert_eq!(synthetic_records::<f32>(123, 1).len(), 123);
    }
}
