//! Walks the error conditions the k-NN success classifier reports,
//! showing how each one surfaces as a `Result` instead of a panic.

use k_nn::{usable_records, KnnClassifier, KnnError};
use ndarray::array;
use qbpred_helpers::{L2Dist, QbRecord, StatLine};

fn record(college: (f64, f64, f64), nfl: (f64, f64, f64)) -> QbRecord<f64> {
    QbRecord::new(
        StatLine::new(college.0, college.1, college.2),
        StatLine::new(nfl.0, nfl.1, nfl.2),
    )
}

fn main() {
    println!("k-NN success classifier error handling");
    println!("======================================");

    let records = vec![
        record((25.0, 3100.0, 8.0), (31.0, 4000.0, 9.0)),
        record((18.0, 2400.0, 12.0), (12.0, 1900.0, 15.0)),
        record((30.0, 3600.0, 6.0), (28.0, 3800.0, 11.0)),
    ];

    println!("\n1. k = 0 is rejected up front:");
    match KnnClassifier::new(0, &records, L2Dist) {
        Err(KnnError::InvalidK) => println!("   caught expected error: {}", KnnError::InvalidK),
        Err(e) => println!("   unexpected error: {}", e),
        Ok(_) => println!("   unexpectedly built a classifier"),
    }

    println!("\n2. k larger than the usable record count:");
    let k = usable_records(&records) + 1;
    match KnnClassifier::new(k, &records, L2Dist) {
        Err(KnnError::KTooLarge) => println!("   caught expected error: {}", KnnError::KTooLarge),
        Err(e) => println!("   unexpected error: {}", e),
        Ok(_) => println!("   unexpectedly built a classifier"),
    }

    println!("\n3. Empty training set:");
    let empty: Vec<QbRecord<f64>> = Vec::new();
    match KnnClassifier::new(1, &empty, L2Dist) {
        Err(KnnError::EmptyTrainingSet) => {
            println!("   caught expected error: {}", KnnError::EmptyTrainingSet)
        }
        Err(e) => println!("   unexpected error: {}", e),
        Ok(_) => println!("   unexpectedly built a classifier"),
    }

    println!("\n4. Query with the wrong dimensionality:");
    match KnnClassifier::new(2, &records, L2Dist) {
        Ok(classifier) => match classifier.predict_success_rate(array![25.0, 3000.0].view()) {
            Err(KnnError::MismatchedDimensions) => {
                println!("   caught expected error: {}", KnnError::MismatchedDimensions)
            }
            Err(e) => println!("   unexpected error: {}", e),
            Ok(rate) => println!("   unexpectedly classified: {rate}"),
        },
        Err(e) => println!("   could not build classifier: {}", e),
    }

    println!("\n5. NaN in the query:");
    match KnnClassifier::new(2, &records, L2Dist) {
        Ok(classifier) => {
            match classifier.predict_success_rate(array![f64::NAN, 3000.0, 8.0].view()) {
                Err(KnnError::InvalidDistance) => {
                    println!("   caught expected error: {}", KnnError::InvalidDistance)
                }
                Err(e) => println!("   unexpected error: {}", e),
                Ok(rate) => println!("   unexpectedly classified: {rate}"),
            }
        }
        Err(e) => println!("   could not build classifier: {}", e),
    }

    println!("\n6. Error propagation with `?`:");
    fn success_rate(records: &[QbRecord<f64>]) -> Result<f64, KnnError> {
        let classifier = KnnClassifier::new(2, records, L2Dist)?;
        classifier.predict_success_rate(array![24.0, 3000.0, 9.0].view())
    }
    match success_rate(&records) {
        Ok(rate) => println!("   estimated success likelihood: {rate:.1}%"),
        Err(e) => println!("   classification failed: {}", e),
    }

    println!("\nAll examples completed.");
}
