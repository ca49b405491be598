// Quick tour of the qbpred estimators on a generated dataset.
use ndarray::array;
use qbpred::service::{CollegeProfile, StatForecaster};
use qbpred::{synthetic_records, KnnClassifier, L2Dist};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("qbpred library example");

    let records = synthetic_records::<f64>(400, 7);
    let profile = CollegeProfile::new(28.0, 3400.0, 9.0);

    let report = StatForecaster::default().forecast(&records, &profile)?;
    for forecast in report.iter() {
        println!(
            "{}: y = {:.4}x + {:.4} (rmse {:.2}, {} samples) -> {:.1}",
            forecast.stat.label(),
            forecast.line.slope,
            forecast.line.intercept,
            forecast.rmse,
            forecast.samples,
            forecast.predicted
        );
    }

    let classifier = KnnClassifier::new(25, &records, L2Dist)?;
    let query = array![profile.touchdowns, profile.yards, profile.interceptions, 9.0];
    let rate = classifier.predict_success_rate(query.view())?;
    println!("estimated NFL success likelihood: {rate:.1}%");

    Ok(())
}
