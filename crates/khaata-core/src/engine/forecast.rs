//! Next-period forecast over the monthly series

use crate::models::{MonthlyBucket, Prediction};

/// Predict next period's income, expenses, and profit from the monthly series
///
/// `transaction_count` is the size of the originating ledger; with fewer than
/// two transactions there is not enough data and the zero prediction is
/// returned.
///
/// The trend estimator is intentionally simplified: with buckets indexed 1..n,
///
/// ```text
/// slope     = (Σ idx·value)/n − ((n+1)/2) · (Σ value)/n
/// predicted = round(average + slope · 1.5)
/// ```
///
/// This is not an OLS slope (the divisor is n, not Σ(idx − mean)²); it is kept
/// exactly as-is for behavior compatibility. Rounding is `f64::round` (half
/// away from zero).
pub fn predict_next_period(series: &[MonthlyBucket], transaction_count: usize) -> Prediction {
    if transaction_count < 2 {
        return Prediction::zero();
    }

    let income = trend_estimate(series, |b| b.income);
    let expenses = trend_estimate(series, |b| b.expenses);

    Prediction {
        income,
        expenses,
        profit: income - expenses,
    }
}

fn trend_estimate<F>(series: &[MonthlyBucket], value: F) -> f64
where
    F: Fn(&MonthlyBucket) -> f64,
{
    let n = series.len() as f64;
    if n <= 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = series
        .iter()
        .enumerate()
        .map(|(i, bucket)| (i as f64 + 1.0) * value(bucket))
        .sum();
    let total: f64 = series.iter().map(&value).sum();

    let slope = weighted_sum / n - ((n + 1.0) / 2.0) * total / n;
    let average = total / n;

    (average + slope * 1.5).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(month: &str, income: f64, expenses: f64) -> MonthlyBucket {
        MonthlyBucket {
            month: month.to_string(),
            income,
            expenses,
        }
    }

    #[test]
    fn test_insufficient_data_yields_zero() {
        let series = vec![bucket("Jan", 1000.0, 500.0)];
        assert_eq!(predict_next_period(&series, 0), Prediction::zero());
        assert_eq!(predict_next_period(&series, 1), Prediction::zero());
    }

    #[test]
    fn test_flat_series_predicts_the_average() {
        // Two equal buckets: slope is 0 for both fields, so the prediction
        // is just the rounded average
        let series = vec![bucket("Jan", 1000.0, 500.0), bucket("Feb", 1000.0, 500.0)];

        let prediction = predict_next_period(&series, 4);
        assert_eq!(prediction.income, 1000.0);
        assert_eq!(prediction.expenses, 500.0);
        assert_eq!(prediction.profit, 500.0);
    }

    #[test]
    fn test_rising_series_predicts_above_average() {
        let series = vec![
            bucket("Jan", 100.0, 50.0),
            bucket("Feb", 200.0, 50.0),
            bucket("Mar", 300.0, 50.0),
        ];

        let prediction = predict_next_period(&series, 6);
        // income: weighted = 1*100 + 2*200 + 3*300 = 1400; n = 3
        // slope = 1400/3 - 2*600/3 = 466.666... - 400 = 66.666...
        // predicted = round(200 + 66.666.. * 1.5) = round(300) = 300
        assert_eq!(prediction.income, 300.0);
        // expenses are flat at 50
        assert_eq!(prediction.expenses, 50.0);
        assert_eq!(prediction.profit, 250.0);
    }

    #[test]
    fn test_deterministic() {
        let series = vec![
            bucket("Jan", 45000.0, 32000.0),
            bucket("Feb", 52000.0, 38000.0),
            bucket("Mar", 48000.0, 35000.0),
            bucket("Apr", 61000.0, 42000.0),
            bucket("May", 55000.0, 39000.0),
            bucket("Jun", 67000.0, 45000.0),
        ];

        let first = predict_next_period(&series, 100);
        let second = predict_next_period(&series, 100);
        assert_eq!(first, second);
        assert_eq!(first.profit, first.income - first.expenses);
    }

    #[test]
    fn test_falling_series_predicts_below_average() {
        let series = vec![
            bucket("Jan", 300.0, 0.0),
            bucket("Feb", 200.0, 0.0),
            bucket("Mar", 100.0, 0.0),
        ];

        let prediction = predict_next_period(&series, 3);
        // slope = (1*300 + 2*200 + 3*100)/3 - 2*600/3 = 333.33.. - 400 = -66.66..
        // predicted = round(200 - 100) = 100
        assert_eq!(prediction.income, 100.0);
    }
}
