//! Helper traits and functions shared by models.

use jiff::Timestamp;

/// Models that carry a creation timestamp.
pub trait HasCreatedAt {
    /// Returns the creation timestamp.
    fn created_at(&self) -> Timestamp;
}

/// Arithmetic mean rounded to two decimal places, or `0.0` for no values.
pub fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(calculate_average(&[]), 0.0);
    }

    #[test]
    fn average_is_rounded_to_two_decimals() {
        assert_eq!(calculate_average(&[90.0, 95.0, 100.0]), 95.0);
        assert_eq!(calculate_average(&[1.0, 2.0, 2.0]), 1.67);
        assert_eq!(calculate_average(&[64.556]), 64.56);
    }
}
