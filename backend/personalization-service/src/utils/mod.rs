// Utility functions for personalization-service

/// Exponential age decay: 1.0 at age zero, 1/e after `decay_days`.
pub fn exponential_decay(age_days: f64, decay_days: f64) -> f64 {
    (-age_days / decay_days).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_decay() {
        assert!((exponential_decay(0.0, 30.0) - 1.0).abs() < 1e-9);

        // One full decay constant
        let decayed = exponential_decay(30.0, 30.0);
        assert!((decayed - (-1.0f64).exp()).abs() < 1e-9);

        // Ten days at the default 30-day window
        let ten_days = exponential_decay(10.0, 30.0);
        assert!((ten_days - 0.7165).abs() < 0.001);
    }
}
