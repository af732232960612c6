use serde::Serialize;

/// Fastest weight loss considered healthy, kg per week.
pub const MAX_WEEKLY_LOSS_KG: f64 = 1.2;

/// Slowest weight loss still worth planning for, kg per week.
pub const MIN_WEEKLY_LOSS_KG: f64 = 0.5;

/// Outcome of checking a weight-loss timeline.
///
/// `adjusted_weeks` is a suggestion only; nothing applies it automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaceValidation {
    pub is_valid: bool,
    pub adjusted_weeks: u32,
    pub message: Option<String>,
}

impl PaceValidation {
    /// Valid, but the timeline is slower than it needs to be.
    pub fn is_advisory(&self) -> bool {
        self.is_valid && self.message.is_some()
    }
}

/// Checks that losing `current_weight − target_weight` kg in
/// `requested_weeks` stays within 0.5–1.2 kg per week.
///
/// Too fast is invalid and suggests the minimum number of weeks. Too slow is
/// still valid but carries a message with the recommended band.
pub fn validate_weight_loss_pace(
    current_weight: f64,
    target_weight: f64,
    requested_weeks: u32,
) -> PaceValidation {
    let difference = current_weight - target_weight;

    if difference.is_nan() || difference <= 0.0 {
        return PaceValidation {
            is_valid: false,
            adjusted_weeks: requested_weeks,
            message: Some(
                "Target weight must be below your current weight to lose weight.".to_string(),
            ),
        };
    }

    let min_weeks = (difference / MAX_WEEKLY_LOSS_KG).ceil() as u32;
    let max_weeks = (difference / MIN_WEEKLY_LOSS_KG).ceil() as u32;

    if requested_weeks < min_weeks {
        return PaceValidation {
            is_valid: false,
            adjusted_weeks: min_weeks,
            message: Some(format!(
                "To lose {:.1}kg at a healthy pace we recommend at least {} weeks.",
                difference, min_weeks
            )),
        };
    }

    if requested_weeks > max_weeks {
        return PaceValidation {
            is_valid: true,
            adjusted_weeks: requested_weeks,
            message: Some(format!(
                "You can reach your goal sooner. We recommend between {} and {} weeks.",
                min_weeks, max_weeks
            )),
        };
    }

    PaceValidation {
        is_valid: true,
        adjusted_weeks: requested_weeks,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_fast_is_rejected_with_minimum() {
        let result = validate_weight_loss_pace(80.0, 75.0, 3);
        assert!(!result.is_valid);
        assert_eq!(result.adjusted_weeks, 5);
        let message = result.message.unwrap();
        assert!(message.contains("5.0kg"));
        assert!(message.contains("5 weeks"));
    }

    #[test]
    fn test_too_slow_is_valid_with_advice() {
        let result = validate_weight_loss_pace(80.0, 75.0, 15);
        assert!(result.is_valid);
        assert!(result.is_advisory());
        assert_eq!(result.adjusted_weeks, 15);
        assert!(result.message.unwrap().contains("between 5 and 10 weeks"));
    }

    #[test]
    fn test_within_band_has_no_message() {
        for weeks in 5..=10 {
            let result = validate_weight_loss_pace(80.0, 75.0, weeks);
            assert!(result.is_valid);
            assert!(result.message.is_none());
            assert_eq!(result.adjusted_weeks, weeks);
        }
    }

    #[test]
    fn test_target_not_below_current() {
        for target in [80.0, 85.0] {
            let result = validate_weight_loss_pace(80.0, target, 10);
            assert!(!result.is_valid);
            assert_eq!(result.adjusted_weeks, 10);
            assert!(result.message.unwrap().contains("below your current weight"));
        }
    }

    #[test]
    fn test_nan_target_is_rejected() {
        let result = validate_weight_loss_pace(80.0, f64::NAN, 10);
        assert!(!result.is_valid);
    }
}
