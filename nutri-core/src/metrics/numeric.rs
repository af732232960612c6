/// Rounds to the nearest integer with halves going up (towards +inf).
///
/// `f64::round` sends -2.5 to -3; targets and portions expect -2.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Rounds to one decimal place, halves up.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Returns `value` if it is finite, `default` otherwise.
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// `value` as a percentage of `max`, capped at 100.
///
/// A zero or non-finite denominator, or a non-finite result, yields 0.
pub fn percentage(value: f64, max: f64) -> f64 {
    if max == 0.0 || !max.is_finite() || !value.is_finite() {
        return 0.0;
    }
    finite_or((value / max * 100.0).min(100.0), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    #[test]
    fn test_round_half_up_just_below_half() {
        // 0.5 - 2^-54; adding 0.5 first would round the sum up to 1.0
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.49999999999999994), 0.0);
        assert_eq!(round_half_up(1.4999999999999998), 1.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(2.94), 2.9);
        assert_eq!(round_to_tenth(71.96), 72.0);
    }

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(50.0, 0.0), 0.0);
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(-10.0, 0.0), 0.0);
    }

    #[test]
    fn test_percentage_non_finite() {
        assert_eq!(percentage(f64::NAN, 10.0), 0.0);
        assert_eq!(percentage(10.0, f64::INFINITY), 0.0);
        assert_eq!(percentage(f64::INFINITY, 10.0), 0.0);
    }

    #[test]
    fn test_percentage_caps_at_100() {
        assert_eq!(percentage(50.0, 200.0), 25.0);
        assert_eq!(percentage(300.0, 200.0), 100.0);
    }

    #[test]
    fn test_finite_or() {
        assert_eq!(finite_or(1.5, 0.0), 1.5);
        assert_eq!(finite_or(f64::NAN, 7.0), 7.0);
        assert_eq!(finite_or(f64::NEG_INFINITY, 0.0), 0.0);
    }
}
