use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::numeric::round_to_tenth;

/// Body-mass index (kg/m²) to one decimal. Zero height gives 0.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let squared = height_m * height_m;
    if squared == 0.0 || !squared.is_finite() {
        return 0.0;
    }
    round_to_tenth(weight_kg / squared)
}

/// WHO weight categories by BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObesityClass1
        } else if bmi < 40.0 {
            BmiCategory::ObesityClass2
        } else {
            BmiCategory::ObesityClass3
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityClass1 => "Obesity class I",
            BmiCategory::ObesityClass2 => "Obesity class II",
            BmiCategory::ObesityClass3 => "Obesity class III",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert_eq!(body_mass_index(70.0, 170.0), 24.2);
        assert_eq!(body_mass_index(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::ObesityClass1);
        assert_eq!(BmiCategory::classify(35.0), BmiCategory::ObesityClass2);
        assert_eq!(BmiCategory::classify(40.0), BmiCategory::ObesityClass3);
    }

    #[test]
    fn test_bmi_category_display() {
        assert_eq!(format!("{}", BmiCategory::Normal), "Normal weight");
    }
}
