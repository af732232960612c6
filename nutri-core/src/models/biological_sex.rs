use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex; only used to pick the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiologicalSex::Male => write!(f, "male"),
            BiologicalSex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!(
                "Invalid biological sex '{}'. Valid options: male, female",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biological_sex_from_str() {
        assert_eq!(BiologicalSex::from_str("M").unwrap(), BiologicalSex::Male);
        assert_eq!(
            BiologicalSex::from_str("female").unwrap(),
            BiologicalSex::Female
        );
        assert!(BiologicalSex::from_str("x").is_err());
    }
}
