use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user wants to do with their body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Lose weight",
            Goal::Maintain => "Maintain weight",
            Goal::Gain => "Gain weight",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Lose => write!(f, "lose"),
            Goal::Maintain => write!(f, "maintain"),
            Goal::Gain => write!(f, "gain"),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Goal::Lose),
            "maintain" => Ok(Goal::Maintain),
            "gain" => Ok(Goal::Gain),
            _ => Err(format!(
                "Invalid goal '{}'. Valid options: lose, maintain, gain",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_roundtrip_str() {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
            assert_eq!(Goal::from_str(&goal.to_string()).unwrap(), goal);
        }
        assert!(Goal::from_str("bulk").is_err());
    }

    #[test]
    fn test_goal_label() {
        assert_eq!(Goal::Lose.label(), "Lose weight");
        assert_eq!(Goal::Gain.label(), "Gain weight");
    }
}
