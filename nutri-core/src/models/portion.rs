use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Household measures a food quantity can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PortionUnit {
    #[default]
    Gram,
    Milliliter,
    Unit,
    Tablespoon,
    Teaspoon,
    Cup,
    Glass,
    Slice,
    Piece,
}

impl PortionUnit {
    /// Approximate grams in one of this unit.
    pub fn grams_equivalent(&self) -> f64 {
        match self {
            PortionUnit::Gram => 1.0,
            PortionUnit::Milliliter => 1.0,
            PortionUnit::Unit => 100.0,
            PortionUnit::Tablespoon => 15.0,
            PortionUnit::Teaspoon => 5.0,
            PortionUnit::Cup => 240.0,
            PortionUnit::Glass => 200.0,
            PortionUnit::Slice => 30.0,
            PortionUnit::Piece => 50.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortionUnit::Gram => "grams (g)",
            PortionUnit::Milliliter => "milliliters (ml)",
            PortionUnit::Unit => "unit",
            PortionUnit::Tablespoon => "tablespoon",
            PortionUnit::Teaspoon => "teaspoon",
            PortionUnit::Cup => "cup",
            PortionUnit::Glass => "glass",
            PortionUnit::Slice => "slice",
            PortionUnit::Piece => "piece",
        }
    }
}

impl fmt::Display for PortionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortionUnit::Gram => "g",
            PortionUnit::Milliliter => "ml",
            PortionUnit::Unit => "unit",
            PortionUnit::Tablespoon => "tablespoon",
            PortionUnit::Teaspoon => "teaspoon",
            PortionUnit::Cup => "cup",
            PortionUnit::Glass => "glass",
            PortionUnit::Slice => "slice",
            PortionUnit::Piece => "piece",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PortionUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(PortionUnit::Gram),
            "ml" | "milliliter" | "milliliters" => Ok(PortionUnit::Milliliter),
            "unit" => Ok(PortionUnit::Unit),
            "tablespoon" | "tbsp" => Ok(PortionUnit::Tablespoon),
            "teaspoon" | "tsp" => Ok(PortionUnit::Teaspoon),
            "cup" => Ok(PortionUnit::Cup),
            "glass" => Ok(PortionUnit::Glass),
            "slice" => Ok(PortionUnit::Slice),
            "piece" => Ok(PortionUnit::Piece),
            _ => Err(format!(
                "Invalid portion unit '{}'. Valid options: g, ml, unit, tablespoon, teaspoon, cup, glass, slice, piece",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_equivalent() {
        assert_eq!(PortionUnit::Gram.grams_equivalent(), 1.0);
        assert_eq!(PortionUnit::Cup.grams_equivalent(), 240.0);
        assert_eq!(PortionUnit::Piece.grams_equivalent(), 50.0);
    }

    #[test]
    fn test_portion_unit_from_str() {
        assert_eq!(PortionUnit::from_str("tbsp").unwrap(), PortionUnit::Tablespoon);
        assert_eq!(PortionUnit::from_str("ML").unwrap(), PortionUnit::Milliliter);
        assert!(PortionUnit::from_str("bucket").is_err());
    }
}
