use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Meal services offered by the restaurants.
///
/// Serialized as the literal values the menu service uses, which are
/// compared case-sensitively against `tipoRefeicao`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "Almoço")]
    Lunch,
    #[serde(rename = "Jantar")]
    Dinner,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown meal type `{0}` (expected lunch/almoço or dinner/jantar)")]
pub struct ParseMealTypeError(String);

impl MealType {
    pub const ALL: [MealType; 2] = [MealType::Lunch, MealType::Dinner];

    /// The exact value the menu service uses for this meal.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "Almoço",
            MealType::Dinner => "Jantar",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl FromStr for MealType {
    type Err = ParseMealTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "almoço" | "almoco" | "lunch" => Ok(MealType::Lunch),
            "jantar" | "dinner" => Ok(MealType::Dinner),
            _ => Err(ParseMealTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_portuguese_names() {
        assert_eq!("Almoço".parse::<MealType>(), Ok(MealType::Lunch));
        assert_eq!("ALMOÇO".parse::<MealType>(), Ok(MealType::Lunch));
        assert_eq!("almoco".parse::<MealType>(), Ok(MealType::Lunch));
        assert_eq!("Jantar".parse::<MealType>(), Ok(MealType::Dinner));
    }

    #[test]
    fn parse_english_names() {
        assert_eq!(" lunch ".parse::<MealType>(), Ok(MealType::Lunch));
        assert_eq!("Dinner".parse::<MealType>(), Ok(MealType::Dinner));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "breakfast".parse::<MealType>(),
            Err(ParseMealTypeError("breakfast".to_string()))
        );
    }

    #[test]
    fn display_uses_api_value() {
        assert_eq!(MealType::Lunch.to_string(), "Almoço");
        assert_eq!(MealType::Dinner.to_string(), "Jantar");
    }

    #[test]
    fn serde_uses_api_value() {
        assert_eq!(
            serde_json::to_string(&MealType::Lunch).unwrap(),
            r#""Almoço""#
        );
        assert_eq!(
            serde_json::from_str::<MealType>(r#""Jantar""#).unwrap(),
            MealType::Dinner
        );
    }
}
