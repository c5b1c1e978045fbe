//! Branch decisions that select the optional housing and vehicle items.

use std::str::FromStr;

use crate::errors::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HousingChoice {
    Rent,
    Buy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleChoice {
    Yes,
    No,
}

impl FromStr for HousingChoice {
    type Err = PlannerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rent" => Ok(HousingChoice::Rent),
            "buy" => Ok(HousingChoice::Buy),
            _ => Err(PlannerError::invalid_selection("housing choice", raw.trim())),
        }
    }
}

impl FromStr for VehicleChoice {
    type Err = PlannerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(VehicleChoice::Yes),
            "no" | "n" => Ok(VehicleChoice::No),
            _ => Err(PlannerError::invalid_selection("vehicle choice", raw.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn housing_parses_case_insensitively() {
        assert_eq!("BUY".parse::<HousingChoice>().unwrap(), HousingChoice::Buy);
        assert_eq!(" Rent ".parse::<HousingChoice>().unwrap(), HousingChoice::Rent);
    }

    #[test]
    fn unknown_housing_answer_is_invalid_selection() {
        let err = "lease".parse::<HousingChoice>().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidSelection { .. }));
    }

    #[test]
    fn vehicle_accepts_short_answers() {
        assert_eq!("y".parse::<VehicleChoice>().unwrap(), VehicleChoice::Yes);
        assert_eq!("No".parse::<VehicleChoice>().unwrap(), VehicleChoice::No);
        assert!("maybe".parse::<VehicleChoice>().is_err());
    }
}
