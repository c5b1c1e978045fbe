//! Typed questions built on a [`Prompter`]. Numeric answers are re-asked a
//! few times before giving up; choices are asked once.

use tracing::warn;

use crate::cli::io::Prompter;
use crate::cli::output;
use crate::domain::{HousingChoice, VehicleChoice};
use crate::errors::{PlannerError, Result};

pub const MAX_ATTEMPTS: usize = 3;

pub fn parse_amount(raw: &str, field: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PlannerError::invalid_number(field, raw.trim())),
    }
}

/// Blank answers fall back to `default`.
pub fn parse_term(raw: &str, field: &str, default: u32) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    let months = trimmed
        .parse::<i64>()
        .map_err(|_| PlannerError::invalid_number(field, trimmed))?;
    u32::try_from(months)
        .ok()
        .filter(|months| *months > 0)
        .ok_or_else(|| {
            PlannerError::DegenerateLoanParameters(format!(
                "{field} must be positive, got {months}"
            ))
        })
}

pub fn amount<P: Prompter + ?Sized>(prompter: &mut P, field: &str) -> Result<f64> {
    retry(prompter, &format!("Enter your {field}"), |raw| {
        parse_amount(raw, field)
    })
}

pub fn term_months<P: Prompter + ?Sized>(
    prompter: &mut P,
    field: &str,
    default: u32,
) -> Result<u32> {
    retry(
        prompter,
        &format!("Enter the {field} [{default}]"),
        |raw| parse_term(raw, field, default),
    )
}

pub fn housing_choice<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<HousingChoice>> {
    let raw = prompter.ask("Are you renting or buying a property? (rent/buy)")?;
    recover_selection(raw.parse())
}

pub fn vehicle_choice<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<VehicleChoice>> {
    let raw = prompter.ask("Are you buying a vehicle? (yes/no)")?;
    recover_selection(raw.parse())
}

fn recover_selection<T>(parsed: Result<T>) -> Result<Option<T>> {
    match parsed {
        Ok(choice) => Ok(Some(choice)),
        Err(err @ PlannerError::InvalidSelection { .. }) => {
            warn!(%err, "unrecognised selection, treating item as absent");
            output::error(&err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn retry<P, T, F>(prompter: &mut P, question: &str, parse: F) -> Result<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<T>,
{
    let mut attempt = 1;
    loop {
        let raw = prompter.ask(question)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(err) if attempt < MAX_ATTEMPTS => {
                output::error(format!("{err}. Please try again."));
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
