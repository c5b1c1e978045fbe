//! The question flow of one budgeting session.
//!
//! Income and tax come first, then the fixed categories, then the two branch
//! points (housing and vehicle). Each branch contributes at most one
//! [`ExpenseItem`]; an unrecognised answer, a non-positive loan term or a
//! rejected loan leaves it out.

use tracing::{info, warn};

use crate::cli::io::Prompter;
use crate::cli::{output, prompts};
use crate::config::{PlannerConfig, TaxMode};
use crate::core::services::{AggregationService, LoanService};
use crate::domain::{
    Amounted, BudgetPlan, BudgetSummary, ExpenseItem, HousingChoice, LoanInput, TaxInput,
    VehicleChoice, FIXED_CATEGORIES,
};
use crate::errors::Result;

pub fn collect<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &PlannerConfig,
) -> Result<BudgetSummary> {
    let gross_income = prompts::amount(prompter, "Gross monthly income")?;
    let tax = collect_tax(prompter, config.tax_mode)?;

    let mut fixed = Vec::with_capacity(FIXED_CATEGORIES.len());
    for category in FIXED_CATEGORIES {
        fixed.push((category, prompts::amount(prompter, category)?));
    }

    let housing = collect_housing(prompter, config)?;
    let vehicle = collect_vehicle(prompter)?;

    let plan = AggregationService::assemble(
        BudgetPlan::new(gross_income, tax),
        fixed,
        housing,
        vehicle,
    );
    let summary = AggregationService::summarize(plan);
    info!(
        total_expenses = summary.total_expenses,
        remaining_income = summary.remaining_income,
        "session complete"
    );
    Ok(summary)
}

fn collect_tax<P: Prompter + ?Sized>(prompter: &mut P, mode: TaxMode) -> Result<TaxInput> {
    Ok(match mode {
        TaxMode::Amount => TaxInput::Amount(prompts::amount(prompter, "Monthly tax deductions")?),
        TaxMode::Rate => TaxInput::RatePercent(prompts::amount(prompter, "Tax rate (%)")?),
    })
}

fn collect_housing<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &PlannerConfig,
) -> Result<Option<ExpenseItem>> {
    match prompts::housing_choice(prompter)? {
        Some(HousingChoice::Rent) => {
            let rent = prompts::amount(prompter, "monthly rental amount")?;
            Ok(Some(ExpenseItem::rent(rent)))
        }
        Some(HousingChoice::Buy) => {
            let purchase_price = prompts::amount(prompter, "purchase price of the property")?;
            let deposit = prompts::amount(prompter, "total deposit")?;
            let rate = prompts::amount(prompter, "interest rate (%)")?;
            let Some(term) = recover_loan(prompts::term_months(
                prompter,
                "loan term in months",
                config.default_home_term_months,
            ))?
            else {
                return Ok(None);
            };
            let loan = LoanInput::new(purchase_price, deposit, rate, term);
            let item = recover_loan(LoanService::home_loan(&loan))?;
            if let Some(item) = &item {
                output::info(format!("Monthly home loan repayment: {:.2}", item.amount()));
            }
            Ok(item)
        }
        None => Ok(None),
    }
}

fn collect_vehicle<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<ExpenseItem>> {
    match prompts::vehicle_choice(prompter)? {
        Some(VehicleChoice::Yes) => {
            let purchase_price = prompts::amount(prompter, "purchase price of the vehicle")?;
            let deposit = prompts::amount(prompter, "total deposit for the vehicle")?;
            let rate = prompts::amount(prompter, "interest rate for the vehicle (%)")?;
            let insurance = prompts::amount(prompter, "estimated insurance premium")?;
            let item = recover_loan(LoanService::vehicle_cost(
                purchase_price,
                deposit,
                rate,
                insurance,
            ))?;
            if let Some(item) = &item {
                output::info(format!(
                    "Total monthly cost of buying the vehicle (loan + insurance): {:.2}",
                    item.amount()
                ));
            }
            Ok(item)
        }
        Some(VehicleChoice::No) | None => Ok(None),
    }
}

/// A loan parameter the calculator refuses is reported and the item dropped;
/// anything else propagates.
fn recover_loan<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            warn!(%err, "loan rejected");
            output::error(&err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::io::ScriptPrompter;
    use std::io::Cursor;

    fn run(input: &str, config: &PlannerConfig) -> Result<BudgetSummary> {
        let mut prompter = ScriptPrompter::silent(Cursor::new(input.to_string()));
        collect(&mut prompter, config)
    }

    const FIXED: &str = "2000\n500\n800\n300\n200\n";

    #[test]
    fn renting_without_vehicle() {
        let input = format!("20000\n1500\n{FIXED}rent\n4000\nno\n");
        let summary = run(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(summary.expense_items.len(), 6);
        assert_eq!(summary.total_expenses, 7_800.0);
        assert_eq!(summary.remaining_income, 10_700.0);
    }

    #[test]
    fn buying_uses_entered_term() {
        let input = format!("20000\n1500\n{FIXED}buy\n1000000\n100000\n10\n360\nno\n");
        let summary = run(&input, &PlannerConfig::default()).unwrap();
        let repayment = summary.home_loan_repayment().unwrap();
        assert!((repayment - 7_898.14).abs() < 0.01);
    }

    #[test]
    fn blank_term_falls_back_to_config_default() {
        let config = PlannerConfig {
            default_home_term_months: 240,
            ..PlannerConfig::default()
        };
        let input = format!("20000\n0\n{FIXED}buy\n120000\n0\n0\n\nno\n");
        let summary = run(&input, &config).unwrap();
        assert_eq!(summary.home_loan_repayment(), Some(500.0));
    }

    #[test]
    fn vehicle_is_financed_over_sixty_months() {
        let config = PlannerConfig {
            default_home_term_months: 12,
            ..PlannerConfig::default()
        };
        let input = format!("20000\n0\n{FIXED}buy\n1200\n0\n0\n\nyes\n6000\n0\n0\n25\n");
        let summary = run(&input, &config).unwrap();
        assert_eq!(summary.home_loan_repayment(), Some(100.0));
        let vehicle = summary.expense_items.last().unwrap();
        assert_eq!(vehicle, &ExpenseItem::vehicle(100.0, 25.0));
    }

    #[test]
    fn invalid_housing_choice_leaves_housing_out() {
        let input = format!("20000\n1500\n{FIXED}lease\nno\n");
        let summary = run(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(summary.expense_items.len(), 5);
        assert!(summary
            .expense_items
            .iter()
            .all(|item| matches!(item, ExpenseItem::Simple { .. })));
        assert_eq!(summary.total_expenses, 3_800.0);
    }

    #[test]
    fn repeated_zero_term_drops_home_loan_and_continues() {
        let input = format!("20000\n1500\n{FIXED}buy\n1000000\n100000\n10\n0\n0\n0\nno\n");
        let summary = run(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(summary.home_loan_repayment(), None);
        assert_eq!(summary.expense_items.len(), 5);
        assert_eq!(summary.total_expenses, 3_800.0);
        assert_eq!(summary.remaining_income, 14_700.0);
    }

    #[test]
    fn negative_term_then_vehicle_still_collected() {
        let input =
            format!("20000\n0\n{FIXED}buy\n1200\n0\n0\n-1\n-1\n-1\nyes\n6000\n0\n0\n25\n");
        let summary = run(&input, &PlannerConfig::default()).unwrap();
        assert_eq!(summary.home_loan_repayment(), None);
        assert_eq!(
            summary.expense_items.last(),
            Some(&ExpenseItem::vehicle(100.0, 25.0))
        );
    }

    #[test]
    fn non_numeric_term_still_ends_the_session() {
        let input = format!("20000\n1500\n{FIXED}buy\n1000000\n100000\n10\nx\ny\nz\nno\n");
        let err = run(&input, &PlannerConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::PlannerError::InvalidNumericInput { .. }
        ));
    }

    #[test]
    fn tax_rate_mode_resolves_to_amount() {
        let config = PlannerConfig {
            tax_mode: TaxMode::Rate,
            ..PlannerConfig::default()
        };
        let input = format!("20000\n10\n{FIXED}rent\n4000\nno\n");
        let summary = run(&input, &config).unwrap();
        assert_eq!(summary.tax_amount, 2_000.0);
        assert_eq!(summary.remaining_income, 10_200.0);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let err = run("20000\n1500\n", &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, crate::errors::PlannerError::InputClosed(_)));
    }
}
