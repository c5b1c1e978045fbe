use tracing::debug;

use crate::domain::{ExpenseItem, LoanInput};
use crate::errors::{PlannerError, Result};

/// Vehicle financing term, independent of the home loan term.
pub const VEHICLE_TERM_MONTHS: u32 = 60;

pub struct LoanService;

impl LoanService {
    /// Fixed monthly payment that fully amortizes the principal over the
    /// term. A zero rate degrades to straight-line repayment.
    pub fn monthly_repayment(loan: &LoanInput) -> Result<f64> {
        if loan.term_months == 0 {
            return Err(PlannerError::DegenerateLoanParameters(
                "loan term must be at least one month".into(),
            ));
        }
        let principal = loan.principal();
        let rate = loan.monthly_rate();
        let months = f64::from(loan.term_months);

        let payment = if rate == 0.0 {
            principal / months
        } else {
            let denom = 1.0 - (1.0 + rate).powf(-months);
            if denom == 0.0 || !denom.is_finite() {
                return Err(PlannerError::DegenerateLoanParameters(format!(
                    "annual rate {}% cannot amortize over {} months",
                    loan.annual_rate_percent, loan.term_months
                )));
            }
            principal * rate / denom
        };

        debug!(
            principal,
            monthly_rate = rate,
            term_months = loan.term_months,
            payment,
            "computed monthly repayment"
        );
        Ok(payment)
    }

    pub fn home_loan(loan: &LoanInput) -> Result<ExpenseItem> {
        Self::monthly_repayment(loan).map(ExpenseItem::home_loan)
    }

    /// Vehicle financing always runs over [`VEHICLE_TERM_MONTHS`]; the
    /// premium is folded into the item.
    pub fn vehicle_cost(
        purchase_price: f64,
        deposit: f64,
        annual_rate_percent: f64,
        insurance_premium: f64,
    ) -> Result<ExpenseItem> {
        let loan = LoanInput::new(
            purchase_price,
            deposit,
            annual_rate_percent,
            VEHICLE_TERM_MONTHS,
        );
        let repayment = Self::monthly_repayment(&loan)?;
        Ok(ExpenseItem::vehicle(repayment, insurance_premium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amounted;

    #[test]
    fn home_loan_matches_amortization_table() {
        let loan = LoanInput::new(1_000_000.0, 100_000.0, 10.0, 360);
        let payment = LoanService::monthly_repayment(&loan).unwrap();
        assert!((payment - 7_898.14).abs() < 0.01, "payment was {payment}");
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let loan = LoanInput::new(12_000.0, 2_000.0, 0.0, 40);
        let payment = LoanService::monthly_repayment(&loan).unwrap();
        assert_eq!(payment, 250.0);
    }

    #[test]
    fn zero_term_is_rejected() {
        let loan = LoanInput::new(12_000.0, 0.0, 5.0, 0);
        let err = LoanService::monthly_repayment(&loan).unwrap_err();
        assert!(matches!(err, PlannerError::DegenerateLoanParameters(_)));
    }

    #[test]
    fn zero_rate_and_zero_term_is_rejected_before_division() {
        let loan = LoanInput::new(12_000.0, 0.0, 0.0, 0);
        assert!(LoanService::monthly_repayment(&loan).is_err());
    }

    #[test]
    fn deposit_above_price_yields_non_positive_payment() {
        let loan = LoanInput::new(10_000.0, 15_000.0, 6.0, 24);
        let payment = LoanService::monthly_repayment(&loan).unwrap();
        assert!(payment < 0.0);

        let loan = LoanInput::new(10_000.0, 10_000.0, 6.0, 24);
        assert_eq!(LoanService::monthly_repayment(&loan).unwrap(), 0.0);
    }

    #[test]
    fn vehicle_cost_combines_repayment_and_insurance() {
        let item = LoanService::vehicle_cost(300_000.0, 30_000.0, 12.0, 1_200.0).unwrap();
        let loan = LoanInput::new(300_000.0, 30_000.0, 12.0, 60);
        let expected = LoanService::monthly_repayment(&loan).unwrap() + 1_200.0;
        assert!((item.amount() - expected).abs() < 1e-9);
        assert!((item.amount() - 7_206.00).abs() < 0.01, "amount was {}", item.amount());
    }
}
