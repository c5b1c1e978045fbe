use serde::{Deserialize, Serialize};

/// Financing parameters used to derive a monthly repayment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub purchase_price: f64,
    pub deposit: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl LoanInput {
    pub fn new(purchase_price: f64, deposit: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            purchase_price,
            deposit,
            annual_rate_percent,
            term_months,
        }
    }

    /// Amount financed. Negative when the deposit exceeds the price.
    pub fn principal(&self) -> f64 {
        self.purchase_price - self.deposit
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_subtracts_deposit() {
        let loan = LoanInput::new(1_000_000.0, 100_000.0, 10.0, 360);
        assert_eq!(loan.principal(), 900_000.0);
    }

    #[test]
    fn principal_may_go_negative() {
        let loan = LoanInput::new(10_000.0, 12_000.0, 5.0, 12);
        assert_eq!(loan.principal(), -2_000.0);
    }

    #[test]
    fn monthly_rate_divides_percent_by_twelve() {
        let loan = LoanInput::new(0.0, 0.0, 12.0, 60);
        assert!((loan.monthly_rate() - 0.01).abs() < 1e-12);
    }
}
