//! Session aggregate: income, tax and the accumulated expense items.

use serde::{Deserialize, Serialize};

use crate::domain::expense::ExpenseItem;

/// How the tax figure was supplied. Always resolved to an absolute monthly
/// amount before reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum TaxInput {
    Amount(f64),
    RatePercent(f64),
}

impl TaxInput {
    pub fn resolve(&self, gross_income: f64) -> f64 {
        match self {
            TaxInput::Amount(amount) => *amount,
            TaxInput::RatePercent(rate) => gross_income * rate / 100.0,
        }
    }
}

impl Default for TaxInput {
    fn default() -> Self {
        TaxInput::Amount(0.0)
    }
}

/// Accumulates the session's inputs. Each step consumes the plan and hands
/// back an extended one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetPlan {
    pub gross_income: f64,
    pub tax: TaxInput,
    pub items: Vec<ExpenseItem>,
}

impl BudgetPlan {
    pub fn new(gross_income: f64, tax: TaxInput) -> Self {
        Self {
            gross_income,
            tax,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: ExpenseItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_optional(self, item: Option<ExpenseItem>) -> Self {
        match item {
            Some(item) => self.with_item(item),
            None => self,
        }
    }

    pub fn tax_amount(&self) -> f64 {
        self.tax.resolve(self.gross_income)
    }
}

/// Finalized totals for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub gross_income: f64,
    pub tax_amount: f64,
    pub expense_items: Vec<ExpenseItem>,
    pub total_expenses: f64,
    pub remaining_income: f64,
}

impl BudgetSummary {
    pub fn home_loan_repayment(&self) -> Option<f64> {
        self.expense_items.iter().find_map(|item| match item {
            ExpenseItem::HomeLoan { amount } => Some(*amount),
            _ => None,
        })
    }
}
