use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Amounted, BudgetSummary, ExpenseItem};

/// Income shares above which advisory warnings are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub home_loan_income_share: f64,
    pub expense_income_share: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            home_loan_income_share: 1.0 / 3.0,
            expense_income_share: 0.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetWarning {
    HomeLoanShare { repayment: f64, limit: f64, share: f64 },
    ExpenseShare { total: f64, limit: f64, share: f64 },
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetWarning::HomeLoanShare {
                repayment,
                limit,
                share,
            } => write!(
                f,
                "Home loan repayment of {repayment:.2} is more than {:.0}% of your gross income ({limit:.2}).",
                share * 100.0
            ),
            BudgetWarning::ExpenseShare { total, limit, share } => write!(
                f,
                "Total expenses of {total:.2} exceed {:.0}% of your gross income ({limit:.2}).",
                share * 100.0
            ),
        }
    }
}

/// Presentation-ready view of a finalized budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub gross_income: f64,
    pub tax_amount: f64,
    /// Sorted by amount, largest first.
    pub expenses: Vec<ExpenseItem>,
    pub total_expenses: f64,
    pub remaining_income: f64,
    pub warnings: Vec<BudgetWarning>,
}

pub struct ReportService;

impl ReportService {
    pub fn build(summary: &BudgetSummary, thresholds: &Thresholds) -> BudgetReport {
        let warnings = Self::warnings(summary, thresholds);
        for warning in &warnings {
            info!(%warning, "budget warning");
        }
        BudgetReport {
            gross_income: summary.gross_income,
            tax_amount: summary.tax_amount,
            expenses: Self::sorted_descending(&summary.expense_items),
            total_expenses: summary.total_expenses,
            remaining_income: summary.remaining_income,
            warnings,
        }
    }

    /// Stable: items with equal amounts keep their insertion order.
    pub fn sorted_descending(items: &[ExpenseItem]) -> Vec<ExpenseItem> {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| b.amount().total_cmp(&a.amount()));
        sorted
    }

    pub fn warnings(summary: &BudgetSummary, thresholds: &Thresholds) -> Vec<BudgetWarning> {
        let mut warnings = Vec::new();

        if let Some(repayment) = summary.home_loan_repayment() {
            let share = thresholds.home_loan_income_share;
            let limit = summary.gross_income * share;
            if repayment > limit {
                warnings.push(BudgetWarning::HomeLoanShare {
                    repayment,
                    limit,
                    share,
                });
            }
        }

        let share = thresholds.expense_income_share;
        let limit = summary.gross_income * share;
        if summary.total_expenses > limit {
            warnings.push(BudgetWarning::ExpenseShare {
                total: summary.total_expenses,
                limit,
                share,
            });
        }

        warnings
    }
}
