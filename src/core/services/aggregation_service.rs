use tracing::debug;

use crate::domain::{Amounted, BudgetPlan, BudgetSummary, ExpenseItem};

pub struct AggregationService;

impl AggregationService {
    /// Extends `plan` with the fixed categories first, then the optional
    /// housing and vehicle items. Each input contributes at most once.
    pub fn assemble<I, S>(
        plan: BudgetPlan,
        fixed: I,
        housing: Option<ExpenseItem>,
        vehicle: Option<ExpenseItem>,
    ) -> BudgetPlan
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        fixed
            .into_iter()
            .fold(plan, |plan, (label, amount)| {
                plan.with_item(ExpenseItem::simple(label, amount))
            })
            .with_optional(housing)
            .with_optional(vehicle)
    }

    pub fn total(items: &[ExpenseItem]) -> f64 {
        items.iter().map(Amounted::amount).sum()
    }

    /// Finalizes a plan. The total is derived from the items present now, so
    /// the summary cannot disagree with its own line items.
    pub fn summarize(plan: BudgetPlan) -> BudgetSummary {
        let tax_amount = plan.tax_amount();
        let total_expenses = Self::total(&plan.items);
        let remaining_income = plan.gross_income - tax_amount - total_expenses;
        debug!(
            items = plan.items.len(),
            total_expenses, remaining_income, "aggregated budget"
        );
        BudgetSummary {
            gross_income: plan.gross_income,
            tax_amount,
            expense_items: plan.items,
            total_expenses,
            remaining_income,
        }
    }
}
