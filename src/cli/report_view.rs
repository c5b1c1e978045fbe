use crate::cli::output;
use crate::core::services::BudgetReport;
use crate::domain::Amounted;

const LABEL_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 12;

pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// One line per expense, already in report order.
pub fn expense_lines(report: &BudgetReport) -> Vec<String> {
    report
        .expenses
        .iter()
        .map(|item| {
            format!(
                "  {:<label$} {:>amount$}",
                item.label(),
                format_amount(item.amount()),
                label = LABEL_WIDTH,
                amount = AMOUNT_WIDTH
            )
        })
        .collect()
}

pub fn remaining_line(report: &BudgetReport) -> String {
    format!(
        "Available monthly money after deductions: {}",
        format_amount(report.remaining_income)
    )
}

pub fn render(report: &BudgetReport) {
    output::section("Expenses in descending order");
    for line in expense_lines(report) {
        output::info(line);
    }
    output::info(format!(
        "  {:<label$} {:>amount$}",
        "Total expenses",
        format_amount(report.total_expenses),
        label = LABEL_WIDTH,
        amount = AMOUNT_WIDTH
    ));
    output::info(format!(
        "  {:<label$} {:>amount$}",
        "Tax",
        format_amount(report.tax_amount),
        label = LABEL_WIDTH,
        amount = AMOUNT_WIDTH
    ));

    for warning in &report.warnings {
        output::warning(warning);
    }

    let line = remaining_line(report);
    if report.remaining_income < 0.0 {
        output::error(line);
    } else {
        output::success(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseItem;

    fn report() -> BudgetReport {
        BudgetReport {
            gross_income: 20_000.0,
            tax_amount: 1_500.0,
            expenses: vec![
                ExpenseItem::rent(4_000.0),
                ExpenseItem::simple("Phone expenses", 300.0),
            ],
            total_expenses: 4_300.0,
            remaining_income: 14_200.0,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn lines_follow_report_order() {
        let lines = expense_lines(&report());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].trim_start().starts_with("Rent"));
        assert!(lines[0].ends_with("4000.00"));
        assert!(lines[1].contains("Phone expenses"));
    }

    #[test]
    fn remaining_line_uses_two_decimals() {
        assert_eq!(
            remaining_line(&report()),
            "Available monthly money after deductions: 14200.00"
        );
    }
}
