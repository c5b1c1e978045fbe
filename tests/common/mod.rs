#![allow(dead_code)]

use budget_planner::domain::FIXED_CATEGORIES;

/// Income, tax and the fixed categories used across the scenario tests.
pub const GROSS_INCOME: f64 = 20_000.0;
pub const TAX: f64 = 1_500.0;
pub const FIXED_AMOUNTS: [f64; 5] = [2_000.0, 500.0, 800.0, 300.0, 200.0];

pub fn fixed_entries() -> Vec<(&'static str, f64)> {
    FIXED_CATEGORIES
        .iter()
        .copied()
        .zip(FIXED_AMOUNTS)
        .collect()
}

/// Builds newline-separated answers for script mode, starting with income,
/// tax and the fixed categories.
pub fn script(tail: &[&str]) -> String {
    let mut lines: Vec<String> = vec![GROSS_INCOME.to_string(), TAX.to_string()];
    lines.extend(FIXED_AMOUNTS.iter().map(f64::to_string));
    lines.extend(tail.iter().map(|line| line.to_string()));
    let mut joined = lines.join("\n");
    joined.push('\n');
    joined
}
