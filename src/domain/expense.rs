//! Expense line items tracked for a single budgeting session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Amounted;

/// Fixed monthly categories, prompted in this order.
pub const FIXED_CATEGORIES: [&str; 5] = [
    "Groceries",
    "Water and lights",
    "Travel costs",
    "Phone expenses",
    "Other expenses",
];

/// A single monthly expense. Loan-derived items carry the computed repayment
/// as their amount; the vehicle item already includes the insurance premium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpenseItem {
    Simple { label: String, amount: f64 },
    Rent { amount: f64 },
    HomeLoan { amount: f64 },
    Vehicle { amount: f64 },
}

impl ExpenseItem {
    pub fn simple(label: impl Into<String>, amount: f64) -> Self {
        ExpenseItem::Simple {
            label: label.into(),
            amount,
        }
    }

    pub fn rent(amount: f64) -> Self {
        ExpenseItem::Rent { amount }
    }

    pub fn home_loan(repayment: f64) -> Self {
        ExpenseItem::HomeLoan { amount: repayment }
    }

    /// Combines the vehicle loan repayment and insurance premium into one item.
    pub fn vehicle(repayment: f64, insurance_premium: f64) -> Self {
        ExpenseItem::Vehicle {
            amount: repayment + insurance_premium,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ExpenseItem::Simple { label, .. } => label,
            ExpenseItem::Rent { .. } => "Rent",
            ExpenseItem::HomeLoan { .. } => "Home loan repayment",
            ExpenseItem::Vehicle { .. } => "Vehicle (loan + insurance)",
        }
    }
}

impl Amounted for ExpenseItem {
    fn amount(&self) -> f64 {
        match self {
            ExpenseItem::Simple { amount, .. }
            | ExpenseItem::Rent { amount }
            | ExpenseItem::HomeLoan { amount }
            | ExpenseItem::Vehicle { amount } => *amount,
        }
    }
}

impl fmt::Display for ExpenseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.label(), self.amount())
    }
}
