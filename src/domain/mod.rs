pub mod budget;
pub mod choice;
pub mod common;
pub mod expense;
pub mod loan;

pub use budget::{BudgetPlan, BudgetSummary, TaxInput};
pub use choice::{HousingChoice, VehicleChoice};
pub use common::Amounted;
pub use expense::{ExpenseItem, FIXED_CATEGORIES};
pub use loan::LoanInput;
