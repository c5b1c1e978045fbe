pub mod aggregation_service;
pub mod loan_service;
pub mod report_service;

pub use aggregation_service::AggregationService;
pub use loan_service::LoanService;
pub use report_service::{BudgetReport, BudgetWarning, ReportService, Thresholds};
