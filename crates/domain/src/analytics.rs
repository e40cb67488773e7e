pub mod aggregate;
pub mod summary;

pub use aggregate::SalaryAggregator;
pub use summary::SalarySummary;
