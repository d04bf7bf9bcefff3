pub mod aggregator;
pub mod historical;
pub mod pipeline;
pub mod salary_merge;

pub use aggregator::{PeriodAggregate, PeriodAggregator};
pub use historical::{HistoricalTier, HistoricalTierLookup};
pub use pipeline::CommissionEngine;
pub use salary_merge::{SalaryBreakdown, SalaryMergeStage};
