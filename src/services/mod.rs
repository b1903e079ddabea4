//! Pure computation services: aggregation and filtering over the record list

pub mod analytics;
pub mod search;

pub use analytics::{compute_dashboard, DashboardSnapshot, DashboardStats, SeriesPoint};
pub use search::filter_applications;
