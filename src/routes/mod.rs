//! Route definitions for the LoanFlow API

mod analytics;
mod chat;
mod loan;
mod role;

pub use analytics::analytics_routes;
pub use chat::chat_routes;
pub use loan::loan_routes;
pub use role::role_routes;
