//! API handlers for the LoanFlow backend

pub mod analytics;
pub mod chat;
pub mod loan;
pub mod role;

pub use analytics::get_analytics;
pub use chat::{get_chats, save_chat};
pub use loan::{create_loan, delete_loan, get_loan, list_loans, list_my_loans, set_loan_status};
pub use role::{get_role, set_role};
