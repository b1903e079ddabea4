//! LoanFlow Backend Library
//!
//! This library exports the core modules for the LoanFlow backend server:
//! the loan application record store, the status state machine, dashboard
//! aggregation, filtering, and the chat persistence endpoint.

pub mod chat_service;
pub mod config;
pub mod error;
pub mod handlers;
pub mod loan_service;
pub mod models;
pub mod role_service;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod storage;
