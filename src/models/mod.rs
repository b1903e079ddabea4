//! Data models for the LoanFlow backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Loan application lifecycle status.
///
/// The transition graph is deliberately unrestricted: any status may move to
/// any other, including reopening a repaid loan. Only set membership is
/// enforced, at the parse boundary.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    Repaid,
}

impl LoanStatus {
    pub const ALL: [LoanStatus; 4] = [
        LoanStatus::Pending,
        LoanStatus::Approved,
        LoanStatus::Rejected,
        LoanStatus::Repaid,
    ];

    /// Parse a status from its wire string. Anything outside the four
    /// enumerated values is rejected; callers surface this as `InvalidStatus`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(LoanStatus::Pending),
            "Approved" => Some(LoanStatus::Approved),
            "Rejected" => Some(LoanStatus::Rejected),
            "Repaid" => Some(LoanStatus::Repaid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Approved => "Approved",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Repaid => "Repaid",
        }
    }
}

/// A single loan application record.
///
/// Serialized with the original camelCase field names so stored data from the
/// prior system parses unchanged. Every field except `status` is immutable
/// after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: String,
    pub full_name: String,
    pub loan_amount: f64,
    pub loan_tenure: u32,
    pub employment_status: String,
    pub reason_for_loan: String,
    pub employment_address: String,
    pub agreed_to_terms: bool,
    pub user_id: String,
    pub submission_date: DateTime<Utc>,
    pub status: LoanStatus,
}

/// Request to submit a new loan application.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[validate(custom = "non_blank")]
    pub full_name: String,
    #[validate(range(min = 0.000001, message = "Valid loan amount is required"))]
    pub loan_amount: f64,
    #[validate(range(min = 1, message = "Valid loan tenure is required"))]
    pub loan_tenure: u32,
    #[validate(custom = "non_blank")]
    pub employment_status: String,
    #[validate(custom = "non_blank")]
    pub reason_for_loan: String,
    #[validate(custom = "non_blank")]
    pub employment_address: String,
    #[validate(custom = "must_agree")]
    pub agreed_to_terms: bool,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn must_agree(agreed: &bool) -> Result<(), ValidationError> {
    if !*agreed {
        return Err(ValidationError::new("must_agree_to_terms"));
    }
    Ok(())
}

/// Request to change a loan's status. The status arrives as a raw string so
/// out-of-enum values reach the state machine and are rejected there.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// Status filter for the loan list view: `All` or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(LoanStatus),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "All" {
            return Some(StatusFilter::All);
        }
        LoanStatus::parse(s).map(StatusFilter::Only)
    }

    pub fn matches(&self, status: LoanStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == *wanted,
        }
    }
}

/// Query parameters for listing loans.
#[derive(Debug, Deserialize, Default)]
pub struct ListLoansQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// A single chat message. No per-message identity is kept.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// A per-user chat session: the full message list, replaced wholesale on save.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatSession {
    pub user: String,
    pub messages: Vec<ChatMessage>,
}

/// Upsert payload for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct SaveChatRequest {
    pub user: String,
    pub messages: Vec<ChatMessage>,
}

/// Client-chosen UI mode. Not a security boundary; gates nothing server-side.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// Request to change the persisted role mode.
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}
