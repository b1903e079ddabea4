//! Loan service layer - Business logic for loan application management

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{CreateLoanRequest, LoanApplication, LoanStatus, UserRole};
use crate::storage::{self, KeyValueStore, LOAN_APPLICATIONS_SLOT};

/// Loan service owning the application-list slot.
///
/// The record list is the sole source of truth; statistics and filtered views
/// are derived from it on read, never stored.
pub struct LoanService {
    store: Arc<dyn KeyValueStore>,
}

impl LoanService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Full ordered application list. Missing or corrupt data reads as empty.
    pub fn list(&self) -> Vec<LoanApplication> {
        storage::load_list(self.store.as_ref(), LOAN_APPLICATIONS_SLOT)
    }

    /// Applications belonging to the self-service view: records submitted as
    /// `currentUser`, plus legacy records with no user id at all.
    pub fn list_for_current_user(&self) -> Vec<LoanApplication> {
        self.list()
            .into_iter()
            .filter(|app| app.user_id == "currentUser" || app.user_id.is_empty())
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<LoanApplication, ApiError> {
        self.list()
            .into_iter()
            .find(|app| app.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Loan application {}", id)))
    }

    /// Validate and append a new application. The submission is stamped
    /// `Pending` with the current time; the id is timestamp-derived and
    /// bumped on collision so it stays unique within the list.
    pub fn submit(
        &self,
        request: CreateLoanRequest,
        role: UserRole,
    ) -> Result<LoanApplication, ApiError> {
        request.validate()?;

        let mut applications = self.list();
        let now = Utc::now();
        let id = next_id(&applications, now.timestamp_millis());

        let application = LoanApplication {
            id,
            full_name: request.full_name,
            loan_amount: request.loan_amount,
            loan_tenure: request.loan_tenure,
            employment_status: request.employment_status,
            reason_for_loan: request.reason_for_loan,
            employment_address: request.employment_address,
            agreed_to_terms: request.agreed_to_terms,
            user_id: match role {
                UserRole::User => "currentUser".to_string(),
                UserRole::Admin => "adminSubmitted".to_string(),
            },
            submission_date: now,
            status: LoanStatus::Pending,
        };

        applications.push(application.clone());
        storage::save_list(self.store.as_ref(), LOAN_APPLICATIONS_SLOT, &applications)?;

        tracing::info!(id = %application.id, applicant = %application.full_name, "Loan application submitted");

        Ok(application)
    }

    /// Transition an application's status. The target arrives as a raw
    /// string; anything outside the four enumerated values is rejected with
    /// `InvalidStatus` and no mutation is performed. The transition graph
    /// itself is unrestricted, so re-applying the current status is a no-op
    /// rather than an error.
    pub fn set_status(&self, id: &str, target: &str) -> Result<LoanApplication, ApiError> {
        let status = LoanStatus::parse(target)
            .ok_or_else(|| ApiError::InvalidStatus(target.to_string()))?;

        let mut applications = self.list();
        let application = applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Loan application {}", id)))?;

        // Only the status field ever changes after creation.
        application.status = status;
        let updated = application.clone();

        storage::save_list(self.store.as_ref(), LOAN_APPLICATIONS_SLOT, &applications)?;

        tracing::info!(id = %id, status = %status.as_str(), "Loan status changed");

        Ok(updated)
    }

    /// Remove an application outright. No soft-delete, no audit trail.
    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut applications = self.list();
        let before = applications.len();
        applications.retain(|app| app.id != id);

        if applications.len() == before {
            return Err(ApiError::NotFound(format!("Loan application {}", id)));
        }

        storage::save_list(self.store.as_ref(), LOAN_APPLICATIONS_SLOT, &applications)?;

        tracing::info!(id = %id, "Loan application deleted");

        Ok(())
    }
}

/// Timestamp-derived opaque id, unique within the list. Submissions landing
/// in the same millisecond get bumped forward.
fn next_id(applications: &[LoanApplication], timestamp_millis: i64) -> String {
    let mut candidate = timestamp_millis;
    loop {
        let id = candidate.to_string();
        if !applications.iter().any(|app| app.id == id) {
            return id;
        }
        candidate += 1;
    }
}
