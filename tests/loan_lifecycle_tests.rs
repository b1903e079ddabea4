//! Loan Lifecycle Tests
//!
//! Submission, status transitions, filtering, and persistence across service
//! instances, driven through the storage port.

use std::sync::Arc;

use chrono::Utc;
use loanflow_server::error::ApiError;
use loanflow_server::loan_service::LoanService;
use loanflow_server::models::{
    CreateLoanRequest, LoanApplication, LoanStatus, StatusFilter, UserRole,
};
use loanflow_server::services::filter_applications;
use loanflow_server::storage::{self, FileStore, MemoryStore, LOAN_APPLICATIONS_SLOT};

fn request(name: &str, amount: f64) -> CreateLoanRequest {
    CreateLoanRequest {
        full_name: name.to_string(),
        loan_amount: amount,
        loan_tenure: 12,
        employment_status: "Employed".to_string(),
        reason_for_loan: "Working capital".to_string(),
        employment_address: "123 Main St, Anytown".to_string(),
        agreed_to_terms: true,
    }
}

// ============================================================================
// Status State Machine
// ============================================================================

#[test]
fn test_full_lifecycle_pending_to_repaid() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    let created = service.submit(request("John Doe", 50000.0), UserRole::User).unwrap();
    assert_eq!(created.status, LoanStatus::Pending);

    let approved = service.set_status(&created.id, "Approved").unwrap();
    assert_eq!(approved.status, LoanStatus::Approved);

    let repaid = service.set_status(&created.id, "Repaid").unwrap();
    assert_eq!(repaid.status, LoanStatus::Repaid);
}

#[test]
fn test_reopening_repaid_loan_is_allowed() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    let created = service.submit(request("John Doe", 50000.0), UserRole::User).unwrap();

    service.set_status(&created.id, "Repaid").unwrap();
    let reopened = service.set_status(&created.id, "Pending").unwrap();
    assert_eq!(reopened.status, LoanStatus::Pending);
}

#[test]
fn test_out_of_enum_status_is_rejected_without_mutation() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    let created = service.submit(request("John Doe", 50000.0), UserRole::User).unwrap();
    service.set_status(&created.id, "Approved").unwrap();

    for bad in ["Defaulted", "approved", "APPROVED", "", "All"] {
        let err = service.set_status(&created.id, bad).unwrap_err();
        assert!(matches!(err, ApiError::InvalidStatus(_)), "{bad:?}");
    }

    assert_eq!(service.get(&created.id).unwrap().status, LoanStatus::Approved);
}

#[test]
fn test_reapplying_current_status_is_a_noop() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    let created = service.submit(request("John Doe", 50000.0), UserRole::User).unwrap();

    let unchanged = service.set_status(&created.id, "Pending").unwrap();
    assert_eq!(unchanged, created);
}

// ============================================================================
// Filter/Search Engine
// ============================================================================

#[test]
fn test_filter_identity_law_over_live_records() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    for name in ["Ada Lovelace", "Grace Hopper", "Alan Turing"] {
        service.submit(request(name, 1000.0), UserRole::User).unwrap();
    }

    let all = service.list();
    assert_eq!(filter_applications(&all, StatusFilter::All, ""), all);
}

#[test]
fn test_filter_combines_status_and_search() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    let ada = service.submit(request("Ada Lovelace", 1000.0), UserRole::User).unwrap();
    service.submit(request("Adam Smith", 2000.0), UserRole::User).unwrap();
    service.set_status(&ada.id, "Approved").unwrap();

    let all = service.list();
    let hits = filter_applications(&all, StatusFilter::Only(LoanStatus::Approved), "ada");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name, "Ada Lovelace");
}

#[test]
fn test_filter_matches_id_substring() {
    let service = LoanService::new(Arc::new(MemoryStore::new()));
    let created = service.submit(request("Ada Lovelace", 1000.0), UserRole::User).unwrap();

    let all = service.list();
    let tail = &created.id[created.id.len() - 4..];
    let hits = filter_applications(&all, StatusFilter::All, tail);
    assert!(hits.iter().any(|a| a.id == created.id));
}

// ============================================================================
// Self-Service View
// ============================================================================

#[test]
fn test_current_user_view_includes_legacy_records_without_user_id() {
    let store = Arc::new(MemoryStore::new());
    let legacy = LoanApplication {
        id: "1609459200000".to_string(),
        full_name: "Jane Roe".to_string(),
        loan_amount: 5000.0,
        loan_tenure: 6,
        employment_status: "Employed".to_string(),
        reason_for_loan: "Medical".to_string(),
        employment_address: "9 Elm St, Anytown".to_string(),
        agreed_to_terms: true,
        user_id: String::new(),
        submission_date: Utc::now(),
        status: LoanStatus::Pending,
    };
    storage::save_list(store.as_ref(), LOAN_APPLICATIONS_SLOT, &[legacy]).unwrap();

    let service = LoanService::new(store);
    service.submit(request("John Doe", 50000.0), UserRole::Admin).unwrap();

    // The legacy record shows up; the admin-submitted one does not.
    let mine = service.list_for_current_user();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].full_name, "Jane Roe");
    assert_eq!(service.list().len(), 2);
}

// ============================================================================
// Persistence Across Instances
// ============================================================================

#[test]
fn test_records_survive_service_restart_on_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("data")).unwrap());

    let created = {
        let service = LoanService::new(store.clone());
        service.submit(request("John Doe", 50000.0), UserRole::User).unwrap()
    };

    // A fresh service over the same directory sees the same list.
    let reopened_store = Arc::new(FileStore::new(dir.path().join("data")).unwrap());
    let service = LoanService::new(reopened_store);
    let list = service.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, created.id);
    assert_eq!(list[0].full_name, "John Doe");
}

#[test]
fn test_corrupt_slot_reads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("loan_applications.json"), "{{ not json").unwrap();

    let store = Arc::new(FileStore::new(&data_dir).unwrap());
    let service = LoanService::new(store);
    assert!(service.list().is_empty());

    // The service is still writable afterwards.
    service.submit(request("John Doe", 50000.0), UserRole::User).unwrap();
    assert_eq!(service.list().len(), 1);
}
