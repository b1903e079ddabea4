//! Filter/search over the loan application list
//!
//! A single conjunctive predicate in one pass: status filter AND text query.
//! No fuzzy matching, no ranking; relative order is preserved.

use crate::models::{LoanApplication, StatusFilter};

/// Retain a record iff the status filter matches and the query hits either
/// the applicant name (case-insensitive) or the id (literal substring).
/// An empty query matches everything.
pub fn filter_applications(
    applications: &[LoanApplication],
    status: StatusFilter,
    query: &str,
) -> Vec<LoanApplication> {
    let needle = query.to_lowercase();

    applications
        .iter()
        .filter(|app| status.matches(app.status))
        .filter(|app| {
            if needle.is_empty() {
                return true;
            }
            app.full_name.to_lowercase().contains(&needle) || app.id.contains(query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoanStatus;
    use chrono::Utc;

    fn app(id: &str, name: &str, status: LoanStatus) -> LoanApplication {
        LoanApplication {
            id: id.to_string(),
            full_name: name.to_string(),
            loan_amount: 1000.0,
            loan_tenure: 12,
            employment_status: "Employed".to_string(),
            reason_for_loan: "Rent".to_string(),
            employment_address: "123 Main St".to_string(),
            agreed_to_terms: true,
            user_id: "currentUser".to_string(),
            submission_date: Utc::now(),
            status,
        }
    }

    fn sample() -> Vec<LoanApplication> {
        vec![
            app("1700000000001", "Ada Lovelace", LoanStatus::Pending),
            app("1700000000002", "Grace Hopper", LoanStatus::Approved),
            app("1700000000003", "Alan Turing", LoanStatus::Rejected),
        ]
    }

    #[test]
    fn test_identity_law() {
        let apps = sample();
        let filtered = filter_applications(&apps, StatusFilter::All, "");
        assert_eq!(filtered, apps);
    }

    #[test]
    fn test_idempotent() {
        let apps = sample();
        let once = filter_applications(&apps, StatusFilter::Only(LoanStatus::Approved), "grace");
        let twice = filter_applications(&once, StatusFilter::Only(LoanStatus::Approved), "grace");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_status_filter() {
        let apps = sample();
        let filtered = filter_applications(&apps, StatusFilter::Only(LoanStatus::Approved), "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].full_name, "Grace Hopper");
    }

    #[test]
    fn test_name_match_case_insensitive() {
        let apps = sample();
        let filtered = filter_applications(&apps, StatusFilter::All, "ADA");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].full_name, "Ada Lovelace");
    }

    #[test]
    fn test_id_substring_match() {
        let apps = sample();
        let filtered = filter_applications(&apps, StatusFilter::All, "0003");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].full_name, "Alan Turing");
    }

    #[test]
    fn test_conjunction_of_status_and_query() {
        let apps = sample();
        // Name matches but status does not.
        let filtered =
            filter_applications(&apps, StatusFilter::Only(LoanStatus::Approved), "turing");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_match_is_empty_regardless_of_status() {
        let apps = sample();
        for status in [
            StatusFilter::All,
            StatusFilter::Only(LoanStatus::Pending),
            StatusFilter::Only(LoanStatus::Repaid),
        ] {
            assert!(filter_applications(&apps, status, "zzz-no-such").is_empty());
        }
    }

    #[test]
    fn test_order_preserved() {
        let apps = sample();
        let filtered = filter_applications(&apps, StatusFilter::All, "a");
        let names: Vec<_> = filtered.iter().map(|a| a.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper", "Alan Turing"]);
    }
}
