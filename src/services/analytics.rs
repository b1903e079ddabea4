//! Dashboard aggregation over the loan application list
//!
//! `compute_dashboard` is a pure function of the record list: deterministic,
//! side-effect-free, and safe to recompute on every read. Nothing here is
//! ever stored; the record list stays the sole source of truth.

use chrono::Datelike;
use serde::Serialize;

use crate::models::{LoanApplication, LoanStatus};

/// How many distinct month labels the monthly series keeps.
const MONTHLY_SERIES_LEN: usize = 6;

/// How many records the recent-loans view shows.
const RECENT_LOANS_LEN: usize = 5;

/// Scalar dashboard statistics.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: usize,
    pub total_borrowers: usize,
    pub total_loan_amount: f64,
    pub average_loan_amount: f64,
    pub approved_applications: usize,
    pub success_rate: f64,
    pub repaid_loans: usize,
    pub cash_disbursed: f64,
}

/// One bar of a categorical series.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct SeriesPoint {
    pub label: String,
    pub value: usize,
}

/// Everything the dashboard renders, derived in one pass over the list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub monthly_applications: Vec<SeriesPoint>,
    pub status_distribution: Vec<SeriesPoint>,
    pub recent_loans: Vec<LoanApplication>,
}

/// Derive the full dashboard snapshot from the current record list.
pub fn compute_dashboard(applications: &[LoanApplication]) -> DashboardSnapshot {
    DashboardSnapshot {
        stats: compute_stats(applications),
        monthly_applications: monthly_series(applications),
        status_distribution: status_series(applications),
        recent_loans: recent_loans(applications),
    }
}

fn compute_stats(applications: &[LoanApplication]) -> DashboardStats {
    let total_applications = applications.len();

    let mut borrowers: Vec<&str> = Vec::new();
    for app in applications {
        // Case-sensitive exact match: two applicants sharing a full name
        // collapse into one borrower. Documented quirk, preserved.
        if !borrowers.contains(&app.full_name.as_str()) {
            borrowers.push(&app.full_name);
        }
    }

    let total_loan_amount: f64 = applications.iter().map(amount_or_zero).sum();

    let average_loan_amount = if total_applications > 0 {
        total_loan_amount / total_applications as f64
    } else {
        0.0
    };

    let approved_applications = applications
        .iter()
        .filter(|app| app.status == LoanStatus::Approved)
        .count();

    let success_rate = if total_applications > 0 {
        approved_applications as f64 / total_applications as f64 * 100.0
    } else {
        0.0
    };

    let repaid_loans = applications
        .iter()
        .filter(|app| app.status == LoanStatus::Repaid)
        .count();

    let cash_disbursed: f64 = applications
        .iter()
        .filter(|app| matches!(app.status, LoanStatus::Approved | LoanStatus::Repaid))
        .map(amount_or_zero)
        .sum();

    DashboardStats {
        total_applications,
        total_borrowers: borrowers.len(),
        total_loan_amount,
        average_loan_amount,
        approved_applications,
        success_rate,
        repaid_loans,
        cash_disbursed,
    }
}

// Malformed numeric data never fails aggregation; it counts as zero.
fn amount_or_zero(app: &LoanApplication) -> f64 {
    if app.loan_amount.is_finite() {
        app.loan_amount
    } else {
        0.0
    }
}

/// Applications grouped by short month name of the submission date, in
/// first-occurrence order, truncated to the last six distinct labels seen.
/// Labels recur across years, so a list spanning more than twelve months
/// folds into the same buckets; known limitation carried over.
fn monthly_series(applications: &[LoanApplication]) -> Vec<SeriesPoint> {
    let mut series: Vec<SeriesPoint> = Vec::new();
    for app in applications {
        let label = short_month_name(app.submission_date.month());
        match series.iter_mut().find(|point| point.label == label) {
            Some(point) => point.value += 1,
            None => series.push(SeriesPoint {
                label: label.to_string(),
                value: 1,
            }),
        }
    }

    if series.len() > MONTHLY_SERIES_LEN {
        series.drain(..series.len() - MONTHLY_SERIES_LEN);
    }
    series
}

/// Count per status, in first-occurrence order; only statuses present in the
/// data appear.
fn status_series(applications: &[LoanApplication]) -> Vec<SeriesPoint> {
    let mut series: Vec<SeriesPoint> = Vec::new();
    for app in applications {
        let label = app.status.as_str();
        match series.iter_mut().find(|point| point.label == label) {
            Some(point) => point.value += 1,
            None => series.push(SeriesPoint {
                label: label.to_string(),
                value: 1,
            }),
        }
    }
    series
}

/// Last five records in list order, reversed: most recently appended first.
fn recent_loans(applications: &[LoanApplication]) -> Vec<LoanApplication> {
    applications
        .iter()
        .rev()
        .take(RECENT_LOANS_LEN)
        .cloned()
        .collect()
}

fn short_month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
