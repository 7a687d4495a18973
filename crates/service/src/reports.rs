//! In-process store for missing-person/pet reports.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use lafires_core::{MissingReport, MissingReportInput, ReportFilter};

use crate::ServiceError;

/// Append-only report store, shared across requests via `Arc`.
///
/// The id counter is atomic and the vector is behind an `RwLock`, so
/// concurrent appends neither lose records nor hand out duplicate ids.
/// Process-lifetime only — restart forgets everything.
#[derive(Debug, Default)]
pub struct MissingReportsStore {
    next_id: AtomicU64,
    reports: RwLock<Vec<MissingReport>>,
}

impl MissingReportsStore {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: AtomicU64::new(1), reports: RwLock::new(Vec::new()) }
    }

    /// Validates, assigns an id and timestamp, stores, and returns the
    /// stored record.
    ///
    /// # Errors
    /// `InvalidInput` when a required field is missing; nothing is stored.
    pub async fn append(&self, input: MissingReportInput) -> Result<MissingReport, ServiceError> {
        input.validate().map_err(ServiceError::InvalidInput)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let report = input.into_report(id);
        self.reports.write().await.push(report.clone());
        tracing::info!(id, "stored missing report");
        Ok(report)
    }

    /// All reports matching `filter`, in insertion order.
    pub async fn list(&self, filter: &ReportFilter) -> Vec<MissingReport> {
        self.reports
            .read()
            .await
            .iter()
            .filter(|report| filter.matches(report))
            .cloned()
            .collect()
    }
}
