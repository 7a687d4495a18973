//! Missing person/pet reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored missing-person/pet report.
///
/// Created once, never mutated, held for the process lifetime only.
#[derive(Debug, Clone, Serialize)]
pub struct MissingReport {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reporter-supplied fields of a new report, before an id is assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct MissingReportInput {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub last_seen_location: Option<String>,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

impl MissingReportInput {
    /// Checks the create contract: a non-empty name plus at least one way
    /// to follow up (contact info or a last-seen location).
    ///
    /// # Errors
    /// Returns a caller-facing message when a required field is missing.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_owned());
        }
        let has_contact = self.contact.as_deref().is_some_and(|c| !c.trim().is_empty());
        let has_location =
            self.last_seen_location.as_deref().is_some_and(|l| !l.trim().is_empty());
        if !has_contact && !has_location {
            return Err("at least one of contact or last_seen_location is required".to_owned());
        }
        Ok(())
    }

    /// Materializes the stored record with a server-assigned id.
    #[must_use]
    pub fn into_report(self, id: u64) -> MissingReport {
        MissingReport {
            id,
            name: self.name,
            description: self.description,
            last_seen_location: self.last_seen_location,
            contact: self.contact,
            notes: self.notes,
            created_at: Utc::now(),
        }
    }
}

/// Filter for listing reports.
///
/// Documented subset: `name` and `location`, both case-insensitive
/// substring matches. Anything broader is a guess at upstream intent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFilter {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl ReportFilter {
    #[must_use]
    pub fn matches(&self, report: &MissingReport) -> bool {
        let name_ok = self.name.as_deref().is_none_or(|n| {
            report.name.to_lowercase().contains(&n.to_lowercase())
        });
        let location_ok = self.location.as_deref().is_none_or(|l| {
            report
                .last_seen_location
                .as_deref()
                .is_some_and(|seen| seen.to_lowercase().contains(&l.to_lowercase()))
        });
        name_ok && location_ok
    }
}
