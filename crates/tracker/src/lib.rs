//! Fetch-and-extract client for the ca.gov LA fires pages.
//!
//! Two pages are consumed: the track-progress page (free-form recovery
//! content) and the landing page (dated deadlines). Page structure
//! drifts; extraction degrades to best-effort plain text rather than
//! failing when the expected markers disappear.

mod client;
mod deadlines;
mod error;
mod extract;

pub use client::{CaGovTracker, ProgressTracker};
pub use deadlines::{parse_deadlines, Deadline};
pub use error::TrackerError;
pub use extract::extract_content;
