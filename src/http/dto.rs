//! Data Transfer Objects for the HTTP API.
//!
//! The schedule documents themselves already derive
//! Serialize/Deserialize and are returned as-is; see
//! [`crate::models::event`].

use serde::{Deserialize, Serialize};

pub use crate::models::{GroupSchedules, TeacherSchedules};

/// Query parameters for the schedule endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetQuery {
    /// URL of the source sheet; the `/edit` form is accepted and
    /// rewritten to its CSV export
    pub sheet_url: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}
