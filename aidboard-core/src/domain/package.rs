//! Aid package record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::PackageStatus;

/// A physical aid package (or package template) destined for a
/// beneficiary. Read-only within the dashboard; the add/edit dialog is
/// an inert placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-text package category (food basket, winter kit, ...).
    pub kind: String,
    pub status: PackageStatus,
    pub created_at: NaiveDate,
    /// Foreign key into the beneficiary registry. May dangle; lookups
    /// fall back to the unspecified label instead of failing.
    pub beneficiary_id: String,
}
