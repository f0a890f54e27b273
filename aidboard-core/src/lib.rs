//! Aidboard Core — domain types and the read-only dataset behind the
//! package-management dashboard.
//!
//! This crate contains everything the terminal UI renders from:
//! - Domain types (packages, beneficiaries, tasks, delivery status)
//! - The total status → (label, badge tone) mapping
//! - Summary statistics over the package collection
//! - The dataset provider (built-in sample or JSON file)
//! - Arabic date formatting helpers

pub mod dataset;
pub mod dates;
pub mod domain;
pub mod stats;

pub use dataset::{Dataset, DatasetError};
pub use dates::format_date_arabic;
pub use domain::{BadgeTone, Beneficiary, Package, PackageStatus, Task};
pub use stats::PackageStats;

/// Fallback label for anything the dataset cannot resolve: unknown
/// statuses and dangling beneficiary references both render as this.
pub const UNSPECIFIED: &str = "غير محدد";
