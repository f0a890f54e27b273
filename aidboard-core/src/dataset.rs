//! The read-only dataset behind the dashboard.
//!
//! The dashboard never writes to these collections; the add/edit dialog
//! is a placeholder. Data comes either from the built-in sample set or
//! from a JSON file given on the command line.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Beneficiary, Package, PackageStatus, Task};
use crate::UNSPECIFIED;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The three collections the dashboard reads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub beneficiaries: Vec<Beneficiary>,
    pub packages: Vec<Package>,
    pub tasks: Vec<Task>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Look up a beneficiary by id. Linear scan; the registry is small.
    pub fn beneficiary(&self, id: &str) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.id == id)
    }

    /// Beneficiary display name, or the unspecified fallback when the
    /// foreign key dangles.
    pub fn beneficiary_name(&self, id: &str) -> &str {
        self.beneficiary(id).map_or(UNSPECIFIED, |b| &b.name)
    }

    /// Built-in sample dataset: every status represented, one dangling
    /// beneficiary reference, so the fallback paths are visible out of
    /// the box.
    pub fn sample() -> Self {
        let beneficiaries = vec![
            beneficiary("ben-001", "أحمد الخالدي"),
            beneficiary("ben-002", "فاطمة السيد"),
            beneficiary("ben-003", "محمد العمري"),
            beneficiary("ben-004", "نورة الحسن"),
        ];

        let packages = vec![
            package(
                "pkg-001",
                "سلة غذائية رمضانية",
                "مواد غذائية أساسية لأسرة من خمسة أفراد",
                "غذائي",
                PackageStatus::Delivered,
                date(2024, 3, 2),
                "ben-001",
            ),
            package(
                "pkg-002",
                "حقيبة شتوية",
                "بطانيات وملابس شتوية",
                "كسوة",
                PackageStatus::InDelivery,
                date(2024, 3, 10),
                "ben-002",
            ),
            package(
                "pkg-003",
                "طرد أدوية مزمنة",
                "أدوية ضغط وسكري لثلاثة أشهر",
                "صحي",
                PackageStatus::Assigned,
                date(2024, 3, 12),
                "ben-003",
            ),
            package(
                "pkg-004",
                "سلة مواد تنظيف",
                "مستلزمات نظافة منزلية",
                "نظافة",
                PackageStatus::Pending,
                date(2024, 3, 15),
                "ben-004",
            ),
            package(
                "pkg-005",
                "كسوة العيد",
                "ملابس عيد للأطفال",
                "كسوة",
                PackageStatus::Failed,
                date(2024, 3, 18),
                "ben-001",
            ),
            // Beneficiary record was removed from the registry; the table
            // renders the fallback name for this row.
            package(
                "pkg-006",
                "طرد إيواء طارئ",
                "خيمة وفرش أرضي",
                "إيواء",
                PackageStatus::Delivered,
                date(2024, 3, 20),
                "ben-999",
            ),
        ];

        let tasks = vec![
            Task {
                id: "task-001".into(),
                title: "مراجعة قوائم المستفيدين للربع الأول".into(),
                done: true,
            },
            Task {
                id: "task-002".into(),
                title: "جرد مستودع الطرود الغذائية".into(),
                done: false,
            },
        ];

        Dataset {
            beneficiaries,
            packages,
            tasks,
        }
    }
}

fn beneficiary(id: &str, name: &str) -> Beneficiary {
    Beneficiary {
        id: id.into(),
        name: name.into(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn package(
    id: &str,
    name: &str,
    description: &str,
    kind: &str,
    status: PackageStatus,
    created_at: NaiveDate,
    beneficiary_id: &str,
) -> Package {
    Package {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        kind: kind.into(),
        status,
        created_at,
        beneficiary_id: beneficiary_id.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PackageStats;

    #[test]
    fn sample_covers_every_status() {
        let data = Dataset::sample();
        for status in [
            PackageStatus::Pending,
            PackageStatus::Assigned,
            PackageStatus::InDelivery,
            PackageStatus::Delivered,
            PackageStatus::Failed,
        ] {
            assert!(
                data.packages.iter().any(|p| p.status == status),
                "sample dataset missing status {status:?}"
            );
        }
    }

    #[test]
    fn beneficiary_lookup_hits_and_misses() {
        let data = Dataset::sample();
        assert_eq!(data.beneficiary_name("ben-001"), "أحمد الخالدي");
        assert!(data.beneficiary("ben-999").is_none());
        assert_eq!(data.beneficiary_name("ben-999"), UNSPECIFIED);
    }

    #[test]
    fn sample_stats_are_consistent() {
        let data = Dataset::sample();
        let stats = PackageStats::compute(&data.packages);
        assert_eq!(stats.total, data.packages.len());
        assert!(stats.delivered + stats.in_delivery + stats.pending <= stats.total);
    }

    #[test]
    fn sample_round_trips_through_json() {
        let data = Dataset::sample();
        let json = serde_json::to_string(&data).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.packages.len(), data.packages.len());
        assert_eq!(back.beneficiaries.len(), data.beneficiaries.len());
        assert_eq!(back.tasks.len(), data.tasks.len());
        assert_eq!(back.packages[0].status, data.packages[0].status);
    }
}
