//! Summary statistics over the package collection.

use crate::domain::{Package, PackageStatus};

/// The four counters shown on the list view's stat cards.
///
/// Recomputed from scratch on every render; one pass over the packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackageStats {
    pub total: usize,
    pub delivered: usize,
    pub in_delivery: usize,
    pub pending: usize,
}

impl PackageStats {
    pub fn compute(packages: &[Package]) -> Self {
        let mut stats = PackageStats {
            total: packages.len(),
            ..Default::default()
        };
        for pkg in packages {
            match pkg.status {
                PackageStatus::Delivered => stats.delivered += 1,
                PackageStatus::InDelivery => stats.in_delivery += 1,
                PackageStatus::Pending => stats.pending += 1,
                _ => {}
            }
        }
        stats
    }
}
