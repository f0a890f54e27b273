//! Delivery status and its total mapping to display label and badge tone.

use serde::{Deserialize, Serialize};

/// Delivery state of a package.
///
/// The wire format enumerates five states; anything else deserializes to
/// `Unknown` rather than failing, so a dataset with a bad status still
/// renders (with the fallback label and a gray badge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    Pending,
    Assigned,
    InDelivery,
    Delivered,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Badge color family for a status. The TUI theme maps tones to
/// terminal colors; keeping the tone here keeps the mapping total and
/// testable without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Blue,
    Yellow,
    Gray,
    Red,
}

impl PackageStatus {
    /// Localized display label.
    pub fn label(self) -> &'static str {
        match self {
            PackageStatus::Delivered => "تم التسليم",
            PackageStatus::InDelivery => "قيد التوصيل",
            PackageStatus::Assigned => "مُعيّن",
            PackageStatus::Pending => "في الانتظار",
            PackageStatus::Failed => "فشل",
            PackageStatus::Unknown => "غير محدد",
        }
    }

    /// Badge color family.
    pub fn tone(self) -> BadgeTone {
        match self {
            PackageStatus::Delivered => BadgeTone::Green,
            PackageStatus::InDelivery => BadgeTone::Blue,
            PackageStatus::Assigned => BadgeTone::Yellow,
            PackageStatus::Pending => BadgeTone::Gray,
            PackageStatus::Failed => BadgeTone::Red,
            PackageStatus::Unknown => BadgeTone::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn from_wire(s: &str) -> PackageStatus {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .expect("status deserialization is total")
    }

    #[test]
    fn five_wire_names_map_to_their_variants() {
        assert_eq!(from_wire("pending"), PackageStatus::Pending);
        assert_eq!(from_wire("assigned"), PackageStatus::Assigned);
        assert_eq!(from_wire("in_delivery"), PackageStatus::InDelivery);
        assert_eq!(from_wire("delivered"), PackageStatus::Delivered);
        assert_eq!(from_wire("failed"), PackageStatus::Failed);
    }

    #[test]
    fn mapping_table_is_exact() {
        let table = [
            (PackageStatus::Delivered, "تم التسليم", BadgeTone::Green),
            (PackageStatus::InDelivery, "قيد التوصيل", BadgeTone::Blue),
            (PackageStatus::Assigned, "مُعيّن", BadgeTone::Yellow),
            (PackageStatus::Pending, "في الانتظار", BadgeTone::Gray),
            (PackageStatus::Failed, "فشل", BadgeTone::Red),
            (PackageStatus::Unknown, "غير محدد", BadgeTone::Gray),
        ];
        for (status, label, tone) in table {
            assert_eq!(status.label(), label);
            assert_eq!(status.tone(), tone);
        }
    }

    #[test]
    fn unrecognized_wire_value_falls_back_to_unknown() {
        let status = from_wire("lost_in_transit");
        assert_eq!(status, PackageStatus::Unknown);
        assert_eq!(status.label(), "غير محدد");
        assert_eq!(status.tone(), BadgeTone::Gray);
    }

    proptest! {
        /// Any string that is not one of the five wire names lands on the
        /// gray/unspecified fallback, never an error.
        #[test]
        fn arbitrary_strings_never_fail(s in ".*") {
            let known = [
                "pending",
                "assigned",
                "in_delivery",
                "delivered",
                "failed",
            ];
            let status = from_wire(&s);
            if !known.contains(&s.as_str()) {
                prop_assert_eq!(status, PackageStatus::Unknown);
                prop_assert_eq!(status.tone(), BadgeTone::Gray);
                prop_assert_eq!(status.label(), "غير محدد");
            }
        }
    }
}
