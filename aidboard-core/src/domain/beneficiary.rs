//! Beneficiary registry entry — read-only, looked up by id.

use serde::{Deserialize, Serialize};

/// A recipient entity referenced by packages via foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: String,
    pub name: String,
}
