//! Operational task entry.
//!
//! Part of the data provider's three-collection contract. No dashboard
//! view renders tasks yet; they ride along with the dataset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub done: bool,
}
