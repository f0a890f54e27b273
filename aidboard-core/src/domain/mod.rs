//! Domain types for the aid-distribution dashboard.

pub mod beneficiary;
pub mod package;
pub mod status;
pub mod task;

pub use beneficiary::Beneficiary;
pub use package::Package;
pub use status::{BadgeTone, PackageStatus};
pub use task::Task;
