//! Aidboard TUI — terminal dashboard for package management.
//!
//! Five tabbed views:
//! 1. List — searchable package table with stat cards and status badges
//! 2. Bulk send — placeholder
//! 3. Individual send — placeholder
//! 4. Tracking — placeholder
//! 5. Distribution reports — placeholder
//!
//! Plus a reusable add/edit/view modal dialog (placeholder form).

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Modal, ModalMode, Tab};
