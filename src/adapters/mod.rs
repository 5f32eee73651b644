//! External integrations
//!
//! This module contains the adapters for the two delivery sinks:
//!
//! - `pdf` - Report rendering backend
//! - `email` - SMTP delivery
//!
//! Adapters never leak third-party error types; everything surfaces as
//! [`ShowroomError::Render`](crate::domain::ShowroomError::Render) or
//! [`ShowroomError::Delivery`](crate::domain::ShowroomError::Delivery).

pub mod email;
pub mod pdf;

pub use email::Notifier;
pub use pdf::ReportRenderer;
