//! Dependency checking and environment validation.
//!
//! This module provides tools to check that the external tools and source
//! checkouts used by the asset commands are available.

pub mod checker;
pub mod formatter;

// Re-export checker types
pub use checker::{DependencyChecker, DependencyStatus, ToolStatus};
pub use formatter::{DoctorFormatter, OutputFormat, Platform};
