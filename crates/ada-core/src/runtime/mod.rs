//! Runtime detection for the tools a generated project relies on
//!
//! This module provides:
//! - Bun detection (the generated scripts run through Bun)
//! - Git detection (repository initialization is skipped without it)

pub mod check;

pub use check::{check_bun, check_git, RuntimeInfo};
