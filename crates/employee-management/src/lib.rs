//! Employee records for an organization: onboarding internal employees with a starting salary
//! and mandatory training, granting raises under a per-level policy, and telling internal
//! staff apart from external contractors.

pub mod config;
pub mod employees;
pub mod error;
pub mod telemetry;
