//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod user;

// Directory
pub mod employee;

// Re-exports
pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeePatch, Gender};
pub use user::{User, UserCreate, UserId};
