//! Input validation helpers
//!
//! Centralized constraint constants and the validation functions the write
//! operations call before persistence. Constraints are enforced here
//! explicitly rather than through a schema hook, so create and update paths
//! share one source of truth.

use chrono::NaiveDate;

use crate::db::models::Employee;
use crate::utils::AppError;

// ── Constraint constants ────────────────────────────────────────────

/// Names, designations, departments
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Photo URLs / paths
pub const MAX_URL_LEN: usize = 2048;

/// Lower bound on employee salary
pub const MIN_SALARY: f64 = 1000.0;

// ── Generic field helpers ───────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Loose email shape check: something before '@', a dot somewhere after it.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(AppError::validation("Please enter a valid email address"));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date supplied at the API boundary.
pub fn parse_joining_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid date_of_joining '{raw}', expected YYYY-MM-DD"
        ))
    })
}

// ── Record-level validation ─────────────────────────────────────────

/// Validate a full employee record. Called with the complete record on
/// create, and with the merged record on update, so partial updates are
/// re-checked as a whole.
pub fn validate_employee(employee: &Employee) -> Result<(), AppError> {
    validate_required_text(&employee.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&employee.last_name, "last_name", MAX_NAME_LEN)?;
    validate_email(&employee.email)?;
    validate_required_text(&employee.designation, "designation", MAX_NAME_LEN)?;
    validate_required_text(&employee.department, "department", MAX_NAME_LEN)?;

    if employee.salary < MIN_SALARY {
        return Err(AppError::validation("Salary must be at least 1000"));
    }

    if employee.employee_photo.len() > MAX_URL_LEN {
        return Err(AppError::validation(format!(
            "employee_photo is too long ({} chars, max {MAX_URL_LEN})",
            employee.employee_photo.len()
        )));
    }

    Ok(())
}
