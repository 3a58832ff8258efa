//! Form field checks shared by checkout and contact submissions.

use pearion_core::{DomainError, DomainResult};

/// Trimmed value, or a validation error naming `field`.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(value)
}

/// Required value whose length (in chars, after trimming) is within `min..=max`.
pub(crate) fn bounded<'a>(field: &str, value: &'a str, min: usize, max: usize) -> DomainResult<&'a str> {
    let value = required(field, value)?;
    let len = value.chars().count();
    if len < min || len > max {
        return Err(DomainError::validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(value)
}

/// Required value shaped like `local@domain.tld`.
pub(crate) fn email(value: &str) -> DomainResult<&str> {
    let value = required("email", value)?;
    let well_formed = !value.contains(char::is_whitespace)
        && value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        });
    if !well_formed {
        return Err(DomainError::validation("email is not a valid address"));
    }
    Ok(value)
}
