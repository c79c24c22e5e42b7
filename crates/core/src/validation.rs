//! Client-side field validation.
//!
//! Validation failures stay local to the owning form (surfaced inline per
//! field) and are never sent to the network.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PortalError, PortalResult};

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").unwrap())
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}([-a-zA-Z0-9()@:%_+.~#?&/=]*)$")
            .unwrap()
    })
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap())
}

pub fn validate_required(field: &str, value: &str) -> PortalResult<()> {
    if value.trim().is_empty() {
        return Err(PortalError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_email(field: &str, value: &str) -> PortalResult<()> {
    validate_required(field, value)?;
    if !email_re().is_match(value) {
        return Err(PortalError::validation(field, "Invalid email address"));
    }
    Ok(())
}

/// Phone numbers are exactly 10 digits.
pub fn validate_phone(field: &str, value: &str) -> PortalResult<()> {
    validate_required(field, value)?;
    if !phone_re().is_match(value) {
        return Err(PortalError::validation(field, "Phone number must be 10 digits"));
    }
    Ok(())
}

pub fn validate_password(field: &str, value: &str, required: bool) -> PortalResult<()> {
    if value.trim().is_empty() {
        if required {
            return Err(PortalError::validation(field, "Password is required"));
        }
        return Ok(());
    }
    if value.len() < 6 {
        return Err(PortalError::validation(
            field,
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

pub fn validate_url(field: &str, value: &str, required: bool) -> PortalResult<()> {
    if value.trim().is_empty() {
        if required {
            return Err(PortalError::validation(field, "URL is required"));
        }
        return Ok(());
    }
    if !url_re().is_match(value) {
        return Err(PortalError::validation(field, "Invalid URL format"));
    }
    Ok(())
}

pub fn validate_hex_color(field: &str, value: &str) -> PortalResult<()> {
    validate_required(field, value)?;
    if !hex_color_re().is_match(value) {
        return Err(PortalError::validation(
            field,
            "Invalid color format (use #RRGGBB)",
        ));
    }
    Ok(())
}

pub fn validate_length(
    field: &str,
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> PortalResult<()> {
    validate_required(field, value)?;
    if let Some(min) = min {
        if value.chars().count() < min {
            return Err(PortalError::validation(
                field,
                format!("{field} must be at least {min} characters"),
            ));
        }
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(PortalError::validation(
                field,
                format!("{field} must be at most {max} characters"),
            ));
        }
    }
    Ok(())
}

pub fn validate_number(field: &str, value: &str, min: Option<f64>, max: Option<f64>) -> PortalResult<()> {
    validate_required(field, value)?;
    let num: f64 = value
        .parse()
        .map_err(|_| PortalError::validation(field, "Must be a valid number"))?;
    if let Some(min) = min {
        if num < min {
            return Err(PortalError::validation(field, format!("Must be at least {min}")));
        }
    }
    if let Some(max) = max {
        if num > max {
            return Err(PortalError::validation(field, format!("Must be at most {max}")));
        }
    }
    Ok(())
}
