//! # Input Validation
//!
//! Checks applied to user-supplied inventory fields before they reach the store.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ValidationError;
use crate::inventory::server::OsType;

pub const USERNAME_MAX_LENGTH: usize = 256;
pub const PASSWORD_MAX_LENGTH: usize = 512;
pub const PROJECT_NAME_MAX_LENGTH: usize = 100;

/// Accepts IPv4, IPv6 and `localhost`. Returns the trimmed address.
pub fn validate_ip(ip: &str) -> Result<String, ValidationError> {
    let ip = ip.trim();
    if ip.is_empty() {
        return Err(ValidationError::IpRequired);
    }
    let valid = ip.parse::<Ipv4Addr>().is_ok()
        || ip.parse::<Ipv6Addr>().is_ok()
        || ip.eq_ignore_ascii_case("localhost");
    if !valid {
        return Err(ValidationError::InvalidIp(ip.to_string()));
    }
    Ok(ip.to_string())
}

/// Usernames are optional. Allowed: ASCII alphanumerics and `_ - . @`.
pub fn validate_username(username: Option<&str>) -> Result<(), ValidationError> {
    let Some(username) = username.map(str::trim) else {
        return Ok(());
    };
    if username.is_empty() || username == "pending" {
        return Ok(());
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '@');
    if !username.chars().all(allowed) {
        return Err(ValidationError::UsernameInvalid);
    }
    Ok(())
}

pub fn validate_password(password: Option<&str>) -> Result<(), ValidationError> {
    match password {
        Some(password) if password.chars().count() > PASSWORD_MAX_LENGTH => {
            Err(ValidationError::PasswordTooLong(PASSWORD_MAX_LENGTH))
        }
        _ => Ok(()),
    }
}

/// Project names: 1 to 100 of ASCII alphanumerics, whitespace, `_` and `-`. Returns the trimmed name.
pub fn validate_project_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::ProjectNameRequired);
    }
    if name.chars().count() > PROJECT_NAME_MAX_LENGTH {
        return Err(ValidationError::ProjectNameTooLong);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-');
    if !name.chars().all(allowed) {
        return Err(ValidationError::ProjectNameInvalid);
    }
    Ok(name.to_string())
}

/// OS type is optional. `None` means "detect later".
pub fn validate_os_type(os_type: Option<&str>) -> Result<Option<OsType>, ValidationError> {
    match os_type.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<OsType>().map(Some),
    }
}

/// Drops control characters (except newline and tab), trims, and truncates to `max_length` chars.
///
/// Returns `None` when nothing is left.
pub fn sanitize_string(value: &str, max_length: Option<usize>) -> Option<String> {
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect();
    let trimmed = cleaned.trim();
    let result: String = match max_length {
        Some(max) => trimmed.chars().take(max).collect(),
        None => trimmed.to_string(),
    };
    (!result.is_empty()).then_some(result)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
