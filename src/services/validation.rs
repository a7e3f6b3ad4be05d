//! Form checks run before any request leaves the browser.

use chrono::NaiveDate;

use crate::common::ValidationError;
use crate::types::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_NAME_LENGTH: usize = 50;

pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && local.len() <= 64
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        if !validate_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        for (value, field) in [(first_name, "First name"), (last_name, "Last name")] {
            if value.chars().count() > MAX_NAME_LENGTH {
                return Err(ValidationError::TooLong {
                    field,
                    max: MAX_NAME_LENGTH,
                });
            }
        }
        if !validate_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegisterRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

// Helpers for the dashboard editors, whose inputs arrive as strings.

pub fn require_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    required(value, field).map(str::to_string)
}

pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn parse_positive(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    let number: f64 = required(value, field)?
        .parse()
        .map_err(|_| ValidationError::NotANumber(field))?;

    if number.is_finite() && number > 0.0 {
        Ok(number)
    } else {
        Err(ValidationError::NotPositive(field))
    }
}

pub fn parse_count(value: &str, field: &'static str) -> Result<u32, ValidationError> {
    let number: u32 = required(value, field)?
        .parse()
        .map_err(|_| ValidationError::NotANumber(field))?;

    if number == 0 {
        Err(ValidationError::NotPositive(field))
    } else {
        Ok(number)
    }
}

pub fn parse_optional_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub fn parse_optional_date(
    value: &str,
    field: &'static str,
) -> Result<Option<NaiveDate>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(field))
}
