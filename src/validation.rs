use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::{ValidationError, ValidationResult};

/// A trait that request payloads implement for validation before submission.
pub trait Validate {
    /// Validates the payload and returns the first violated rule, if any.
    fn validate(&self) -> ValidationResult<()>;
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    })
}

fn month_regex() -> &'static Regex {
    static MONTH_REGEX: OnceLock<Regex> = OnceLock::new();
    MONTH_REGEX.get_or_init(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap())
}

/// Fluent validation for a single string field.
pub struct ValidationBuilder<'a> {
    field_name: &'a str,
    value: Option<&'a str>,
    error: Option<ValidationError>,
}

impl<'a> ValidationBuilder<'a> {
    pub fn new(field_name: &'a str, value: Option<&'a str>) -> Self {
        Self { field_name, value, error: None }
    }

    pub fn required(mut self) -> Self {
        if self.error.is_none() && self.value.map_or(true, |v| v.trim().is_empty()) {
            self.error = Some(ValidationError::required(self.field_name));
        }
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        if self.error.is_none() {
            if let Some(v) = self.value {
                if v.chars().count() < min {
                    self.error = Some(ValidationError::min_length(self.field_name, min));
                }
            }
        }
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        if self.error.is_none() {
            if let Some(v) = self.value {
                if v.chars().count() > max {
                    self.error = Some(ValidationError::max_length(self.field_name, max));
                }
            }
        }
        self
    }

    pub fn email(mut self) -> Self {
        if self.error.is_none() {
            if let Some(v) = self.value {
                if !email_regex().is_match(v) {
                    self.error = Some(ValidationError::format(self.field_name, "invalid email address"));
                }
            }
        }
        self
    }

    /// Calendar month in `YYYY-MM` form.
    pub fn month(mut self) -> Self {
        if self.error.is_none() {
            if let Some(v) = self.value {
                if !month_regex().is_match(v) {
                    self.error = Some(ValidationError::format(self.field_name, "expected YYYY-MM"));
                }
            }
        }
        self
    }

    pub fn validate(self) -> ValidationResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Amounts entered by the user must be strictly positive.
pub fn validate_positive_amount(field: &str, amount: Decimal) -> ValidationResult<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::invalid_value(field, "must be greater than zero"));
    }
    Ok(())
}

/// Server-computed amounts may be zero but never negative.
pub fn validate_non_negative_amount(field: &str, amount: Decimal) -> ValidationResult<()> {
    if amount < Decimal::ZERO {
        return Err(ValidationError::invalid_value(field, "cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required() {
        assert!(ValidationBuilder::new("notes", Some("dinner")).required().validate().is_ok());
        assert!(ValidationBuilder::new("notes", Some("  ")).required().validate().is_err());
        assert!(ValidationBuilder::new("notes", None).required().validate().is_err());
    }

    #[test]
    fn test_email() {
        assert!(ValidationBuilder::new("email", Some("a@b.co")).email().validate().is_ok());
        assert!(ValidationBuilder::new("email", Some("not-an-email")).email().validate().is_err());
    }

    #[test]
    fn test_month() {
        assert!(ValidationBuilder::new("month", Some("2025-07")).month().validate().is_ok());
        assert!(ValidationBuilder::new("month", Some("2025-13")).month().validate().is_err());
        assert!(ValidationBuilder::new("month", Some("202507")).month().validate().is_err());
    }

    #[test]
    fn test_length_bounds() {
        assert!(ValidationBuilder::new("password", Some("secret1"))
            .required()
            .min_length(6)
            .validate()
            .is_ok());
        assert!(ValidationBuilder::new("password", Some("abc"))
            .required()
            .min_length(6)
            .validate()
            .is_err());
        assert!(ValidationBuilder::new("notes", Some("x".repeat(600).as_str()))
            .max_length(500)
            .validate()
            .is_err());
    }

    #[test]
    fn test_amount_rules() {
        assert!(validate_positive_amount("amount", dec!(10.50)).is_ok());
        assert!(validate_positive_amount("amount", dec!(0)).is_err());
        assert!(validate_positive_amount("amount", dec!(-1)).is_err());
        assert!(validate_non_negative_amount("currentSpent", dec!(0)).is_ok());
        assert!(validate_non_negative_amount("currentSpent", dec!(-0.01)).is_err());
    }
}
