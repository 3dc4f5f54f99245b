//! Client-side form validation
//!
//! Form payloads carry `validator` rules; failures are converted to
//! per-field messages before any network call is made. The UI clears
//! a field's message as the user edits that field.

use std::collections::BTreeMap;
use std::fmt;

use validator::{Validate, ValidationErrors};

use crate::error::{ClientError, ClientResult};

/// Field-level validation messages, one per offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Message for a single field, if it failed validation.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Clears the message for one field (called as the user edits it).
    pub fn clear_field(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            // Rules run in declaration order; surface the first failure.
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                map.insert(field.to_string(), message);
            }
        }
        Self(map)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Runs a payload's validation rules, mapping failures to
/// [`ClientError::Validation`].
pub fn check<T: Validate>(input: &T) -> ClientResult<()> {
    input
        .validate()
        .map_err(|e| ClientError::Validation(FieldErrors::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EmployeeInput;

    fn draft() -> EmployeeInput {
        EmployeeInput {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            department_id: Some(1),
            role_id: Some(2),
            joining_date: Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            status: None,
        }
    }

    #[test]
    fn complete_input_passes() {
        assert!(check(&draft()).is_ok());
    }

    #[test]
    fn empty_name_yields_field_message() {
        let mut input = draft();
        input.name = String::new();
        let err = check(&input).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.field("name"), Some("Name is required"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn malformed_email_is_reported_as_invalid() {
        let mut input = draft();
        input.email = "not-an-email".into();
        let err = check(&input).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().field("email"),
            Some("Email is invalid")
        );
    }

    #[test]
    fn empty_email_is_reported_as_required() {
        let mut input = draft();
        input.email = String::new();
        let err = check(&input).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().field("email"),
            Some("Email is required")
        );
    }

    #[test]
    fn clearing_a_field_removes_only_that_message() {
        let mut input = draft();
        input.name = String::new();
        input.department_id = None;
        let err = check(&input).unwrap_err();
        let mut fields = err.field_errors().unwrap().clone();
        assert_eq!(fields.len(), 2);
        fields.clear_field("name");
        assert_eq!(fields.field("name"), None);
        assert_eq!(
            fields.field("department_id"),
            Some("Department is required")
        );
    }
}
