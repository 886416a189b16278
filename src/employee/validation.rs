//! Structural validation of create payloads.

use std::fmt;

use serde::Serialize;

use crate::employee::types::{CreateEmployeeInput, CreateEmployeeRequest};

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 75;

/// A constraint violated by one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field errors of one rejected payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .cloned()
}

impl CreateEmployeeInput {
    /// Check every field and return all violations at once.
    pub fn validate(&self) -> Result<CreateEmployeeRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = non_blank(self.name.as_ref());
        if name.is_none() {
            errors.push("name", "Name cannot be blank");
        }

        match self.salary {
            None => errors.push("salary", "Salary cannot be null"),
            Some(s) if s <= 0 => errors.push("salary", "Salary must be greater than 0"),
            Some(_) => {}
        }

        match self.age {
            None => errors.push("age", "Age cannot be null"),
            Some(a) if a < MIN_AGE => errors.push("age", "Age must be at least 16"),
            Some(a) if a > MAX_AGE => errors.push("age", "Age must be at most 75"),
            Some(_) => {}
        }

        let title = non_blank(self.title.as_ref());
        if title.is_none() {
            errors.push("title", "Title cannot be blank");
        }

        match (name, self.salary, self.age, title) {
            (Some(name), Some(salary), Some(age), Some(title)) if errors.is_empty() => {
                Ok(CreateEmployeeRequest {
                    name,
                    salary,
                    age,
                    title,
                })
            }
            _ => Err(errors),
        }
    }
}
