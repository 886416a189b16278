//! Employee domain types and their wire shapes.

use serde::{Deserialize, Serialize};

/// An employee record as owned by the upstream API.
///
/// Accepts both domain field names and the upstream `employee_<field>` names.
/// A record carrying both spellings of one field is rejected as ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(alias = "employee_name")]
    pub name: String,
    #[serde(alias = "employee_salary")]
    pub salary: i64,
    #[serde(alias = "employee_age")]
    pub age: i32,
    #[serde(alias = "employee_title")]
    pub title: String,
    #[serde(
        alias = "employee_email",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

/// Unvalidated create payload as received from callers.
///
/// Every field is optional so that missing fields surface as field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl From<&Employee> for CreateEmployeeInput {
    fn from(employee: &Employee) -> Self {
        Self {
            name: Some(employee.name.clone()),
            salary: Some(employee.salary),
            age: Some(employee.age),
            title: Some(employee.title.clone()),
        }
    }
}

/// A create payload that passed validation; the body sent upstream.
///
/// Only obtainable through [`CreateEmployeeInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEmployeeRequest {
    pub(crate) name: String,
    pub(crate) salary: i64,
    pub(crate) age: i32,
    pub(crate) title: String,
}

impl CreateEmployeeRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Body of the upstream delete call; upstream deletes by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}
