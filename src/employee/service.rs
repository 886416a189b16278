//! Public employee operations.
//!
//! # Responsibilities
//! - Translate each operation into upstream calls
//! - Retry rate-limited reads and deletes through [`RetryPolicy`]
//! - Decode envelopes and derive search / max / top-N results
//!
//! # Design Decisions
//! - Create is never retried; an ambiguous outcome could duplicate the employee
//! - Derived queries fetch the full collection exactly once
//! - Delete resolves the name by id first, then deletes by name upstream

use reqwest::Method;

use crate::config::ProxyConfig;
use crate::employee::error::{ServiceError, ServiceResult};
use crate::employee::query;
use crate::employee::types::{CreateEmployeeInput, DeleteEmployeeRequest, Employee};
use crate::resilience::RetryPolicy;
use crate::upstream::{decode, is_dot_segment, TransportError, UpstreamClient};

const EMPLOYEE_PATH: &str = "employee";

/// Entry point used by the routing layer. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    client: UpstreamClient,
    retry: RetryPolicy,
}

impl EmployeeService {
    pub fn new(client: UpstreamClient, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Build the client and retry policy from configuration.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, TransportError> {
        let client = UpstreamClient::new(&config.upstream, &config.timeouts)?;
        Ok(Self::new(client, RetryPolicy::new(config.retries.clone())))
    }

    /// Every employee, in upstream order. No data means an empty list.
    pub async fn list_all(&self) -> ServiceResult<Vec<Employee>> {
        self.retry
            .run("list_employees", ServiceError::is_rate_limited, || {
                self.fetch_all()
            })
            .await
    }

    /// One employee. `.` and `..` cannot name a record and never reach upstream.
    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Employee> {
        if is_dot_segment(id) {
            return Err(not_found(id));
        }
        self.retry
            .run("get_employee", ServiceError::is_rate_limited, || {
                self.fetch_one(id)
            })
            .await
    }

    pub async fn search_by_name(&self, fragment: &str) -> ServiceResult<Vec<Employee>> {
        let all = self.list_all().await?;
        Ok(query::search(&all, fragment))
    }

    pub async fn highest_salary(&self) -> ServiceResult<i64> {
        let all = self.list_all().await?;
        Ok(query::highest_salary(&all))
    }

    pub async fn top_ten_names(&self) -> ServiceResult<Vec<String>> {
        let all = self.list_all().await?;
        Ok(query::top_ten_names(&all))
    }

    /// Validate and submit a new employee. Invalid input never reaches upstream.
    pub async fn create(&self, input: &CreateEmployeeInput) -> ServiceResult<Employee> {
        let request = input.validate()?;

        let raw = self
            .client
            .send(Method::POST, &[EMPLOYEE_PATH], Some(&request))
            .await?;

        let created: Option<Employee> = decode(&raw.body)?;
        let employee = created.ok_or_else(|| {
            ServiceError::unavailable("No response from server for employee creation")
        })?;

        tracing::info!(id = %employee.id, name = %employee.name, "Employee created");
        Ok(employee)
    }

    /// Delete by id and return the upstream confirmation message.
    pub async fn delete_by_id(&self, id: &str) -> ServiceResult<String> {
        let employee = self.get_by_id(id).await?;
        let request = DeleteEmployeeRequest {
            name: employee.name,
        };

        let confirmation = self
            .retry
            .run("delete_employee", ServiceError::is_rate_limited, || {
                self.delete_by_name(&request)
            })
            .await?;

        tracing::info!(id = %id, name = %request.name, "Employee deleted");
        Ok(confirmation)
    }

    async fn fetch_all(&self) -> ServiceResult<Vec<Employee>> {
        let raw = self
            .client
            .send::<()>(Method::GET, &[EMPLOYEE_PATH], None)
            .await?;
        let employees: Option<Vec<Employee>> = decode(&raw.body)?;
        Ok(employees.unwrap_or_default())
    }

    async fn fetch_one(&self, id: &str) -> ServiceResult<Employee> {
        let raw = self
            .client
            .send::<()>(Method::GET, &[EMPLOYEE_PATH, id], None)
            .await?;
        let employee: Option<Employee> = decode(&raw.body)?;
        employee.ok_or_else(|| not_found(id))
    }

    async fn delete_by_name(&self, request: &DeleteEmployeeRequest) -> ServiceResult<String> {
        let raw = self
            .client
            .send(Method::DELETE, &[EMPLOYEE_PATH], Some(request))
            .await?;
        let confirmation: Option<String> = decode(&raw.body)?;
        confirmation.ok_or_else(|| {
            ServiceError::NotFound(format!("Employee {} could not be deleted", request.name))
        })
    }
}

fn not_found(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("Employee not found for id {}", id))
}
