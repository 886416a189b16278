//! Employee domain subsystem.
//!
//! # Data Flow
//! ```text
//! routing layer
//!     → service.rs (public operations, retry wrapping)
//!         → validation.rs (create payloads, before any upstream call)
//!         → upstream client + envelope decode
//!         → query.rs (search / highest salary / top ten over one snapshot)
//!     → ServiceResult<T> back to the routing layer
//! ```

pub mod error;
pub mod query;
pub mod service;
pub mod types;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use service::EmployeeService;
pub use types::{CreateEmployeeInput, CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
pub use validation::{FieldError, ValidationErrors};
