//! Employee proxy library: resilient access to a rate-limited employee-data API.

pub mod config;
pub mod employee;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use employee::{EmployeeService, ServiceError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
