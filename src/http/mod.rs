//! HTTP routing layer.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / propagate x-request-id)
//!     → employee.rs (extract params, call EmployeeService)
//!     → response.rs (ServiceError → status code + JSON body)
//!     → Send to client
//! ```

pub mod employee;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};
