//! Upstream employee-data API subsystem.
//!
//! # Data Flow
//! ```text
//! EmployeeService operation
//!     → client.rs (one HTTP exchange, deadlines, status check)
//!     → envelope.rs (unwrap {status, data}, absent data = no data)
//!     → domain types (aliased wire fields)
//! ```
//!
//! # Design Decisions
//! - Non-2xx answers are errors carrying the status for later classification
//! - Absent `data` is not an error; callers decide what "no data" means

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{is_dot_segment, RawResponse, UpstreamClient};
pub use envelope::{decode, DecodeError, Envelope};
pub use error::TransportError;
