//! Backend test support utilities
//!
//! Helpers shared by the backend's unit and integration tests: unified
//! logging initialization and ProblemDetails response assertions. This
//! crate deliberately does not depend on the backend crate, so the error
//! contract is asserted against the wire shape rather than the Rust types.

pub mod logging;
pub mod problem_details;
