//! Error handling for the Overruled backend.

pub mod error_code;

pub use error_code::ErrorCode;
