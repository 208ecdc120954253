//! Service layer for disaster-relief
//!
//! Async facade between the HTTP/CLI front ends and the blocking storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod disaster_service;
mod error;

pub use disaster_service::DisasterService;
pub use error::ServiceError;
