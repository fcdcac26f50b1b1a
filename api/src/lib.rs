//! # api
//!
//! Runtime-agnostic client core for the EV co-ownership platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote backend owns every business rule. This crate only speaks its
//! REST contract: the uniform `{ success, message, data }` envelope, typed
//! request/response DTOs, one service function per backend operation, and
//! the client-side session/authorization boundary.
//!
//! Browser (`client`) and native (`cli`) front ends plug in their own HTTP
//! stack through [`transport::Transport`]; everything else is shared.

pub mod actions;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod routes;
pub mod services;
pub mod session;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
