//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wires the shared `api` crate to `gloo-net` and exposes the client
//! handle pages pull from context.

pub mod api;
