//! Domain service façades: one function per backend operation.
//!
//! ARCHITECTURE
//! ============
//! Each function performs exactly one request/response cycle through
//! [`crate::ApiClient`]. Inputs with client-side rules are validated first so
//! a refused request never reaches the network. Multi-step flows are left to
//! callers (`session`, `actions`, pages).

pub mod auth;
pub mod group;
pub mod member;
pub mod schedule;
pub mod vehicle;

use std::fmt::Write;

use crate::error::ApiError;
use crate::validate::Validate;

/// Refuse `input` before any request is built.
pub(crate) fn precheck<V: Validate + ?Sized>(input: &V) -> Result<(), ApiError> {
    input.validate().map_err(ApiError::Validation)
}

/// Percent-encode a path segment taken from user or server data.
pub(crate) fn segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}
