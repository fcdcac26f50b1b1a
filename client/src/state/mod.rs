//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the session for the page lifetime; `revisions` tells page
//! resources when a mutation made their data stale.

pub mod auth;
pub mod revisions;
