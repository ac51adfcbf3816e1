//! HTTP middleware for axum.
//!
//! This module contains extractors for cross-cutting concerns:
//!
//! - `audience` - caller audience from the `x-role` header

pub mod audience;

pub use audience::{AccessPolicy, CallerAudience, ROLE_HEADER};
