//! Common utilities shared across the sa-token crates.

#![warn(clippy::pedantic)]

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for JWT compact-serialization helpers
pub mod jwt;
