//! # sa-token Test Utilities
//!
//! Shared test utilities for the sa-token crates.
//!
//! This crate provides:
//! - Fixed RSA and EC key fixtures (PEM files checked into `fixtures/`)
//! - Credential file builders (`CredentialFileBuilder`)
//! - Fixed test identifiers (key id, client email)
//! - Custom assertions (`TokenAssertions` trait) and RS256 verification
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sa_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let file = CredentialFileBuilder::new().write_temp()?;
//!
//!     // ... mint a token from file.path() ...
//!
//!     token
//!         .assert_valid_jwt()
//!         .assert_signed_by(TEST_KEY_ID);
//!     verify_rs256(&token, test_signing_key(TestKey::Primary).public_pem)?;
//! }
//! ```

pub mod assertions;
pub mod credential_builders;
pub mod crypto_fixtures;
pub mod test_ids;

// Re-export commonly used items
pub use assertions::*;
pub use credential_builders::*;
pub use crypto_fixtures::*;
pub use test_ids::*;
