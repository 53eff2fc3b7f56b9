//! Mint RS256 JWTs from a service account key file.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`credentials::load_credentials`] reads the JSON key file and parses the
//!    PKCS#8 private key, key id, and client email.
//! 2. [`claims::Claims`] asserts `aud`, `iss`, `sub`, `iat`, and the tenant
//!    payload under `data`.
//! 3. [`signer::sign_token`] signs with RS256, setting `kid` and `typ`.
//! 4. [`output::write_token`] prints the compact token between delimiter lines.
//!
//! [`generator::TokenGenerator`] ties the steps together around a [`config::Config`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sa_token::config::Config;
//! use sa_token::generator::TokenGenerator;
//!
//! let generator = TokenGenerator::new(Config::with_service_account("/keys/sa.json"));
//! let token = generator.generate()?;
//! ```

pub mod claims;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod generator;
pub mod observability;
pub mod output;
pub mod signer;
