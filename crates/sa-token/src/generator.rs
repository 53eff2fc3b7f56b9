//! The token pipeline: load credentials, build claims, sign, print.

use crate::claims::Claims;
use crate::config::Config;
use crate::credentials::load_credentials;
use crate::errors::TokenError;
use crate::output::write_token;
use crate::signer::sign_token;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Mints one token per call from the configured service account.
///
/// Holds no state besides its configuration, so repeated calls re-read the
/// key file and sign afresh.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    config: Config,
}

impl TokenGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate a token issued at the current wall-clock second.
    ///
    /// # Errors
    ///
    /// Any `TokenError` from loading or signing.
    pub fn generate(&self) -> Result<String, TokenError> {
        self.generate_at(chrono::Utc::now().timestamp())
    }

    /// Generate a token with an explicit `iat` (Unix seconds).
    ///
    /// # Errors
    ///
    /// Any `TokenError` from loading or signing.
    #[instrument(skip_all, fields(path = %self.config.service_account_path.display()))]
    pub fn generate_at(&self, issued_at: i64) -> Result<String, TokenError> {
        let sa = load_credentials(&self.config.service_account_path)?;
        debug!(target: "sa_token.generator", key_id = %sa.key_id, "Key loaded");

        let claims = Claims::new(&sa.client_email, self.config.tenant.clone(), issued_at);
        debug!(target: "sa_token.generator", ?claims, "Claims built");

        let token = sign_token(&claims, &sa.private_key, &sa.key_id)?;
        info!(
            target: "sa_token.generator",
            key_id = %sa.key_id,
            iat = issued_at,
            "Token signed"
        );

        Ok(token)
    }

    /// Generate a token and write it to `out`.
    ///
    /// Nothing is written unless the token was produced.
    ///
    /// # Errors
    ///
    /// Any `TokenError` from generation, or `Output` if writing fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), TokenError> {
        let token = self.generate()?;
        write_token(out, &token)?;
        debug!(target: "sa_token.generator", "Token printed");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use sa_test_utils::{test_signing_key, CredentialFileBuilder, TestKey};

    #[test]
    fn test_run_writes_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TokenGenerator::new(Config::with_service_account(dir.path().join("missing.json")));

        let mut out = Vec::new();
        let result = generator.run(&mut out);

        assert!(matches!(result, Err(TokenError::FileRead { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_writes_nothing_for_undersized_key() {
        let file = CredentialFileBuilder::new()
            .with_private_key(test_signing_key(TestKey::Rsa1024).private_pem)
            .write_temp()
            .unwrap();
        let generator = TokenGenerator::new(Config::with_service_account(file.path()));

        let mut out = Vec::new();
        let result = generator.run(&mut out);

        assert!(matches!(result, Err(TokenError::Signing(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_writes_framed_token() {
        let file = CredentialFileBuilder::new().write_temp().unwrap();
        let generator = TokenGenerator::new(Config::with_service_account(file.path()));

        let mut out = Vec::new();
        generator.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Token generated:\n\n=== BEGIN TOKEN ===\n"));
        assert!(text.ends_with("\n=== END TOKEN ===\n"));
    }
}
