//! Builder patterns for test credential files
//!
//! Provides a fluent API for service account key files in the shape cloud
//! providers issue them.

use crate::crypto_fixtures::PRIMARY_PKCS8_PEM;
use crate::test_ids::{TEST_CLIENT_EMAIL, TEST_CLIENT_ID, TEST_KEY_ID, TEST_PROJECT_ID};
use serde_json::json;
use std::io::{self, Write};
use tempfile::NamedTempFile;

/// Builder for service account key files
///
/// # Example
/// ```rust,ignore
/// let file = CredentialFileBuilder::new()
///     .with_key_id("key-2")
///     .with_private_key(SECONDARY_PKCS8_PEM)
///     .write_temp()?;
/// ```
pub struct CredentialFileBuilder {
    kind: Option<String>,
    private_key_id: String,
    private_key: String,
    client_email: String,
}

impl CredentialFileBuilder {
    /// Create a builder for a valid file signed by the primary key
    pub fn new() -> Self {
        Self {
            kind: Some("service_account".to_string()),
            private_key_id: TEST_KEY_ID.to_string(),
            private_key: PRIMARY_PKCS8_PEM.to_string(),
            client_email: TEST_CLIENT_EMAIL.to_string(),
        }
    }

    /// Set the `type` field
    pub fn with_type(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    /// Omit the `type` field
    pub fn without_type(mut self) -> Self {
        self.kind = None;
        self
    }

    /// Set the key id
    pub fn with_key_id(mut self, key_id: &str) -> Self {
        self.private_key_id = key_id.to_string();
        self
    }

    /// Set the PEM private key
    pub fn with_private_key(mut self, pem: &str) -> Self {
        self.private_key = pem.to_string();
        self
    }

    /// Set the service account email
    pub fn with_client_email(mut self, email: &str) -> Self {
        self.client_email = email.to_string();
        self
    }

    /// Build the file contents as a JSON value
    pub fn build(&self) -> serde_json::Value {
        let mut file = json!({
            "project_id": TEST_PROJECT_ID,
            "private_key_id": self.private_key_id,
            "private_key": self.private_key,
            "client_email": self.client_email,
            "client_id": TEST_CLIENT_ID,
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
        });
        if let (Some(kind), Some(map)) = (&self.kind, file.as_object_mut()) {
            map.insert("type".to_string(), json!(kind));
        }
        file
    }

    /// Build the file contents as a JSON string
    pub fn build_json(&self) -> String {
        self.build().to_string()
    }

    /// Write the file to a temporary path that is removed on drop
    pub fn write_temp(&self) -> io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(self.build_json().as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

impl Default for CredentialFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
