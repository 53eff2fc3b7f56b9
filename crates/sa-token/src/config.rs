//! Token generator configuration.
//!
//! Built once from parsed [`Args`] and handed to the pipeline. Nothing is
//! read from process-wide state after construction.

use crate::claims::TenantData;
use crate::cli::Args;
use std::path::PathBuf;
use thiserror::Error;

/// Default location of the service account key file.
pub const DEFAULT_SERVICE_ACCOUNT_PATH: &str = "/keys/sa.json";

/// Placeholder tenant name used when none is configured.
pub const DEFAULT_TENANT_NAME: &str = "tenant_name_here";

/// Placeholder tenant identifier used when none is configured.
pub const DEFAULT_TENANT_ID: &str = "tenant_id_here";

/// Placeholder point-of-contact email used when none is configured.
pub const DEFAULT_POC_EMAIL: &str = "poc_email_here";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service account JSON key file.
    pub service_account_path: PathBuf,

    /// Payload embedded under the `data` claim.
    pub tenant: TenantData,

    /// Emit JSON logs instead of text.
    pub json_logs: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration value must not be empty: {0}")]
    EmptyValue(&'static str),
}

impl Config {
    /// Configuration for `path` with the placeholder tenant payload.
    #[must_use]
    pub fn with_service_account(path: impl Into<PathBuf>) -> Self {
        Self {
            service_account_path: path.into(),
            tenant: TenantData {
                tenant_name: DEFAULT_TENANT_NAME.to_string(),
                tenant_id: DEFAULT_TENANT_ID.to_string(),
                poc_email: DEFAULT_POC_EMAIL.to_string(),
            },
            json_logs: false,
        }
    }
}

fn require_non_empty(value: String, name: &'static str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue(name));
    }
    Ok(value)
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.service_account.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("service-account"));
        }

        let tenant = TenantData {
            tenant_name: require_non_empty(args.tenant_name, "tenant-name")?,
            tenant_id: require_non_empty(args.tenant_id, "tenant-id")?,
            poc_email: require_non_empty(args.poc_email, "poc-email")?,
        };

        Ok(Config {
            service_account_path: args.service_account,
            tenant,
            json_logs: args.json_logs,
        })
    }
}
