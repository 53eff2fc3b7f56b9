//! Command-line arguments.

use crate::config::{
    DEFAULT_POC_EMAIL, DEFAULT_SERVICE_ACCOUNT_PATH, DEFAULT_TENANT_ID, DEFAULT_TENANT_NAME,
};
use clap::Parser;
use std::path::PathBuf;

/// Generate a JWT signed with a service account's private key
#[derive(Parser, Debug, Clone)]
#[command(name = "sa-token", version, about)]
pub struct Args {
    /// Location of the service account JSON key file
    #[arg(
        long = "service-account",
        env = "SA_TOKEN_SERVICE_ACCOUNT",
        default_value = DEFAULT_SERVICE_ACCOUNT_PATH
    )]
    pub service_account: PathBuf,

    /// Tenant name embedded in the token payload
    #[arg(long, env = "SA_TOKEN_TENANT_NAME", default_value = DEFAULT_TENANT_NAME)]
    pub tenant_name: String,

    /// Tenant identifier embedded in the token payload
    #[arg(long, env = "SA_TOKEN_TENANT_ID", default_value = DEFAULT_TENANT_ID)]
    pub tenant_id: String,

    /// Point-of-contact email embedded in the token payload
    #[arg(long, env = "SA_TOKEN_POC_EMAIL", default_value = DEFAULT_POC_EMAIL)]
    pub poc_email: String,

    /// Emit logs as JSON on stderr
    #[arg(long, env = "SA_TOKEN_JSON_LOGS")]
    pub json_logs: bool,
}
