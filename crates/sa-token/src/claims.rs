//! Claims asserted by a minted token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audience of every token: the service that consumes them.
pub const AUDIENCE: &str = "cisco-auth";

/// Tenant payload embedded under the `data` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantData {
    pub tenant_name: String,
    pub tenant_id: String,
    pub poc_email: String,
}

/// JWT claims structure.
///
/// `iss` and `sub` both carry the service account's email and are redacted
/// in Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub aud: String,  // Consuming service
    pub iat: i64,     // Issued at (Unix seconds)
    pub iss: String,  // Service account email
    pub sub: String,  // Service account email
    pub data: TenantData,
}

impl fmt::Debug for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Claims")
            .field("aud", &self.aud)
            .field("iat", &self.iat)
            .field("iss", &"[REDACTED]")
            .field("sub", &"[REDACTED]")
            .field("data", &self.data)
            .finish()
    }
}

impl Claims {
    /// Build claims for `principal` issued at `issued_at` (Unix seconds).
    #[must_use]
    pub fn new(principal: &str, data: TenantData, issued_at: i64) -> Self {
        Self {
            aud: AUDIENCE.to_string(),
            iat: issued_at,
            iss: principal.to_string(),
            sub: principal.to_string(),
            data,
        }
    }

    /// Build claims issued at the current wall-clock second.
    #[must_use]
    pub fn issued_now(principal: &str, data: TenantData) -> Self {
        Self::new(principal, data, chrono::Utc::now().timestamp())
    }
}
