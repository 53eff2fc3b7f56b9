//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions over minted tokens and RS256 signature
//! verification against a public key.

use common::jwt::{decode_claims, decode_header, split_compact, TOKEN_TYPE};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::collections::HashSet;

/// Custom assertions for minted tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_signed_by("key-01")
///     .assert_for_principal("svc@example.com");
/// ```
pub trait TokenAssertions {
    /// Assert three base64url segments, an RS256 `JWT` header, and JSON claims
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the header `kid` equals `key_id`
    fn assert_signed_by(&self, key_id: &str) -> &Self;

    /// Assert the `aud` claim
    fn assert_audience(&self, audience: &str) -> &Self;

    /// Assert that both `iss` and `sub` equal `principal`
    fn assert_for_principal(&self, principal: &str) -> &Self;

    /// Assert the exact `iat` claim
    fn assert_issued_at(&self, iat: i64) -> &Self;

    /// Assert that `iat` falls within `[earliest, latest]`
    fn assert_issued_between(&self, earliest: i64, latest: i64) -> &Self;

    /// Assert that `data` holds exactly the three tenant fields with these values
    fn assert_tenant(&self, tenant_name: &str, tenant_id: &str, poc_email: &str) -> &Self;
}

fn header_of(token: &str) -> serde_json::Value {
    decode_header(token).unwrap_or_else(|e| panic!("Failed to decode JWT header: {e}"))
}

fn claims_of(token: &str) -> serde_json::Value {
    decode_claims(token).unwrap_or_else(|e| panic!("Failed to decode JWT claims: {e}"))
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        let parts = split_compact(self);
        assert!(
            parts.is_ok(),
            "JWT must be three base64url segments: {:?}",
            parts.err()
        );

        let header = header_of(self);
        assert_eq!(header["alg"], "RS256", "Expected RS256 algorithm");
        assert_eq!(header["typ"], TOKEN_TYPE, "Expected JWT type");

        claims_of(self);

        self
    }

    fn assert_signed_by(&self, key_id: &str) -> &Self {
        let header = header_of(self);
        assert_eq!(
            header["kid"].as_str(),
            Some(key_id),
            "Expected key_id '{}', got {:?}",
            key_id,
            header["kid"]
        );
        self
    }

    fn assert_audience(&self, audience: &str) -> &Self {
        let claims = claims_of(self);
        assert_eq!(claims["aud"].as_str(), Some(audience), "Unexpected audience");
        self
    }

    fn assert_for_principal(&self, principal: &str) -> &Self {
        let claims = claims_of(self);
        assert_eq!(claims["iss"].as_str(), Some(principal), "Unexpected issuer");
        assert_eq!(claims["sub"].as_str(), Some(principal), "Unexpected subject");
        self
    }

    fn assert_issued_at(&self, iat: i64) -> &Self {
        let claims = claims_of(self);
        assert_eq!(claims["iat"].as_i64(), Some(iat), "Unexpected iat");
        self
    }

    fn assert_issued_between(&self, earliest: i64, latest: i64) -> &Self {
        let claims = claims_of(self);
        let iat = claims["iat"].as_i64().expect("iat must be an integer");
        assert!(
            (earliest..=latest).contains(&iat),
            "iat {} not within [{}, {}]",
            iat,
            earliest,
            latest
        );
        self
    }

    fn assert_tenant(&self, tenant_name: &str, tenant_id: &str, poc_email: &str) -> &Self {
        let claims = claims_of(self);
        let data = claims["data"]
            .as_object()
            .expect("data claim must be an object");

        assert_eq!(data.len(), 3, "data must have exactly 3 fields: {data:?}");
        assert_eq!(data["tenant_name"], tenant_name);
        assert_eq!(data["tenant_id"], tenant_id);
        assert_eq!(data["poc_email"], poc_email);
        self
    }
}

/// Verify an RS256 token against an SPKI public key PEM.
///
/// Only the signature and algorithm are enforced; minted tokens carry no
/// `exp`, so no time-based claims are required.
pub fn verify_rs256(
    token: &str,
    public_key_pem: &str,
) -> Result<serde_json::Value, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.required_spec_claims = HashSet::new();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let data = decode::<serde_json::Value>(token, &decoding_key, &validation)?;
    Ok(data.claims)
}
