//! JWT compact-serialization helpers.
//!
//! A compact JWT is `base64url(header).base64url(claims).base64url(signature)`
//! with no padding. These helpers split and decode that form without touching
//! the signature. They are used to sanity-check freshly minted tokens and by
//! test assertions to inspect them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use common::jwt::{decode_header, split_compact};
//!
//! let parts = split_compact(&token)?;
//! let header = decode_header(&token)?;
//! assert_eq!(header["typ"], "JWT");
//! ```

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Value of the `typ` header for every token we mint.
pub const TOKEN_TYPE: &str = "JWT";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while inspecting a compact token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwtFormatError {
    /// Token does not have exactly three segments.
    #[error("token has {0} segments, expected 3")]
    WrongSegmentCount(usize),

    /// A segment is empty or not unpadded base64url.
    #[error("segment {0} is not valid base64url")]
    InvalidSegment(usize),

    /// A segment decoded to bytes that are not a JSON object.
    #[error("segment {0} is not a JSON object")]
    InvalidJson(usize),
}

// =============================================================================
// Types
// =============================================================================

/// The three raw segments of a compact token, still base64url encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactParts<'a> {
    pub header: &'a str,
    pub claims: &'a str,
    pub signature: &'a str,
}

// =============================================================================
// Functions
// =============================================================================

/// Split a compact token into its three segments.
///
/// Every segment must be non-empty and decode as unpadded base64url.
///
/// # Errors
///
/// - `WrongSegmentCount` - not exactly two periods
/// - `InvalidSegment` - empty segment or bad base64url (index is zero-based)
pub fn split_compact(token: &str) -> Result<CompactParts<'_>, JwtFormatError> {
    let segments: Vec<&str> = token.split('.').collect();
    let &[header, claims, signature] = segments.as_slice() else {
        tracing::debug!(
            target: "common.jwt",
            segments = segments.len(),
            "Token rejected: invalid compact format"
        );
        return Err(JwtFormatError::WrongSegmentCount(segments.len()));
    };

    for (index, segment) in [header, claims, signature].into_iter().enumerate() {
        if segment.is_empty() || URL_SAFE_NO_PAD.decode(segment).is_err() {
            tracing::debug!(target: "common.jwt", index, "Token rejected: bad segment encoding");
            return Err(JwtFormatError::InvalidSegment(index));
        }
    }

    Ok(CompactParts {
        header,
        claims,
        signature,
    })
}

fn decode_json_segment(segment: &str, index: usize) -> Result<serde_json::Value, JwtFormatError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| JwtFormatError::InvalidSegment(index))?;

    let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(target: "common.jwt", index, error = %e, "Failed to parse segment JSON");
        JwtFormatError::InvalidJson(index)
    })?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(JwtFormatError::InvalidJson(index))
    }
}

/// Decode the header segment of a compact token as a JSON object.
///
/// # Errors
///
/// Returns `JwtFormatError` if the token is not compact form or the header
/// is not a JSON object.
pub fn decode_header(token: &str) -> Result<serde_json::Value, JwtFormatError> {
    let parts = split_compact(token)?;
    decode_json_segment(parts.header, 0)
}

/// Decode the claims segment of a compact token as a JSON object.
///
/// # Errors
///
/// Returns `JwtFormatError` if the token is not compact form or the claims
/// are not a JSON object.
pub fn decode_claims(token: &str) -> Result<serde_json::Value, JwtFormatError> {
    let parts = split_compact(token)?;
    decode_json_segment(parts.claims, 1)
}

// =============================================================================
// Tests
// =============================================================================
