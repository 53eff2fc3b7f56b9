use crate::claims::Claims;
use crate::credentials::{KeyAlgorithm, PrivateKey};
use crate::errors::TokenError;
use common::jwt::{split_compact, TOKEN_TYPE};
use jsonwebtoken::{encode, errors::ErrorKind, Algorithm, EncodingKey, Header};
use ring::signature::RsaKeyPair;
use tracing::instrument;

/// Sign claims with an RSA private key (RS256).
///
/// The header carries `typ: JWT` and `kid` set to `key_id`. Returns the
/// compact serialization `header.claims.signature`.
///
/// # Errors
///
/// - `Signing` - the key is not RSA, or the RSA key is rejected by the signer
/// - `Serialization` - the claims cannot be encoded or the result is not a
///   well-formed compact token
#[instrument(skip_all, fields(kid = %key_id))]
pub fn sign_token(claims: &Claims, key: &PrivateKey, key_id: &str) -> Result<String, TokenError> {
    if key.algorithm() != &KeyAlgorithm::Rsa {
        return Err(TokenError::Signing(format!(
            "RS256 requires an RSA key, found {}",
            key.algorithm()
        )));
    }

    // Validate the private key before handing it to the encoder
    let _key_pair = RsaKeyPair::from_pkcs8(key.pkcs8_der())
        .map_err(|e| TokenError::Signing(format!("RSA key rejected: {e}")))?;

    // jsonwebtoken expects the PKCS#1 RSAPrivateKey wrapped by the PKCS#8 document
    let encoding_key = EncodingKey::from_rsa_der(key.key_material());

    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some(TOKEN_TYPE.to_string());
    header.kid = Some(key_id.to_string());

    let token = encode(&header, claims, &encoding_key).map_err(|e| match e.kind() {
        ErrorKind::Json(_) => TokenError::Serialization(format!("claims encoding failed: {e}")),
        _ => TokenError::Signing(format!("JWT signing operation failed: {e}")),
    })?;

    split_compact(&token)
        .map_err(|e| TokenError::Serialization(format!("malformed token: {e}")))?;

    Ok(token)
}
