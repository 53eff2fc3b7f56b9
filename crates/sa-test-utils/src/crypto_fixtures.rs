//! Fixed cryptographic fixtures for testing
//!
//! Provides 2048-bit RSA keypairs, a 1024-bit RSA key and a P-256 key as
//! PEM text. The same fixture always yields the same key, so signatures over
//! identical input are reproducible.

/// Primary RSA private key, PKCS#8 (`PRIVATE KEY`).
pub const PRIMARY_PKCS8_PEM: &str = include_str!("../fixtures/primary_pkcs8.pem");

/// Public half of the primary key, SPKI (`PUBLIC KEY`).
pub const PRIMARY_PUBLIC_PEM: &str = include_str!("../fixtures/primary_public.pem");

/// The primary RSA key in PKCS#1 form (`RSA PRIVATE KEY`), the wrong block type.
pub const PRIMARY_PKCS1_PEM: &str = include_str!("../fixtures/primary_pkcs1.pem");

/// Secondary RSA private key, PKCS#8.
pub const SECONDARY_PKCS8_PEM: &str = include_str!("../fixtures/secondary_pkcs8.pem");

/// Public half of the secondary key, SPKI.
pub const SECONDARY_PUBLIC_PEM: &str = include_str!("../fixtures/secondary_public.pem");

/// P-256 EC private key, PKCS#8. Not usable for RS256.
pub const EC_P256_PKCS8_PEM: &str = include_str!("../fixtures/ec_p256_pkcs8.pem");

/// 1024-bit RSA private key, PKCS#8. Well-formed but below the RS256 minimum.
pub const RSA_1024_PKCS8_PEM: &str = include_str!("../fixtures/rsa1024_pkcs8.pem");

/// Selects one of the fixed test keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKey {
    Primary,
    Secondary,
    EcP256,
    Rsa1024,
}

/// A private key fixture and the matching public key, both PEM.
#[derive(Debug, Clone, Copy)]
pub struct SigningKeyFixture {
    pub private_pem: &'static str,
    /// Empty for keys that cannot produce an RS256 signature.
    pub public_pem: &'static str,
}

/// Get a fixed signing key for testing.
///
/// # Example
/// ```rust,ignore
/// let fixture = test_signing_key(TestKey::Primary);
/// let key = PrivateKey::from_pem(fixture.private_pem)?;
/// verify_rs256(&token, fixture.public_pem)?;
/// ```
pub fn test_signing_key(key: TestKey) -> SigningKeyFixture {
    match key {
        TestKey::Primary => SigningKeyFixture {
            private_pem: PRIMARY_PKCS8_PEM,
            public_pem: PRIMARY_PUBLIC_PEM,
        },
        TestKey::Secondary => SigningKeyFixture {
            private_pem: SECONDARY_PKCS8_PEM,
            public_pem: SECONDARY_PUBLIC_PEM,
        },
        TestKey::EcP256 => SigningKeyFixture {
            private_pem: EC_P256_PKCS8_PEM,
            public_pem: "",
        },
        TestKey::Rsa1024 => SigningKeyFixture {
            private_pem: RSA_1024_PKCS8_PEM,
            public_pem: "",
        },
    }
}
