use std::path::PathBuf;
use thiserror::Error;

/// Failures of the token pipeline.
///
/// Every variant is fatal for the invocation. Steps return these and the
/// binary decides to exit.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to read credential file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid credential file: {0}")]
    CredentialParse(String),

    #[error("Could not parse private key: {0}")]
    InvalidKeyFormat(String),

    #[error("Invalid PKCS#8 private key: {0}")]
    InvalidKeyEncoding(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to write token: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_read_message_includes_path() {
        let err = TokenError::FileRead {
            path: PathBuf::from("/keys/sa.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/keys/sa.json"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let err: TokenError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, TokenError::Output(_)));
    }
}
