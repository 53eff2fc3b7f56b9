//! Fixed identifiers for reproducible tests

/// Key id written into test credential files
pub const TEST_KEY_ID: &str = "3f2b9c1d8e7a6b5c4d3e2f1a0b9c8d7e6f5a4b3c";

/// Service account email written into test credential files
pub const TEST_CLIENT_EMAIL: &str = "token-minter@test-project.iam.gserviceaccount.com";

/// Project id written into test credential files
pub const TEST_PROJECT_ID: &str = "test-project";

/// Client id written into test credential files
pub const TEST_CLIENT_ID: &str = "104729384756102938475";
