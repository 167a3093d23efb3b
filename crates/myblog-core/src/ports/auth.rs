//! Credential hashing port.

/// Password hashing service.
///
/// Implementations must be one-way: the stored representation allows
/// verification but never recovery of the original password.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Credential hashing errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),
}
