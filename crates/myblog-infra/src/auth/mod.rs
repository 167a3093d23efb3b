//! Credential hashing implementations.

mod password;

pub use password::{Argon2PasswordService, PasswordHashConfig};
