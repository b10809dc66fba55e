//! Stateless bearer-token authentication library
//!
//! Provides the building blocks for a login wall with no server-side
//! session state:
//! - Password hashing (Argon2id)
//! - Signed token issuance and validation (HMAC-SHA256 over base64url segments)
//! - Credential directory (seeded, read-only principal table)
//! - Authentication coordination
//!
//! The token codec is built directly over MAC and base64url primitives
//! behind a narrow encode/decode interface, so the signing algorithm can be
//! swapped without touching callers.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Signed Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = codec.issue("alice@example.com").unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::Authenticator;
//! use auth::InMemoryCredentialDirectory;
//! use auth::PasswordHasher;
//! use auth::Principal;
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let hasher = PasswordHasher::new();
//! let directory = Arc::new(InMemoryCredentialDirectory::new([Principal {
//!     id: "alice@example.com".to_string(),
//!     credential_digest: hasher.hash("password123").unwrap(),
//!     algorithm: PasswordHasher::ALGORITHM.to_string(),
//! }]));
//! let codec = Arc::new(TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(30),
//! ));
//!
//! let authenticator = Authenticator::new(directory, hasher, Arc::clone(&codec)).unwrap();
//! let result = authenticator.login("alice@example.com", "password123").await.unwrap();
//!
//! let claims = codec.decode(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "alice@example.com");
//! # }
//! ```

pub mod authenticator;
pub mod directory;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use directory::CredentialDirectory;
pub use directory::DirectoryError;
pub use directory::InMemoryCredentialDirectory;
pub use directory::Principal;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
