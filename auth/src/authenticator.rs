use std::sync::Arc;

use crate::directory::CredentialDirectory;
use crate::directory::DirectoryError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Verified in place of a stored digest when no principal matches the
/// supplied id, so a lookup miss costs the same as a digest mismatch.
const PLACEHOLDER_PASSWORD: &str = "placeholder-password";

/// Authentication coordinator combining credential lookup, password
/// verification and token issuance.
///
/// All collaborators are injected at construction; the authenticator holds
/// no other state and is safe to share across requests.
pub struct Authenticator<D: CredentialDirectory> {
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
    placeholder_digest: String,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed bearer access token
    pub access_token: String,
}

/// Authentication operation errors.
///
/// `InvalidCredentials` covers both unknown ids and wrong passwords; the two
/// are deliberately indistinguishable to callers.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Verification worker failed: {0}")]
    WorkerFailed(String),
}

impl<D: CredentialDirectory> Authenticator<D> {
    /// Create a new authenticator.
    ///
    /// Computes the placeholder digest once up front so the unknown-id path
    /// performs a full-cost verification.
    ///
    /// # Arguments
    /// * `directory` - Principal lookup
    /// * `password_hasher` - Digest verification
    /// * `token_codec` - Token issuance
    ///
    /// # Errors
    /// * `PasswordError` - Placeholder digest computation failed
    pub fn new(
        directory: Arc<D>,
        password_hasher: PasswordHasher,
        token_codec: Arc<TokenCodec>,
    ) -> Result<Self, PasswordError> {
        let placeholder_digest = password_hasher.hash(PLACEHOLDER_PASSWORD)?;

        Ok(Self {
            directory,
            password_hasher,
            token_codec,
            placeholder_digest,
        })
    }

    /// Verify credentials and issue an access token.
    ///
    /// Verification always runs, against the stored digest when the id is
    /// known and against the placeholder digest when it is not, so response
    /// timing does not reveal which ids exist. Hashing is CPU-heavy and runs
    /// on the blocking pool rather than stalling the async runtime.
    ///
    /// # Arguments
    /// * `id` - Principal identifier
    /// * `password` - Plaintext password to verify
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown id or password mismatch
    /// * `Directory` - Credential store failed
    /// * `Token` - Token issuance failed
    pub async fn login(
        &self,
        id: &str,
        password: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let principal = self.directory.lookup(id).await?;

        let digest = principal.as_ref().map_or_else(
            || self.placeholder_digest.clone(),
            |p| p.credential_digest.clone(),
        );
        let hasher = self.password_hasher.clone();
        let password = password.to_string();

        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| AuthenticationError::WorkerFailed(e.to_string()))?;

        let Some(principal) = principal else {
            // placeholder verification above already burned the time
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !verified {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.issue(&principal.id)?;

        Ok(AuthenticationResult { access_token })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::directory::InMemoryCredentialDirectory;
    use crate::directory::Principal;

    fn authenticator(
        seed: &[(&str, &str)],
    ) -> Authenticator<InMemoryCredentialDirectory> {
        let hasher = PasswordHasher::new();
        let principals: Vec<Principal> = seed
            .iter()
            .map(|(id, password)| Principal {
                id: id.to_string(),
                credential_digest: hasher.hash(password).expect("Failed to hash password"),
                algorithm: PasswordHasher::ALGORITHM.to_string(),
            })
            .collect();

        let directory = Arc::new(InMemoryCredentialDirectory::new(principals));
        let codec = Arc::new(TokenCodec::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::minutes(30),
        ));

        Authenticator::new(directory, hasher, codec).expect("Failed to build authenticator")
    }

    #[tokio::test]
    async fn test_login_success() {
        let authenticator = authenticator(&[("a@example.com", "correct")]);

        let result = authenticator
            .login("a@example.com", "correct")
            .await
            .expect("Login should succeed");

        assert!(!result.access_token.is_empty());

        // Subject of the issued token is the id that was verified
        let codec = TokenCodec::new(
            b"test_secret_key_at_least_32_bytes!",
            Duration::minutes(30),
        );
        let claims = codec
            .decode(&result.access_token)
            .expect("Issued token should decode");
        assert_eq!(claims.sub, "a@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = authenticator(&[("a@example.com", "correct")]);

        let result = authenticator.login("a@example.com", "wrong").await;
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_id() {
        let authenticator = authenticator(&[("a@example.com", "correct")]);

        let result = authenticator.login("unknown@example.com", "anything").await;
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_unknown_id_and_wrong_password_are_indistinguishable() {
        let authenticator = authenticator(&[("a@example.com", "correct")]);

        let wrong_password = authenticator
            .login("a@example.com", "wrong")
            .await
            .expect_err("Login should fail");
        let unknown_id = authenticator
            .login("unknown@example.com", "wrong")
            .await
            .expect_err("Login should fail");

        assert_eq!(wrong_password.to_string(), unknown_id.to_string());
    }
}
