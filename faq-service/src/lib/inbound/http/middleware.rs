use auth::CredentialDirectory;
use auth::TokenCodec;
use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;

use crate::domain::faq::ports::FaqRepository;
use crate::inbound::http::handlers::unauthorized;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated identity to downstream
/// handlers.
///
/// Only the subject is carried, and it is not a session: every request is
/// decoded fresh, so nothing persists between requests.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
}

/// Why a request was rejected. Logged for observability, never sent to the
/// client.
#[derive(Debug, Error)]
enum GuardError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Middleware that validates bearer tokens and adds the caller's identity to
/// request extensions.
pub async fn authenticate<D, R>(
    State(state): State<AppState<D, R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    let identity = authorize(&state.token_codec, req.headers()).map_err(|e| {
        tracing::warn!(reason = %e, "Request rejected");
        unauthorized()
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Validate the Authorization header and produce the caller's identity.
fn authorize(token_codec: &TokenCodec, headers: &HeaderMap) -> Result<Identity, GuardError> {
    let token = bearer_token(headers).ok_or(GuardError::MissingToken)?;
    let claims = token_codec.decode(token)?;

    Ok(Identity {
        subject: claims.sub,
    })
}

/// Extract the token from a header of the exact form `Bearer <token>`.
///
/// The scheme is matched case-sensitively with a single space. Anything else
/// counts as no token at all and never reaches the codec.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use chrono::Duration;

    use super::*;

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(authorization).unwrap(),
        );
        headers
    }

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test_secret_key_at_least_32_bytes!", Duration::minutes(30))
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("bearer abc.def.ghi")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
    }

    #[test]
    fn test_authorize_valid_token() {
        let codec = codec();
        let token = codec.issue("a@example.com").expect("Failed to issue token");

        let identity = authorize(&codec, &headers(&format!("Bearer {token}")))
            .expect("Authorization should succeed");
        assert_eq!(identity.subject, "a@example.com");
    }

    #[test]
    fn test_authorize_missing_header() {
        let result = authorize(&codec(), &HeaderMap::new());
        assert!(matches!(result, Err(GuardError::MissingToken)));
    }

    #[test]
    fn test_authorize_wrong_scheme_never_reaches_codec() {
        // A non-token after a wrong scheme would decode as Malformed; the
        // guard reports MissingToken instead because the scheme check comes
        // first.
        let result = authorize(&codec(), &headers("Basic xyz"));
        assert!(matches!(result, Err(GuardError::MissingToken)));
    }

    #[test]
    fn test_authorize_preserves_internal_error_kind() {
        let result = authorize(&codec(), &headers("Bearer not.a.token"));
        assert!(matches!(
            result,
            Err(GuardError::Token(TokenError::Malformed(_)))
        ));
    }
}
