use auth::AuthenticationError;
use auth::CredentialDirectory;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::faq::ports::FaqRepository;
use crate::inbound::http::router::AppState;

pub async fn login<D, R>(
    State(state): State<AppState<D, R>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, Json<LoginResponseData>), ApiError>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    let result = state
        .authenticator
        .login(&body.id, &body.password)
        .await
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => ApiError::Unauthorized,
            AuthenticationError::Directory(err) => {
                ApiError::InternalServerError(format!("Credential lookup failed: {}", err))
            }
            AuthenticationError::Token(err) => {
                ApiError::InternalServerError(format!("Token issuance failed: {}", err))
            }
            AuthenticationError::WorkerFailed(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
        })?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseData {
            access_token: result.access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    id: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
