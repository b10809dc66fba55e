use auth::CredentialDirectory;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::ports::FaqServicePort;
use crate::inbound::http::middleware::Identity;
use crate::inbound::http::router::AppState;

pub async fn delete_faq<D, R>(
    State(state): State<AppState<D, R>>,
    Extension(identity): Extension<Identity>,
    Path(faq_id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    tracing::info!(subject = %identity.subject, faq_id, "Deleting FAQ");

    state
        .faq_service
        .delete_faq(FaqId(faq_id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
