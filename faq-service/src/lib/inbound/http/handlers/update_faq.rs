use auth::CredentialDirectory;
use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::FaqData;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::models::UpdateFaqCommand;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::ports::FaqServicePort;
use crate::inbound::http::middleware::Identity;
use crate::inbound::http::router::AppState;

/// HTTP request body for replacing a FAQ's content (raw JSON).
///
/// Both fields are required; submitting an empty string stores an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateFaqRequest {
    question: String,
    answer: String,
}

pub async fn update_faq<D, R>(
    State(state): State<AppState<D, R>>,
    Extension(identity): Extension<Identity>,
    Path(faq_id): Path<i64>,
    Json(body): Json<UpdateFaqRequest>,
) -> Result<Json<FaqData>, ApiError>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    tracing::info!(subject = %identity.subject, faq_id, "Updating FAQ");

    state
        .faq_service
        .update_faq(
            FaqId(faq_id),
            UpdateFaqCommand {
                question: body.question,
                answer: body.answer,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref faq| Json(faq.into()))
}
