use auth::CredentialDirectory;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::FaqData;
use crate::domain::faq::models::CreateFaqCommand;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::ports::FaqServicePort;
use crate::inbound::http::middleware::Identity;
use crate::inbound::http::router::AppState;

pub async fn create_faq<D, R>(
    State(state): State<AppState<D, R>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<CreateFaqRequest>,
) -> Result<(StatusCode, Json<FaqData>), ApiError>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    tracing::info!(subject = %identity.subject, faq_id = body.id, "Creating FAQ");

    state
        .faq_service
        .create_faq(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref faq| (StatusCode::CREATED, Json(faq.into())))
}

/// HTTP request body for creating a FAQ (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateFaqRequest {
    id: i64,
    question: String,
    answer: String,
}

impl CreateFaqRequest {
    fn into_command(self) -> CreateFaqCommand {
        CreateFaqCommand {
            id: FaqId(self.id),
            question: self.question,
            answer: self.answer,
        }
    }
}
