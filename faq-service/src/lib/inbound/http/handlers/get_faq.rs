use auth::CredentialDirectory;
use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::FaqData;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::ports::FaqServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_faq<D, R>(
    State(state): State<AppState<D, R>>,
    Path(faq_id): Path<i64>,
) -> Result<Json<FaqData>, ApiError>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    state
        .faq_service
        .get_faq(FaqId(faq_id))
        .await
        .map_err(ApiError::from)
        .map(|ref faq| Json(faq.into()))
}
