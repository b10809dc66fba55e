use auth::CredentialDirectory;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::FaqData;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::ports::FaqServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_faqs<D, R>(
    State(state): State<AppState<D, R>>,
) -> Result<Json<Vec<FaqData>>, ApiError>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    state
        .faq_service
        .list_faqs()
        .await
        .map_err(ApiError::from)
        .map(|faqs| Json(faqs.iter().map(FaqData::from).collect()))
}
