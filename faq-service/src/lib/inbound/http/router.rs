use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::CredentialDirectory;
use auth::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_faq::create_faq;
use super::handlers::delete_faq::delete_faq;
use super::handlers::get_faq::get_faq;
use super::handlers::list_faqs::list_faqs;
use super::handlers::login::login;
use super::handlers::update_faq::update_faq;
use super::handlers::welcome::welcome;
use super::middleware::authenticate as auth_middleware;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::service::FaqService;

pub struct AppState<D, R>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    pub faq_service: Arc<FaqService<R>>,
    pub authenticator: Arc<Authenticator<D>>,
    pub token_codec: Arc<TokenCodec>,
}

impl<D, R> Clone for AppState<D, R>
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    fn clone(&self) -> Self {
        Self {
            faq_service: Arc::clone(&self.faq_service),
            authenticator: Arc::clone(&self.authenticator),
            token_codec: Arc::clone(&self.token_codec),
        }
    }
}

pub fn create_router<D, R>(
    faq_service: Arc<FaqService<R>>,
    authenticator: Arc<Authenticator<D>>,
    token_codec: Arc<TokenCodec>,
) -> Router
where
    D: CredentialDirectory,
    R: FaqRepository,
{
    let state = AppState {
        faq_service,
        authenticator,
        token_codec,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/login", post(login::<D, R>));

    let protected_routes = Router::new()
        .route("/faqs", get(list_faqs::<D, R>).post(create_faq::<D, R>))
        .route(
            "/faqs/:faq_id",
            get(get_faq::<D, R>)
                .put(update_faq::<D, R>)
                .delete(delete_faq::<D, R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<D, R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
