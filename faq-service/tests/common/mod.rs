use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::InMemoryCredentialDirectory;
use auth::PasswordHasher;
use auth::Principal;
use auth::TokenCodec;
use chrono::Duration;
use faq_service::domain::faq::errors::FaqError;
use faq_service::domain::faq::models::Faq;
use faq_service::domain::faq::models::FaqId;
use faq_service::domain::faq::ports::FaqRepository;
use faq_service::domain::faq::service::FaqService;
use faq_service::inbound::http::router::create_router;
use tokio::sync::RwLock;

/// Signing secret shared by the spawned app and tests that need to mint
/// their own tokens.
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing!";
pub const TEST_TTL_MINUTES: i64 = 30;

/// Seeded login credentials.
pub const TEST_PRINCIPAL_ID: &str = "a@example.com";
pub const TEST_PASSWORD: &str = "correct";

/// Test application that spawns a real server backed by in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

/// In-memory FAQ repository so HTTP tests need no database.
#[derive(Default)]
pub struct InMemoryFaqRepository {
    faqs: RwLock<BTreeMap<i64, Faq>>,
}

#[async_trait]
impl FaqRepository for InMemoryFaqRepository {
    async fn create(&self, faq: Faq) -> Result<Faq, FaqError> {
        let mut faqs = self.faqs.write().await;
        if faqs.contains_key(&faq.id.0) {
            return Err(FaqError::AlreadyExists(faq.id));
        }
        faqs.insert(faq.id.0, faq.clone());
        Ok(faq)
    }

    async fn find_by_id(&self, id: FaqId) -> Result<Option<Faq>, FaqError> {
        Ok(self.faqs.read().await.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Faq>, FaqError> {
        Ok(self.faqs.read().await.values().cloned().collect())
    }

    async fn update(&self, faq: Faq) -> Result<Faq, FaqError> {
        let mut faqs = self.faqs.write().await;
        if !faqs.contains_key(&faq.id.0) {
            return Err(FaqError::NotFound(faq.id));
        }
        faqs.insert(faq.id.0, faq.clone());
        Ok(faq)
    }

    async fn delete(&self, id: FaqId) -> Result<(), FaqError> {
        self.faqs
            .write()
            .await
            .remove(&id.0)
            .map(|_| ())
            .ok_or(FaqError::NotFound(id))
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let password_hasher = PasswordHasher::new();
        let directory = Arc::new(InMemoryCredentialDirectory::new([Principal {
            id: TEST_PRINCIPAL_ID.to_string(),
            credential_digest: password_hasher
                .hash(TEST_PASSWORD)
                .expect("Failed to hash seed password"),
            algorithm: PasswordHasher::ALGORITHM.to_string(),
        }]));

        let token_codec = Arc::new(TokenCodec::new(
            TEST_SECRET,
            Duration::minutes(TEST_TTL_MINUTES),
        ));
        let authenticator = Arc::new(
            Authenticator::new(directory, password_hasher, Arc::clone(&token_codec))
                .expect("Failed to build authenticator"),
        );
        let faq_service = Arc::new(FaqService::new(Arc::new(InMemoryFaqRepository::default())));

        let application = create_router(faq_service, authenticator, token_codec);
        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Log in with the seeded principal and return a bearer token.
    pub async fn login(&self) -> String {
        let response = self
            .post("/login")
            .json(&serde_json::json!({
                "id": TEST_PRINCIPAL_ID,
                "password": TEST_PASSWORD,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token should be a string")
            .to_string()
    }
}
