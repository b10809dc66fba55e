use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::faq::errors::FaqError;
use crate::domain::faq::models::CreateFaqCommand;
use crate::domain::faq::models::Faq;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::models::UpdateFaqCommand;
use crate::domain::faq::ports::FaqRepository;
use crate::domain::faq::ports::FaqServicePort;

/// Domain service implementation for FAQ operations.
///
/// Concrete implementation of FaqServicePort with dependency injection.
pub struct FaqService<R>
where
    R: FaqRepository,
{
    repository: Arc<R>,
}

impl<R> FaqService<R>
where
    R: FaqRepository,
{
    /// Create a new FAQ service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FaqServicePort for FaqService<R>
where
    R: FaqRepository,
{
    async fn create_faq(&self, command: CreateFaqCommand) -> Result<Faq, FaqError> {
        let faq = Faq {
            id: command.id,
            question: command.question,
            answer: command.answer,
        };

        self.repository.create(faq).await
    }

    async fn get_faq(&self, id: FaqId) -> Result<Faq, FaqError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(FaqError::NotFound(id))
    }

    async fn list_faqs(&self) -> Result<Vec<Faq>, FaqError> {
        self.repository.list_all().await
    }

    async fn update_faq(&self, id: FaqId, command: UpdateFaqCommand) -> Result<Faq, FaqError> {
        let mut faq = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(FaqError::NotFound(id))?;

        faq.question = command.question;
        faq.answer = command.answer;

        self.repository.update(faq).await
    }

    async fn delete_faq(&self, id: FaqId) -> Result<(), FaqError> {
        self.repository.delete(id).await
    }
}
