use async_trait::async_trait;

use crate::domain::faq::errors::FaqError;
use crate::domain::faq::models::CreateFaqCommand;
use crate::domain::faq::models::Faq;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::models::UpdateFaqCommand;

/// Port for FAQ domain service operations.
#[async_trait]
pub trait FaqServicePort: Send + Sync + 'static {
    /// Create a new FAQ record.
    ///
    /// # Arguments
    /// * `command` - Command containing id, question, and answer
    ///
    /// # Returns
    /// Created FAQ record
    ///
    /// # Errors
    /// * `AlreadyExists` - A record with this id exists
    /// * `DatabaseError` - Database operation failed
    async fn create_faq(&self, command: CreateFaqCommand) -> Result<Faq, FaqError>;

    /// Retrieve a FAQ record by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_faq(&self, id: FaqId) -> Result<Faq, FaqError>;

    /// Retrieve all FAQ records.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_faqs(&self) -> Result<Vec<Faq>, FaqError>;

    /// Replace an existing FAQ record's question and answer.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_faq(&self, id: FaqId, command: UpdateFaqCommand) -> Result<Faq, FaqError>;

    /// Delete an existing FAQ record.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_faq(&self, id: FaqId) -> Result<(), FaqError>;
}

/// Persistence operations for FAQ records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync + 'static {
    /// Persist a new record.
    ///
    /// # Errors
    /// * `AlreadyExists` - Primary key is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, faq: Faq) -> Result<Faq, FaqError>;

    /// Retrieve a record by identifier.
    ///
    /// # Returns
    /// Optional record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: FaqId) -> Result<Option<Faq>, FaqError>;

    /// Retrieve all records.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Faq>, FaqError>;

    /// Replace an existing record.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, faq: Faq) -> Result<Faq, FaqError>;

    /// Remove a record.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: FaqId) -> Result<(), FaqError>;
}
