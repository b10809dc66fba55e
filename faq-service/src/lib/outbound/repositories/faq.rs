use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::faq::errors::FaqError;
use crate::domain::faq::models::Faq;
use crate::domain::faq::models::FaqId;
use crate::domain::faq::ports::FaqRepository;

pub struct PostgresFaqRepository {
    pool: PgPool,
}

impl PostgresFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FaqRow {
    id: i64,
    question: String,
    answer: String,
}

impl From<FaqRow> for Faq {
    fn from(row: FaqRow) -> Self {
        Self {
            id: FaqId(row.id),
            question: row.question,
            answer: row.answer,
        }
    }
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn create(&self, faq: Faq) -> Result<Faq, FaqError> {
        sqlx::query(
            r#"
            INSERT INTO faqs (id, question, answer)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(faq.id.0)
        .bind(&faq.question)
        .bind(&faq.answer)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return FaqError::AlreadyExists(faq.id);
                }
            }
            FaqError::DatabaseError(e.to_string())
        })?;

        Ok(faq)
    }

    async fn find_by_id(&self, id: FaqId) -> Result<Option<Faq>, FaqError> {
        let row = sqlx::query_as::<_, FaqRow>(
            r#"
            SELECT id, question, answer
            FROM faqs
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(row.map(Faq::from))
    }

    async fn list_all(&self) -> Result<Vec<Faq>, FaqError> {
        let rows = sqlx::query_as::<_, FaqRow>(
            r#"
            SELECT id, question, answer
            FROM faqs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Faq::from).collect())
    }

    async fn update(&self, faq: Faq) -> Result<Faq, FaqError> {
        let result = sqlx::query(
            r#"
            UPDATE faqs
            SET question = $2, answer = $3
            WHERE id = $1
            "#,
        )
        .bind(faq.id.0)
        .bind(&faq.question)
        .bind(&faq.answer)
        .execute(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FaqError::NotFound(faq.id));
        }

        Ok(faq)
    }

    async fn delete(&self, id: FaqId) -> Result<(), FaqError> {
        let result = sqlx::query(
            r#"
            DELETE FROM faqs
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FaqError::NotFound(id));
        }

        Ok(())
    }
}
