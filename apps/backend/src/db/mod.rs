//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgConnection, PgPool, Postgres, Transaction};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Wrap an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Start a transaction for a batch of writes
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.pool.begin().await?)
    }

    // === Choice Question Repository ===

    /// Get all choice questions ordered by ID
    pub async fn list_questions(&self) -> Result<Vec<DbChoiceQuestion>> {
        let questions = sqlx::query_as::<_, DbChoiceQuestion>(
            r#"
            SELECT id, question, option_a, option_b, option_c, option_d,
                   correct_answer, created_at
            FROM choice_questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a choice question, returning its ID
    pub async fn insert_question(conn: &mut PgConnection, question: &NewChoiceQuestion) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO choice_questions (question, option_a, option_b, option_c, option_d, correct_answer)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.option_a)
        .bind(&question.option_b)
        .bind(&question.option_c)
        .bind(&question.option_d)
        .bind(&question.correct_answer)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    // === Flashcard Repository ===

    /// Get all flashcards ordered by ID
    pub async fn list_flashcards(&self) -> Result<Vec<DbFlashcard>> {
        let flashcards = sqlx::query_as::<_, DbFlashcard>(
            r#"
            SELECT id, word, meaning, example, explanation, part_of_speech,
                   question_id, created_at
            FROM flashcards
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(flashcards)
    }

    /// Insert a flashcard with its resolved question link, returning its ID
    pub async fn insert_flashcard(
        conn: &mut PgConnection,
        flashcard: &NewFlashcard,
        question_id: Option<i64>,
    ) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO flashcards (word, meaning, example, explanation, part_of_speech, question_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&flashcard.word)
        .bind(&flashcard.meaning)
        .bind(&flashcard.example)
        .bind(&flashcard.explanation)
        .bind(&flashcard.part_of_speech)
        .bind(question_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    // === Cloze Repository ===

    /// Get all cloze passages ordered by ID
    pub async fn list_cloze_passages(&self) -> Result<Vec<DbClozePassage>> {
        let passages = sqlx::query_as::<_, DbClozePassage>(
            r#"
            SELECT id, passage, correct_answers, created_at
            FROM cloze_questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(passages)
    }

    /// Insert a cloze passage, returning its ID
    pub async fn insert_cloze_passage(conn: &mut PgConnection, passage: &NewClozePassage) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO cloze_questions (passage, correct_answers)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&passage.passage)
        .bind(&passage.correct_answers)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }
    // === Batch Uploads ===

    /// Insert choice questions in order inside one transaction.
    /// Any failed row rolls back the whole batch.
    pub async fn insert_question_batch(&self, questions: &[NewChoiceQuestion]) -> Result<Vec<i64>> {
        let mut tx = self.begin().await?;
        let mut ids = Vec::with_capacity(questions.len());
        for question in questions {
            ids.push(Self::insert_question(&mut tx, question).await?);
        }
        tx.commit().await?;
        Ok(ids)
    }

    /// Insert flashcards with their resolved links, all or nothing.
    pub async fn insert_flashcard_batch<'a, I>(&self, flashcards: I) -> Result<Vec<i64>>
    where
        I: IntoIterator<Item = (&'a NewFlashcard, Option<i64>)>,
    {
        let mut tx = self.begin().await?;
        let mut ids = Vec::new();
        for (flashcard, question_id) in flashcards {
            ids.push(Self::insert_flashcard(&mut tx, flashcard, question_id).await?);
        }
        tx.commit().await?;
        Ok(ids)
    }

    pub async fn insert_cloze_batch(&self, passages: &[NewClozePassage]) -> Result<Vec<i64>> {
        let mut tx = self.begin().await?;
        let mut ids = Vec::with_capacity(passages.len());
        for passage in passages {
            ids.push(Self::insert_cloze_passage(&mut tx, passage).await?);
        }
        tx.commit().await?;
        Ok(ids)
    }
}
