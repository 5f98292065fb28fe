//! Database repository for the forum collections.
//!
//! One query per call; no transactions, no retries.

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    CreateCommentRequest, EntryDate, NewSubject, NewTopic, Subject, Topic, TopicComment,
};

/// Database repository for all data operations.
///
/// A repository built with [`Repository::disconnected`] answers every call with
/// [`AppError::Database`], which lets the server run without a store.
#[derive(Clone)]
pub struct Repository {
    pool: Option<SqlitePool>,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool: Some(pool) }
    }

    /// A repository with no underlying connection.
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    pub fn is_connected(&self) -> bool {
        self.pool.as_ref().is_some_and(|pool| !pool.is_closed())
    }

    fn pool(&self) -> Result<&SqlitePool, AppError> {
        match &self.pool {
            Some(pool) if !pool.is_closed() => Ok(pool),
            Some(_) => Err(AppError::Database(
                "Database connection is closed".to_string(),
            )),
            None => Err(AppError::Database(
                "Database is not connected".to_string(),
            )),
        }
    }

    /// Close the underlying pool. Later calls fail with a database error.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }

    // ==================== TOPIC OPERATIONS ====================

    /// List all topics in insertion order.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, text, author, date_day, date_month, date_year, subject, topic_id FROM topics ORDER BY rowid",
        )
        .fetch_all(self.pool()?)
        .await?;

        Ok(rows
            .iter()
            .map(topic_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Find every topic sharing `topic_id`.
    pub async fn find_topics_by_topic_id(&self, topic_id: i64) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, text, author, date_day, date_month, date_year, subject, topic_id FROM topics WHERE topic_id = ? ORDER BY rowid",
        )
        .bind(topic_id)
        .fetch_all(self.pool()?)
        .await?;

        Ok(rows
            .iter()
            .map(topic_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Insert a seeded topic.
    pub async fn insert_topic(&self, topic: &NewTopic) -> Result<Topic, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO topics (id, title, text, author, date_day, date_month, date_year, subject, topic_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&topic.title)
        .bind(&topic.text)
        .bind(&topic.author)
        .bind(topic.date.day)
        .bind(topic.date.month)
        .bind(topic.date.year)
        .bind(&topic.subject)
        .bind(topic.topic_id)
        .execute(self.pool()?)
        .await?;

        Ok(Topic {
            id,
            title: topic.title.clone(),
            text: topic.text.clone(),
            author: topic.author.clone(),
            date: topic.date.clone(),
            subject: topic.subject.clone(),
            topic_id: topic.topic_id,
        })
    }

    pub async fn count_topics(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM topics")
            .fetch_one(self.pool()?)
            .await?;
        Ok(row.try_get("count")?)
    }

    // ==================== SUBJECT OPERATIONS ====================

    /// List all subjects in insertion order.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, AppError> {
        let rows = sqlx::query("SELECT id, subject_id, name FROM subjects ORDER BY rowid")
            .fetch_all(self.pool()?)
            .await?;

        Ok(rows
            .iter()
            .map(subject_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Insert a seeded subject.
    pub async fn insert_subject(&self, subject: &NewSubject) -> Result<Subject, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO subjects (id, subject_id, name) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(subject.subject_id)
            .bind(&subject.name)
            .execute(self.pool()?)
            .await?;

        Ok(Subject {
            id,
            subject_id: subject.subject_id,
            name: subject.name.clone(),
        })
    }

    pub async fn count_subjects(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM subjects")
            .fetch_one(self.pool()?)
            .await?;
        Ok(row.try_get("count")?)
    }

    // ==================== COMMENT OPERATIONS ====================

    /// Find every comment attached to `topic_id`.
    pub async fn find_comments_by_topic_id(
        &self,
        topic_id: i64,
    ) -> Result<Vec<TopicComment>, AppError> {
        let rows = sqlx::query(
            "SELECT id, author, text, date_day, date_month, date_year, topic_id FROM topic_comments WHERE topic_id = ? ORDER BY rowid",
        )
        .bind(topic_id)
        .fetch_all(self.pool()?)
        .await?;

        Ok(rows
            .iter()
            .map(comment_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Persist a validated comment.
    pub async fn create_comment(
        &self,
        request: &CreateCommentRequest,
    ) -> Result<TopicComment, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let date = request.date_or_today();

        sqlx::query(
            "INSERT INTO topic_comments (id, author, text, date_day, date_month, date_year, topic_id) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.author)
        .bind(&request.text)
        .bind(date.day)
        .bind(date.month)
        .bind(date.year)
        .bind(request.topic_id)
        .execute(self.pool()?)
        .await?;

        Ok(TopicComment {
            id,
            author: Some(request.author.clone()),
            text: Some(request.text.clone()),
            date: date.into(),
            topic_id: Some(request.topic_id),
        })
    }
}

fn date_from_row(row: &SqliteRow) -> Result<EntryDate, sqlx::Error> {
    Ok(EntryDate {
        day: row.try_get("date_day")?,
        month: row.try_get("date_month")?,
        year: row.try_get("date_year")?,
    })
}

// Seeded rows are loosely typed; a mistyped column surfaces as a decode error.
fn topic_from_row(row: &SqliteRow) -> Result<Topic, sqlx::Error> {
    Ok(Topic {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        text: row.try_get("text")?,
        author: row.try_get("author")?,
        date: date_from_row(row)?,
        subject: row.try_get("subject")?,
        topic_id: row.try_get("topic_id")?,
    })
}

fn subject_from_row(row: &SqliteRow) -> Result<Subject, sqlx::Error> {
    Ok(Subject {
        id: row.try_get("id")?,
        subject_id: row.try_get("subject_id")?,
        name: row.try_get("name")?,
    })
}

fn comment_from_row(row: &SqliteRow) -> Result<TopicComment, sqlx::Error> {
    Ok(TopicComment {
        id: row.try_get("id")?,
        author: row.try_get("author")?,
        text: row.try_get("text")?,
        date: date_from_row(row)?,
        topic_id: row.try_get("topic_id")?,
    })
}
