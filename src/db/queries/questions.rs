use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};

use super::{expect_affected, quizzes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    pub correct_answer_id: Option<i64>,
}

pub async fn get_question<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> sqlx::Result<Question> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, text, correct_answer_id FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(executor)
    .await
}

pub async fn get_questions_for_quiz<'e>(
    executor: impl SqliteExecutor<'e>,
    quiz_id: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, text, correct_answer_id FROM questions
        WHERE questions.quiz_id = ?1
        ORDER BY id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(executor)
    .await
}

/// Fails with [`sqlx::Error::RowNotFound`] and inserts nothing when the quiz is missing.
pub async fn create_question(pool: &SqlitePool, quiz_id: i64, text: &str) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;
    quizzes::get_quiz(&mut *conn, quiz_id).await?;

    let id = sqlx::query(
        r#"
INSERT INTO questions (quiz_id, text) VALUES (?1, ?2)
        "#,
    )
    .bind(quiz_id)
    .bind(text)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Replaces text and correct answer. The answer id is stored as given, unchecked.
pub async fn update_question(
    pool: &SqlitePool,
    id: i64,
    text: &str,
    correct_answer_id: Option<i64>,
) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        UPDATE questions SET text=?1, correct_answer_id=?2 WHERE questions.id = ?3
        "#,
    )
    .bind(text)
    .bind(correct_answer_id)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    expect_affected(result)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;
    expect_affected(result)
}
