use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};

use super::expect_affected;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
}

pub async fn get_answer<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> sqlx::Result<Answer> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, question_id, text FROM answers WHERE answers.id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(executor)
    .await
}

pub async fn get_answers_for_question<'e>(
    executor: impl SqliteExecutor<'e>,
    question_id: i64,
) -> sqlx::Result<Vec<Answer>> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT id, question_id, text FROM answers WHERE answers.question_id = ?1 ORDER BY id
        "#,
    )
    .bind(question_id)
    .fetch_all(executor)
    .await
}

/// Every answer of every question in the quiz, in one statement.
pub async fn get_answers_for_quiz<'e>(
    executor: impl SqliteExecutor<'e>,
    quiz_id: i64,
) -> sqlx::Result<Vec<Answer>> {
    sqlx::query_as::<_, Answer>(
        r#"
        SELECT answers.id, answers.question_id, answers.text
        FROM answers JOIN questions ON answers.question_id = questions.id
        WHERE questions.quiz_id = ?1
        ORDER BY answers.id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(executor)
    .await
}

pub async fn create_answer(pool: &SqlitePool, question_id: i64, text: &str) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO answers (question_id, text) VALUES (?1, ?2)
        "#,
    )
    .bind(question_id)
    .bind(text)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_answer(pool: &SqlitePool, id: i64, text: &str) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        UPDATE answers SET text=?1 WHERE answers.id = ?2
        "#,
    )
    .bind(text)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    expect_affected(result)
}

pub async fn delete_answer(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        DELETE FROM answers WHERE answers.id = ?1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;
    expect_affected(result)
}
