use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};

use super::answers::{self, Answer};
use super::expect_affected;
use super::questions::{self, Question};

/// Path every quiz resource is served under.
pub const QUIZZES_PATH: &str = "/api/quizzes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Quiz {
    pub id: i64,
    pub title: String,
}

/// A quiz with its questions and their answers nested inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuizDetail {
    pub id: i64,
    pub title: String,
    pub questions: Vec<QuestionItem>,
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuestionItem {
    pub id: i64,
    pub text: String,
    pub answers: Vec<AnswerItem>,
    pub correct_answer_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnswerItem {
    pub id: i64,
    pub text: String,
}

impl From<Answer> for AnswerItem {
    fn from(answer: Answer) -> Self {
        AnswerItem {
            id: answer.id,
            text: answer.text,
        }
    }
}

pub async fn get_all_quizzes(pool: &SqlitePool) -> sqlx::Result<Vec<Quiz>> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title FROM quizzes ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_quiz<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> sqlx::Result<Quiz> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title FROM quizzes WHERE quizzes.id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(executor)
    .await
}

/// Loads a quiz together with all of its questions and answers.
///
/// Always three statements (quiz, questions, answers joined through their
/// questions), run inside one read transaction so they see the same snapshot.
/// A missing quiz fails with [`sqlx::Error::RowNotFound`] before the other two run.
pub async fn get_quiz_detail(pool: &SqlitePool, id: i64) -> sqlx::Result<QuizDetail> {
    let mut tx = pool.begin().await?;
    let quiz = get_quiz(&mut *tx, id).await?;
    let questions = questions::get_questions_for_quiz(&mut *tx, id).await?;
    let answers = answers::get_answers_for_quiz(&mut *tx, id).await?;
    tx.commit().await?;
    Ok(assemble_quiz_detail(quiz, questions, answers))
}

/// Groups flat answer rows under their questions.
///
/// Answers whose question is not in `questions` are dropped.
pub fn assemble_quiz_detail(
    quiz: Quiz,
    questions: Vec<Question>,
    answers: Vec<Answer>,
) -> QuizDetail {
    let mut answers_by_question: HashMap<i64, Vec<Answer>> = answers
        .into_iter()
        .into_group_map_by(|answer| answer.question_id);

    let questions = questions
        .into_iter()
        .map(|question| QuestionItem {
            answers: answers_by_question
                .remove(&question.id)
                .unwrap_or_default()
                .into_iter()
                .map(AnswerItem::from)
                .collect(),
            id: question.id,
            text: question.text,
            correct_answer_id: question.correct_answer_id,
        })
        .collect();

    QuizDetail {
        links: quiz_links(quiz.id),
        id: quiz.id,
        title: quiz.title,
        questions,
    }
}

fn quiz_links(id: i64) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("self".to_owned(), format!("{QUIZZES_PATH}/{id}")),
        ("questions".to_owned(), format!("{QUIZZES_PATH}/{id}/questions")),
    ])
}

pub async fn create_quiz(pool: &SqlitePool, title: &str) -> sqlx::Result<i64> {
    let mut conn = pool.acquire().await?;

    let id = sqlx::query(
        r#"
INSERT INTO quizzes (title) VALUES (?1)
        "#,
    )
    .bind(title)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_quiz(pool: &SqlitePool, id: i64, title: &str) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        UPDATE quizzes SET title=?1 WHERE quizzes.id = ?2
        "#,
    )
    .bind(title)
    .bind(id)
    .execute(&mut *conn)
    .await?;
    expect_affected(result)
}

/// Deletes only the quiz row; its questions and answers stay behind.
pub async fn delete_quiz(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        r#"
        DELETE FROM quizzes WHERE quizzes.id = ?1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;
    expect_affected(result)
}
