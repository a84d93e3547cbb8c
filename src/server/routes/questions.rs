use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            questions,
            quizzes::{self, QUIZZES_PATH},
        },
        Question,
    },
    server::{
        app::AppState,
        error::ApiResponse,
        extract::{AppJson, AppPath},
    },
};

use super::{deleted, Created};

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NewQuestion {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct QuestionUpdate {
    text: String,
    // absent or null clears the correct answer
    #[serde(default)]
    correct_answer_id: Option<i64>,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    AppPath(quiz_id): AppPath<i64>,
) -> ApiResponse<Json<Vec<Question>>> {
    quizzes::get_quiz(&pool, quiz_id).await?;
    Ok(Json(questions::get_questions_for_quiz(&pool, quiz_id).await?))
}

async fn question(
    State(pool): State<SqlitePool>,
    AppPath((_, id)): AppPath<(i64, i64)>,
) -> ApiResponse<Json<Question>> {
    Ok(Json(questions::get_question(&pool, id).await?))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    AppPath(quiz_id): AppPath<i64>,
    AppJson(new_question): AppJson<NewQuestion>,
) -> ApiResponse<Created> {
    let id = questions::create_question(&pool, quiz_id, &new_question.text).await?;
    Ok(Created::new(
        "question",
        format!("{QUIZZES_PATH}/{quiz_id}/questions/{id}"),
        id,
    ))
}

async fn update_question(
    State(pool): State<SqlitePool>,
    AppPath((_, id)): AppPath<(i64, i64)>,
    AppJson(question): AppJson<QuestionUpdate>,
) -> ApiResponse<StatusCode> {
    questions::update_question(&pool, id, &question.text, question.correct_answer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath((_, id)): AppPath<(i64, i64)>,
) -> ApiResponse<StatusCode> {
    questions::delete_question(&pool, id).await?;
    Ok(deleted("question", id))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{QUIZZES_PATH}/{{id}}/questions"),
            get(get_questions).post(create_question),
        )
        .route(
            &format!("{QUIZZES_PATH}/{{id}}/questions/{{qid}}"),
            get(question).put(update_question).delete(delete_question),
        )
        .with_state(state)
}
