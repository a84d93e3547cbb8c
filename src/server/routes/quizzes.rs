use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::quizzes::{self, QUIZZES_PATH},
        Quiz, QuizDetail,
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
struct NewQuiz {
    title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct QuizUpdate {
    title: String,
}

async fn get_quizzes(State(pool): State<SqlitePool>) -> ApiResponse<Json<Vec<Quiz>>> {
    Ok(Json(quizzes::get_all_quizzes(&pool).await?))
}

async fn quiz_detail(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<Json<QuizDetail>> {
    Ok(Json(quizzes::get_quiz_detail(&pool, id).await?))
}

async fn create_quiz(
    State(pool): State<SqlitePool>,
    AppJson(new_quiz): AppJson<NewQuiz>,
) -> ApiResponse<Created> {
    let id = quizzes::create_quiz(&pool, &new_quiz.title).await?;
    Ok(Created::new("quiz", format!("{QUIZZES_PATH}/{id}"), id))
}

async fn update_quiz(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppJson(quiz): AppJson<QuizUpdate>,
) -> ApiResponse<StatusCode> {
    quizzes::update_quiz(&pool, id, &quiz.title).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_quiz(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<StatusCode> {
    quizzes::delete_quiz(&pool, id).await?;
    Ok(deleted("quiz", id))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route(QUIZZES_PATH, get(get_quizzes).post(create_quiz))
        .route(
            &format!("{QUIZZES_PATH}/{{id}}"),
            get(quiz_detail).put(update_quiz).delete(delete_quiz),
        )
        .with_state(state)
}
