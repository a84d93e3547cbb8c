use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{answers, quizzes::QUIZZES_PATH},
        Answer,
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
struct NewAnswer {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AnswerUpdate {
    text: String,
}

async fn get_answers(
    State(pool): State<SqlitePool>,
    AppPath((_, question_id)): AppPath<(i64, i64)>,
) -> ApiResponse<Json<Vec<Answer>>> {
    Ok(Json(answers::get_answers_for_question(&pool, question_id).await?))
}

async fn answer(
    State(pool): State<SqlitePool>,
    AppPath((_, _, id)): AppPath<(i64, i64, i64)>,
) -> ApiResponse<Json<Answer>> {
    Ok(Json(answers::get_answer(&pool, id).await?))
}

// the question is not looked up; answers may be attached to any question id
async fn create_answer(
    State(pool): State<SqlitePool>,
    AppPath((quiz_id, question_id)): AppPath<(i64, i64)>,
    AppJson(new_answer): AppJson<NewAnswer>,
) -> ApiResponse<Created> {
    let id = answers::create_answer(&pool, question_id, &new_answer.text).await?;
    Ok(Created::new(
        "answer",
        format!("{QUIZZES_PATH}/{quiz_id}/questions/{question_id}/answers/{id}"),
        id,
    ))
}

async fn update_answer(
    State(pool): State<SqlitePool>,
    AppPath((_, _, id)): AppPath<(i64, i64, i64)>,
    AppJson(answer): AppJson<AnswerUpdate>,
) -> ApiResponse<StatusCode> {
    answers::update_answer(&pool, id, &answer.text).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_answer(
    State(pool): State<SqlitePool>,
    AppPath((_, _, id)): AppPath<(i64, i64, i64)>,
) -> ApiResponse<StatusCode> {
    answers::delete_answer(&pool, id).await?;
    Ok(deleted("answer", id))
}

pub fn answers_router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("{QUIZZES_PATH}/{{id}}/questions/{{qid}}/answers"),
            get(get_answers).post(create_answer),
        )
        .route(
            &format!("{QUIZZES_PATH}/{{id}}/questions/{{qid}}/answers/{{aid}}"),
            get(answer).put(update_answer).delete(delete_answer),
        )
        .with_state(state)
}
