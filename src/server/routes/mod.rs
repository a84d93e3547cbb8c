mod answers;
mod questions;
mod quizzes;

pub use answers::answers_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::telemetry::{ENTITIES_CREATED, ENTITIES_DELETED};

/// `201 Created` with the new resource path in `Location` and its id as the body.
struct Created {
    location: String,
    id: i64,
}

impl Created {
    fn new(entity: &str, location: String, id: i64) -> Self {
        ENTITIES_CREATED.with_label_values(&[entity]).inc();
        tracing::info!(id, "Created {entity}");
        Created { location, id }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.id),
        )
            .into_response()
    }
}

fn deleted(entity: &str, id: i64) -> StatusCode {
    ENTITIES_DELETED.with_label_values(&[entity]).inc();
    tracing::info!(id, "Deleted {entity}");
    StatusCode::NO_CONTENT
}
