pub mod queries;

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use queries::answers::Answer;
pub use queries::questions::Question;
pub use queries::quizzes::{AnswerItem, QuestionItem, Quiz, QuizDetail};

use queries::{answers, questions, quizzes};
use sqlx::Error;

/// Value of `DB_PATH` selecting a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    if path == IN_MEMORY {
        // every sqlite in-memory connection is its own database, so keep exactly one alive
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await;
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePool::connect_with(options).await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Inserts a small sample quiz with two questions, returning the quiz id.
pub async fn seed_sample_quiz(pool: &SqlitePool) -> Result<i64, Error> {
    let quiz_id = quizzes::create_quiz(pool, "My first quiz").await?;
    let samples = [
        ("My first question", ["Answer 1", "Answer 2"]),
        ("My second question", ["Answer 1", "Answer 2"]),
    ];
    for (text, choices) in samples {
        let question_id = questions::create_question(pool, quiz_id, text).await?;
        let mut answer_ids = Vec::with_capacity(choices.len());
        for choice in choices {
            answer_ids.push(answers::create_answer(pool, question_id, choice).await?);
        }
        questions::update_question(pool, question_id, text, answer_ids.first().copied()).await?;
    }
    tracing::info!(quiz_id, "Seeded sample quiz");
    Ok(quiz_id)
}
