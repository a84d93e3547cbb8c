pub mod answers;
pub mod questions;
pub mod quizzes;

use sqlx::sqlite::SqliteQueryResult;

// zero affected rows means the addressed row does not exist
fn expect_affected(result: SqliteQueryResult) -> sqlx::Result<()> {
    if result.rows_affected() == 0 {
        Err(sqlx::Error::RowNotFound)
    } else {
        Ok(())
    }
}
