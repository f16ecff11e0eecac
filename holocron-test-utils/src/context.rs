//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Owns an in-memory SQLite database, usable directly through `db` or through the
//! fixture helpers (`user()`, `catalogue()`, `favorite()`).

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, StatementBuilder};

use crate::error::TestError;

/// Test environment produced by `TestBuilder::build()`
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// let user = test.user().insert_user("luke").await?;
/// let planet = test.catalogue().insert_mock_planet("Tatooine").await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Connects to a fresh in-memory SQLite database
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Executes schema statements in order
    ///
    /// # Returns
    /// - `Ok(())` - All statements executed
    /// - `Err(TestError::DbErr)` - A statement failed, remaining ones are skipped
    pub(crate) async fn with_statements<S: StatementBuilder>(
        &self,
        stmts: Vec<S>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
