//! Declarative test builder.
//!
//! Configure the schema and seed records up front, everything queued is executed
//! during the final `build()` call.

use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    DbBackend, EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods chain and are finalized with `build()`, returning a [`TestContext`].
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    planets: Vec<String>,
    people: Vec<String>,
    vehicles: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            people: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Creates user, planet, person, vehicle and favorite along with the composite
    /// unique index on favorite.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Planet).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD) once built.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a person without a homeworld once built.
    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    pub fn with_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Creates database tables (all tables if requested, then custom tables)
    /// 2. Inserts fixtures (users, planets, people, vehicles)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHash)` - Hashing a user fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Vehicle),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_statements(all_tables).await?;

        if self.include_all_tables {
            let favorite_unique = Index::create()
                .name("idx-favorite-user_id-kind-target_id")
                .table(entity::prelude::Favorite)
                .col(entity::favorite::Column::UserId)
                .col(entity::favorite::Column::Kind)
                .col(entity::favorite::Column::TargetId)
                .unique()
                .to_owned();

            setup.with_statements(vec![favorite_unique]).await?;
        }

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for name in self.planets {
            setup.catalogue().insert_mock_planet(&name).await?;
        }

        for name in self.people {
            setup.catalogue().insert_mock_person(&name, None).await?;
        }

        for name in self.vehicles {
            setup.catalogue().insert_mock_vehicle(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
