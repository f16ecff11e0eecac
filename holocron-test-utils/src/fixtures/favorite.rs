use chrono::Utc;
use entity::favorite::FavoriteKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row as-is, the target is not required to exist
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                kind: ActiveValue::Set(kind),
                target_id: ActiveValue::Set(target_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
