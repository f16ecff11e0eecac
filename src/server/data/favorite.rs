use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{model::favorite::FavoriteKind, server::model::db::FavoriteModel};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite
    ///
    /// Fails with a unique constraint violation if the `(user_id, kind, target_id)`
    /// triple is already stored.
    pub async fn create(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.into()),
            target_id: ActiveValue::Set(target_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(entity::favorite::FavoriteKind::from(kind)))
            .filter(entity::favorite::Column::TargetId.eq(target_id))
            .one(self.db)
            .await
    }

    /// Deletes a favorite by its ID
    ///
    /// Returns OK regardless of the favorite existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every favorite pointing at the given catalogue record
    pub async fn delete_by_target(
        &self,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::Kind.eq(entity::favorite::FavoriteKind::from(kind)))
            .filter(entity::favorite::Column::TargetId.eq(target_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
