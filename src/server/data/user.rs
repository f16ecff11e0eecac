use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{db::UserModel, input::UserFields};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already hashed password
    pub async fn create(
        &self,
        fields: UserFields,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(fields.username),
            email: ActiveValue::Set(fields.email),
            password_hash: ActiveValue::Set(password_hash),
            first_name: ActiveValue::Set(fields.first_name),
            last_name: ActiveValue::Set(fields.last_name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds any user other than `exclude_id` holding `username` or `email`
    pub async fn find_conflicting(
        &self,
        username: &str,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<UserModel>, DbErr> {
        let mut condition = Condition::all().add(
            Condition::any()
                .add(entity::user::Column::Username.eq(username))
                .add(entity::user::Column::Email.eq(email)),
        );

        if let Some(user_id) = exclude_id {
            condition = condition.add(entity::user::Column::Id.ne(user_id));
        }

        entity::prelude::User::find()
            .filter(condition)
            .one(self.db)
            .await
    }

    /// Replaces every mutable field of `user`
    pub async fn update(
        &self,
        user: UserModel,
        fields: UserFields,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.username = ActiveValue::Set(fields.username);
        user_am.email = ActiveValue::Set(fields.email);
        user_am.password_hash = ActiveValue::Set(password_hash);
        user_am.first_name = ActiveValue::Set(fields.first_name);
        user_am.last_name = ActiveValue::Set(fields.last_name);

        user_am.update(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
