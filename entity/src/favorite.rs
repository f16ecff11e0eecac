use sea_orm::entity::prelude::*;

/// Which catalogue table `target_id` points into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "people")]
    People,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
}

/// A user's bookmark of exactly one planet, person or vehicle.
///
/// `(user_id, kind, target_id)` is unique, see the `favorite` migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub target_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
