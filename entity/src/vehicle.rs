use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: f64,
    pub crew: i32,
    pub passengers: i32,
    pub max_atmospheric_speed: i32,
    pub cargo_capacity: i64,
    pub consumables: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
