pub use sea_orm_migration::prelude::*;

mod m20230126_000001_user;
mod m20230126_000002_planet;
mod m20230126_000003_person;
mod m20230126_000004_vehicle;
mod m20230126_000005_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230126_000001_user::Migration),
            Box::new(m20230126_000002_planet::Migration),
            Box::new(m20230126_000003_person::Migration),
            Box::new(m20230126_000004_vehicle::Migration),
            Box::new(m20230126_000005_favorite::Migration),
        ]
    }
}
