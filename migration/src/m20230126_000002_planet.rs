use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_uniq(Planet::Name))
                    .col(integer(Planet::Diameter))
                    .col(integer(Planet::RotationPeriod))
                    .col(integer(Planet::OrbitalPeriod))
                    .col(string(Planet::Gravity))
                    .col(big_integer(Planet::Population))
                    .col(string(Planet::Climate))
                    .col(string(Planet::Terrain))
                    .col(integer(Planet::SurfaceWater))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Gravity,
    Population,
    Climate,
    Terrain,
    SurfaceWater,
}
