use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_uniq(Vehicle::Name))
                    .col(string(Vehicle::Model))
                    .col(string(Vehicle::VehicleClass))
                    .col(string(Vehicle::Manufacturer))
                    .col(big_integer(Vehicle::CostInCredits))
                    .col(double(Vehicle::Length))
                    .col(integer(Vehicle::Crew))
                    .col(integer(Vehicle::Passengers))
                    .col(integer(Vehicle::MaxAtmosphericSpeed))
                    .col(big_integer(Vehicle::CargoCapacity))
                    .col(string(Vehicle::Consumables))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    VehicleClass,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    MaxAtmosphericSpeed,
    CargoCapacity,
    Consumables,
}
