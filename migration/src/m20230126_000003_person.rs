use sea_orm_migration::{prelude::*, schema::*};

static IDX_PERSON_PLANET_ID: &str = "idx-person-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // planet_id is not a foreign key
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_uniq(Person::Name))
                    .col(integer(Person::Height))
                    .col(integer(Person::Mass))
                    .col(string(Person::HairColor))
                    .col(string(Person::SkinColor))
                    .col(string(Person::EyeColor))
                    .col(string(Person::BirthYear))
                    .col(string(Person::Gender))
                    .col(integer_null(Person::PlanetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSON_PLANET_ID)
                    .table(Person::Table)
                    .col(Person::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PERSON_PLANET_ID)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    Name,
    Height,
    Mass,
    HairColor,
    SkinColor,
    EyeColor,
    BirthYear,
    Gender,
    PlanetId,
}
