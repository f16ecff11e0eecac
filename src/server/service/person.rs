use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{catalogue::PersonDto, favorite::FavoriteKind},
    server::{
        data::{favorite::FavoriteRepository, person::PersonRepository},
        error::{resource::ResourceError, Error},
        model::{input::PersonFields, resource::Resource},
        service::{conflict_on_unique, not_found},
    },
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    pub async fn get(&self, person_id: i32) -> Result<PersonDto, Error> {
        PersonRepository::new(self.db)
            .get_by_id(person_id)
            .await?
            .map(PersonDto::from)
            .ok_or_else(|| not_found(Resource::Person, person_id))
    }

    /// Creates a person unless one with the same name exists
    ///
    /// `planet_id` is stored without checking that the planet exists.
    pub async fn create(&self, fields: PersonFields) -> Result<PersonDto, Error> {
        let txn = self.db.begin().await?;
        let person_repo = PersonRepository::new(&txn);

        if person_repo.find_by_name(&fields.name, None).await?.is_some() {
            return Err(ResourceError::Conflict(Resource::Person).into());
        }

        let person = person_repo
            .create(fields)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::Person))?;

        txn.commit().await?;

        Ok(person.into())
    }

    pub async fn update(&self, person_id: i32, fields: PersonFields) -> Result<PersonDto, Error> {
        let txn = self.db.begin().await?;
        let person_repo = PersonRepository::new(&txn);

        let Some(person) = person_repo.get_by_id(person_id).await? else {
            return Err(not_found(Resource::Person, person_id));
        };

        if person_repo
            .find_by_name(&fields.name, Some(person_id))
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(Resource::Person).into());
        }

        let person = person_repo
            .update(person, fields)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::Person))?;

        txn.commit().await?;

        Ok(person.into())
    }

    /// Deletes a person and every `people` favorite pointing at them
    pub async fn delete(&self, person_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_target(FavoriteKind::People, person_id)
            .await?;
        let result = PersonRepository::new(&txn).delete(person_id).await?;

        if result.rows_affected == 0 {
            return Err(not_found(Resource::Person, person_id));
        }

        txn.commit().await?;

        Ok(())
    }
}
