use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{db::PersonModel, input::PersonFields};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: PersonFields) -> Result<PersonModel, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(fields.name),
            height: ActiveValue::Set(fields.height),
            mass: ActiveValue::Set(fields.mass),
            hair_color: ActiveValue::Set(fields.hair_color),
            skin_color: ActiveValue::Set(fields.skin_color),
            eye_color: ActiveValue::Set(fields.eye_color),
            birth_year: ActiveValue::Set(fields.birth_year),
            gender: ActiveValue::Set(fields.gender),
            planet_id: ActiveValue::Set(fields.planet_id),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Finds the person named `name`, ignoring `exclude_id` when provided
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<PersonModel>, DbErr> {
        let mut query =
            entity::prelude::Person::find().filter(entity::person::Column::Name.eq(name));

        if let Some(person_id) = exclude_id {
            query = query.filter(entity::person::Column::Id.ne(person_id));
        }

        query.one(self.db).await
    }

    pub async fn update(
        &self,
        person: PersonModel,
        fields: PersonFields,
    ) -> Result<PersonModel, DbErr> {
        let mut person_am = person.into_active_model();
        person_am.name = ActiveValue::Set(fields.name);
        person_am.height = ActiveValue::Set(fields.height);
        person_am.mass = ActiveValue::Set(fields.mass);
        person_am.hair_color = ActiveValue::Set(fields.hair_color);
        person_am.skin_color = ActiveValue::Set(fields.skin_color);
        person_am.eye_color = ActiveValue::Set(fields.eye_color);
        person_am.birth_year = ActiveValue::Set(fields.birth_year);
        person_am.gender = ActiveValue::Set(fields.gender);
        person_am.planet_id = ActiveValue::Set(fields.planet_id);

        person_am.update(self.db).await
    }

    pub async fn delete(&self, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Person::delete_by_id(person_id)
            .exec(self.db)
            .await
    }
}
