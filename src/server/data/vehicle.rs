use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{db::VehicleModel, input::VehicleFields};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: VehicleFields) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(fields.name),
            model: ActiveValue::Set(fields.model),
            vehicle_class: ActiveValue::Set(fields.vehicle_class),
            manufacturer: ActiveValue::Set(fields.manufacturer),
            cost_in_credits: ActiveValue::Set(fields.cost_in_credits),
            length: ActiveValue::Set(fields.length),
            crew: ActiveValue::Set(fields.crew),
            passengers: ActiveValue::Set(fields.passengers),
            max_atmospheric_speed: ActiveValue::Set(fields.max_atmospheric_speed),
            cargo_capacity: ActiveValue::Set(fields.cargo_capacity),
            consumables: ActiveValue::Set(fields.consumables),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Finds the vehicle named `name`, ignoring `exclude_id` when provided
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<VehicleModel>, DbErr> {
        let mut query =
            entity::prelude::Vehicle::find().filter(entity::vehicle::Column::Name.eq(name));

        if let Some(vehicle_id) = exclude_id {
            query = query.filter(entity::vehicle::Column::Id.ne(vehicle_id));
        }

        query.one(self.db).await
    }

    pub async fn update(
        &self,
        vehicle: VehicleModel,
        fields: VehicleFields,
    ) -> Result<VehicleModel, DbErr> {
        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.name = ActiveValue::Set(fields.name);
        vehicle_am.model = ActiveValue::Set(fields.model);
        vehicle_am.vehicle_class = ActiveValue::Set(fields.vehicle_class);
        vehicle_am.manufacturer = ActiveValue::Set(fields.manufacturer);
        vehicle_am.cost_in_credits = ActiveValue::Set(fields.cost_in_credits);
        vehicle_am.length = ActiveValue::Set(fields.length);
        vehicle_am.crew = ActiveValue::Set(fields.crew);
        vehicle_am.passengers = ActiveValue::Set(fields.passengers);
        vehicle_am.max_atmospheric_speed = ActiveValue::Set(fields.max_atmospheric_speed);
        vehicle_am.cargo_capacity = ActiveValue::Set(fields.cargo_capacity);
        vehicle_am.consumables = ActiveValue::Set(fields.consumables);

        vehicle_am.update(self.db).await
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
