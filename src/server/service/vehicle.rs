use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{catalogue::VehicleDto, favorite::FavoriteKind},
    server::{
        data::{favorite::FavoriteRepository, vehicle::VehicleRepository},
        error::{resource::ResourceError, Error},
        model::{input::VehicleFields, resource::Resource},
        service::{conflict_on_unique, not_found},
    },
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .map(VehicleDto::from)
            .ok_or_else(|| not_found(Resource::Vehicle, vehicle_id))
    }

    pub async fn create(&self, fields: VehicleFields) -> Result<VehicleDto, Error> {
        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        if vehicle_repo.find_by_name(&fields.name, None).await?.is_some() {
            return Err(ResourceError::Conflict(Resource::Vehicle).into());
        }

        let vehicle = vehicle_repo
            .create(fields)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::Vehicle))?;

        txn.commit().await?;

        Ok(vehicle.into())
    }

    pub async fn update(
        &self,
        vehicle_id: i32,
        fields: VehicleFields,
    ) -> Result<VehicleDto, Error> {
        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        let Some(vehicle) = vehicle_repo.get_by_id(vehicle_id).await? else {
            return Err(not_found(Resource::Vehicle, vehicle_id));
        };

        if vehicle_repo
            .find_by_name(&fields.name, Some(vehicle_id))
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(Resource::Vehicle).into());
        }

        let vehicle = vehicle_repo
            .update(vehicle, fields)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::Vehicle))?;

        txn.commit().await?;

        Ok(vehicle.into())
    }

    pub async fn delete(&self, vehicle_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_target(FavoriteKind::Vehicle, vehicle_id)
            .await?;
        let result = VehicleRepository::new(&txn).delete(vehicle_id).await?;

        if result.rows_affected == 0 {
            return Err(not_found(Resource::Vehicle, vehicle_id));
        }

        txn.commit().await?;

        Ok(())
    }
}
