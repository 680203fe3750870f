use super::Engine;

use async_trait::async_trait;

use crate::{api::VehicleAPI, entities::VehicleDescription, error::Error};

#[async_trait]
impl VehicleAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn describe_vehicle(&self, vehicle_type: String) -> Result<VehicleDescription, Error> {
        Ok(VehicleDescription::new(&vehicle_type))
    }
}
