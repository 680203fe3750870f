use axum::extract::{Extension, Json, Path};

use crate::entities::VehicleDescription;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn describe(
    Extension(api): Extension<DynAPI>,
    Path(vehicle_type): Path<String>,
) -> Result<Json<VehicleDescription>, Error> {
    let description = api.describe_vehicle(vehicle_type).await?;

    Ok(description.into())
}
