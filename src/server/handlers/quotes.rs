use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{describe_vehicle, Comparison, RideOffer, Trip};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CompareParams {
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub destination: String,
}

#[derive(Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub offer: RideOffer,
    pub description: String,
}

pub async fn compare(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CompareParams>,
) -> Result<Json<Comparison>, Error> {
    let trip = Trip::new(&params.pickup, &params.destination);
    let comparison = api.compare_rides(trip).await?;

    Ok(comparison.into())
}

pub async fn catalog(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<CatalogEntry>>, Error> {
    let entries = api
        .list_offers()
        .await?
        .into_iter()
        .map(|offer| CatalogEntry {
            description: describe_vehicle(&offer.vehicle_type).into(),
            offer,
        })
        .collect::<Vec<_>>();

    Ok(entries.into())
}
