use axum::extract::{Extension, Json};

use crate::entities::{Place, Trip};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn suggestions(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let places = api.location_suggestions().await?;

    Ok(places.into())
}

pub async fn random_trip(Extension(api): Extension<DynAPI>) -> Result<Json<Trip>, Error> {
    let trip = api.random_trip().await?;

    Ok(trip.into())
}
