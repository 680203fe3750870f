use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Booking, Platform};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    pub platform: Platform,
    pub vehicle_type: String,
    pub price: u32,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Booking>, Error> {
    let booking = api
        .book_ride(params.platform, params.vehicle_type, params.price)
        .await?;

    Ok(booking.into())
}
