use async_trait::async_trait;

use crate::entities::{Booking, Comparison, Place, Platform, RideOffer, Trip, VehicleDescription};
use crate::error::Error;

#[async_trait]
pub trait QuoteAPI {
    async fn compare_rides(&self, trip: Trip) -> Result<Comparison, Error>;
    async fn list_offers(&self) -> Result<Vec<RideOffer>, Error>;
}

#[async_trait]
pub trait VehicleAPI {
    async fn describe_vehicle(&self, vehicle_type: String) -> Result<VehicleDescription, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn book_ride(
        &self,
        platform: Platform,
        vehicle_type: String,
        price: u32,
    ) -> Result<Booking, Error>;
}

#[async_trait]
pub trait LocationAPI {
    async fn location_suggestions(&self) -> Result<Vec<Place>, Error>;
    async fn random_trip(&self) -> Result<Trip, Error>;
}

pub trait API: QuoteAPI + VehicleAPI + BookingAPI + LocationAPI {}
