mod booking;
mod catalog;
mod location;
mod offer;
mod quote;
mod vehicle;

pub use booking::Booking;
pub use catalog::Catalog;
pub use location::{Place, Trip, LOCATION_SUGGESTIONS};
pub use offer::{Platform, RideOffer};
pub use quote::{Comparison, Quote, MIN_ETA, MIN_PRICE};
pub use vehicle::{describe_vehicle, VehicleDescription};
