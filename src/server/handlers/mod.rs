pub mod bookings;
pub mod locations;
pub mod quotes;
pub mod vehicles;
