use super::{Engine, PRICE_JITTER};

use async_trait::async_trait;

use crate::{
    api::BookingAPI,
    entities::{Booking, Platform, MIN_PRICE},
    error::{invalid_input_error_with, Error},
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn book_ride(
        &self,
        platform: Platform,
        vehicle_type: String,
        price: u32,
    ) -> Result<Booking, Error> {
        let offer = self.catalog.find(platform, &vehicle_type).ok_or_else(|| {
            invalid_input_error_with(format!("{} does not offer {}", platform, vehicle_type))
        })?;

        let base = i64::from(offer.base_price);
        let lowest = (base - PRICE_JITTER).max(i64::from(MIN_PRICE));
        let highest = base + PRICE_JITTER;

        if !(lowest..=highest).contains(&i64::from(price)) {
            return Err(invalid_input_error_with(format!(
                "price for {} must be between {} and {}",
                offer.label(),
                lowest,
                highest
            )));
        }

        let booking = Booking::new(offer, price);

        tracing::info!("simulated booking {} for {}", booking.id, offer.label());

        Ok(booking)
    }
}
