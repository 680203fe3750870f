use super::{Engine, RandomJitter};

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    api::QuoteAPI,
    entities::{Comparison, RideOffer, Trip},
    error::Error,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compare_rides(&self, trip: Trip) -> Result<Comparison, Error> {
        trip.validate()?;

        if !self.config.compare_delay.is_zero() {
            tokio::time::sleep(self.config.compare_delay).await;
        }

        let mut source = RandomJitter::new(StdRng::from_entropy());
        let comparison = self.compare(&mut source)?;

        tracing::info!(
            "comparison {} from {:?} to {:?}: cheapest {}, fastest {}",
            comparison.id,
            trip.pickup,
            trip.destination,
            comparison.cheapest_summary(),
            comparison.fastest_summary()
        );

        Ok(comparison)
    }

    #[tracing::instrument(skip(self))]
    async fn list_offers(&self) -> Result<Vec<RideOffer>, Error> {
        Ok(self.catalog.offers().to_vec())
    }
}
