use super::Engine;

use async_trait::async_trait;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    api::LocationAPI,
    entities::{Place, Trip, LOCATION_SUGGESTIONS},
    error::{unexpected_error, Error},
};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn location_suggestions(&self) -> Result<Vec<Place>, Error> {
        Ok(LOCATION_SUGGESTIONS.iter().map(|d| Place::new(d)).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn random_trip(&self) -> Result<Trip, Error> {
        let mut rng = StdRng::from_entropy();

        let mut picks = LOCATION_SUGGESTIONS.choose_multiple(&mut rng, 2);
        let pickup = picks.next().ok_or_else(unexpected_error)?;
        let destination = picks.next().ok_or_else(unexpected_error)?;

        Ok(Trip::new(pickup, destination))
    }
}
