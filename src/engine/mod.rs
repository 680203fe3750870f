mod booking_api;
mod compare;
mod jitter;
mod location_api;
mod quote_api;
mod vehicle_api;

pub use compare::compare;
pub use jitter::{FixedJitter, JitterSource, RandomJitter, ETA_JITTER, PRICE_JITTER};

use crate::{
    api::API,
    config::Config,
    entities::{Catalog, Comparison},
    error::Error,
};

#[derive(Debug)]
pub struct Engine {
    catalog: Catalog,
    config: Config,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip(catalog), fields(offers = catalog.len()))]
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self { catalog, config }
    }

    #[tracing::instrument(name = "Engine::from_config")]
    pub fn from_config(config: Config) -> Result<Self, Error> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::sample(),
        };

        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one comparison over the engine's catalog. Never suspends.
    pub fn compare<S: JitterSource + ?Sized>(&self, source: &mut S) -> Result<Comparison, Error> {
        compare(self.catalog.offers(), source)
    }
}

impl API for Engine {}
