use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{Platform, RideOffer};
use crate::error::{empty_catalog_error, invalid_input_error_with, Error};

/// Read-only list of ride offers, in display order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<RideOffer>", into = "Vec<RideOffer>")]
pub struct Catalog {
    offers: Vec<RideOffer>,
}

impl Catalog {
    pub fn new(offers: Vec<RideOffer>) -> Result<Self, Error> {
        let mut seen = HashSet::new();

        for offer in offers.iter() {
            if offer.base_price == 0 || offer.base_eta == 0 {
                return Err(invalid_input_error_with(format!(
                    "{} must have a positive price and eta",
                    offer.label()
                )));
            }

            if !seen.insert((offer.platform, offer.vehicle_type.as_str())) {
                return Err(invalid_input_error_with(format!(
                    "duplicate vehicle type {}",
                    offer.label()
                )));
            }
        }

        Ok(Self { offers })
    }

    pub fn sample() -> Self {
        let offers = vec![
            RideOffer::new(Platform::Ola, "Auto", 95, 8, "#FDB515"),
            RideOffer::new(Platform::Ola, "Mini", 145, 6, "#FDB515"),
            RideOffer::new(Platform::Ola, "Prime", 185, 5, "#FDB515"),
            RideOffer::new(Platform::Uber, "UberGo", 155, 7, "#000000"),
            RideOffer::new(Platform::Uber, "UberX", 195, 5, "#000000"),
            RideOffer::new(Platform::Uber, "Premier", 285, 4, "#000000"),
            RideOffer::new(Platform::Rapido, "Bike", 45, 12, "#FFD700"),
            RideOffer::new(Platform::Rapido, "Auto", 85, 10, "#FFD700"),
            RideOffer::new(Platform::Rapido, "Cab", 165, 8, "#FFD700"),
        ];

        Self { offers }
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;

        if catalog.is_empty() {
            return Err(empty_catalog_error());
        }

        tracing::info!("loaded {} offers from {:?}", catalog.len(), path);

        Ok(catalog)
    }

    pub fn offers(&self) -> &[RideOffer] {
        &self.offers
    }

    pub fn find(&self, platform: Platform, vehicle_type: &str) -> Option<&RideOffer> {
        self.offers
            .iter()
            .find(|offer| offer.platform == platform && offer.vehicle_type == vehicle_type)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl TryFrom<Vec<RideOffer>> for Catalog {
    type Error = Error;

    fn try_from(offers: Vec<RideOffer>) -> Result<Self, Error> {
        Self::new(offers)
    }
}

impl From<Catalog> for Vec<RideOffer> {
    fn from(catalog: Catalog) -> Self {
        catalog.offers
    }
}
