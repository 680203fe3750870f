use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::RideOffer;

pub const MIN_PRICE: u32 = 30;
pub const MIN_ETA: u32 = 3;

/// A jittered price/eta estimate for one catalog offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(flatten)]
    pub offer: RideOffer,
    pub price: u32,
    pub eta: u32,
}

impl Quote {
    pub fn new(offer: RideOffer, price_delta: i64, eta_delta: i64) -> Self {
        let price = clamp_offset(offer.base_price, price_delta, MIN_PRICE);
        let eta = clamp_offset(offer.base_eta, eta_delta, MIN_ETA);

        Self { offer, price, eta }
    }

    pub fn label(&self) -> String {
        self.offer.label()
    }
}

fn clamp_offset(base: u32, delta: i64, floor: u32) -> u32 {
    let value = (i64::from(base) + delta).max(i64::from(floor));

    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comparison {
    pub id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub quotes: Vec<Quote>,
    pub cheapest: Quote,
    pub fastest: Quote,
}

impl Comparison {
    pub fn new(quotes: Vec<Quote>, cheapest: Quote, fastest: Quote) -> Self {
        Self {
            id: Uuid::new_v4(),
            quoted_at: Utc::now(),
            quotes,
            cheapest,
            fastest,
        }
    }

    pub fn cheapest_summary(&self) -> String {
        format!("{} - ₹{}", self.cheapest.label(), self.cheapest.price)
    }

    pub fn fastest_summary(&self) -> String {
        format!("{} - {} mins", self.fastest.label(), self.fastest.eta)
    }
}
