use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Platform, RideOffer};

/// Simulated booking. Nothing is sent to the platform; the messages are what the
/// user would be shown before being handed off to the platform's app.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub platform: Platform,
    pub vehicle_type: String,
    pub price: u32,
    pub confirmation: String,
    pub redirect: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(offer: &RideOffer, price: u32) -> Self {
        let platform = offer.platform;

        let confirmation = format!(
            "Book {} for ₹{}?\n\nYou will be redirected to {}'s app to complete your booking.",
            offer.label(),
            price,
            platform
        );
        let redirect = format!(
            "Redirecting to {}...\n\nYou will be taken to {}'s app with your trip details pre-filled.",
            platform, platform
        );

        Self {
            id: Uuid::new_v4(),
            platform,
            vehicle_type: offer.vehicle_type.clone(),
            price,
            confirmation,
            redirect,
            created_at: Utc::now(),
        }
    }
}
