use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Ola,
    Uber,
    Rapido,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ola => "Ola",
            Self::Uber => "Uber",
            Self::Rapido => "Rapido",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single catalog entry: one vehicle class offered by one platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideOffer {
    pub platform: Platform,
    pub vehicle_type: String,
    pub base_price: u32,
    pub base_eta: u32,
    pub color: String,
}

impl RideOffer {
    pub fn new(
        platform: Platform,
        vehicle_type: &str,
        base_price: u32,
        base_eta: u32,
        color: &str,
    ) -> Self {
        Self {
            platform,
            vehicle_type: vehicle_type.into(),
            base_price,
            base_eta,
            color: color.into(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.platform, self.vehicle_type)
    }
}
