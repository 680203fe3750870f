use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error_with, Error};

pub static LOCATION_SUGGESTIONS: [&str; 10] = [
    "Connaught Place, Delhi",
    "Airport Terminal 3",
    "India Gate, Delhi",
    "Khan Market, Delhi",
    "Cyber Hub, Gurgaon",
    "Select City Walk Mall",
    "DLF Mall of India",
    "Red Fort, Delhi",
    "Lotus Temple, Delhi",
    "Hauz Khas Village",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub description: String,
}

impl Place {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Pickup and destination text for a comparison. Display only, never used for ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub pickup: String,
    pub destination: String,
}

impl Trip {
    pub fn new(pickup: &str, destination: &str) -> Self {
        Self {
            pickup: pickup.into(),
            destination: destination.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.pickup.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(invalid_input_error_with(
                "Please enter both pickup and destination locations",
            ));
        }

        Ok(())
    }
}

impl Default for Trip {
    fn default() -> Self {
        Self::new(LOCATION_SUGGESTIONS[0], LOCATION_SUGGESTIONS[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(Trip::new("  ", "Airport Terminal 3").validate().is_err());
        assert!(Trip::new("Red Fort, Delhi", "").validate().is_err());

        let err = Trip::new("", "\t").validate().unwrap_err();
        assert_eq!(err.code, 101);
        assert_eq!(
            err.message,
            "Please enter both pickup and destination locations"
        );
    }

    #[test]
    fn default_trip_is_valid() {
        let trip = Trip::default();

        assert_eq!(trip.pickup, "Connaught Place, Delhi");
        assert_eq!(trip.destination, "Airport Terminal 3");
        assert!(trip.validate().is_ok());
    }
}
