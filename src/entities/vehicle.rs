use serde::{Deserialize, Serialize};

const DEFAULT_DESCRIPTION: &str = "Vehicle";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDescription {
    pub vehicle_type: String,
    pub description: String,
}

impl VehicleDescription {
    pub fn new(vehicle_type: &str) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            description: describe_vehicle(vehicle_type).into(),
        }
    }
}

/// Human-readable description of a vehicle type label. Unknown labels map to "Vehicle".
pub fn describe_vehicle(vehicle_type: &str) -> &'static str {
    match vehicle_type {
        "Auto" => "Auto-rickshaw",
        "Mini" => "Compact car",
        "Prime" => "Sedan car",
        "UberGo" => "Hatchback",
        "UberX" => "Sedan",
        "Premier" => "Premium sedan",
        "Bike" => "Motorcycle",
        "Cab" => "Standard cab",
        _ => DEFAULT_DESCRIPTION,
    }
}
