//! Sensor entities for the Wallbox portal fields.

use chrono::{DateTime, Utc};
use hestia_api::{
    device,
    sensor::{self, Class, SensorEntity},
};
use tracing::debug;

use crate::coordinator::Coordinator;

/// Display metadata for one portal field, plus the rounding applied
/// to its cached value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorInfo {
    pub description: sensor::Description,

    /// Decimal places to round a numeric value to. `None` publishes
    /// the cached value verbatim.
    pub precision: Option<u32>,
}

/// Every portal field this integration understands. Fields the
/// portal reports that aren't listed here are not published.
pub const SENSOR_TYPES: &[SensorInfo] = &[
    SensorInfo {
        description: sensor::Description {
            key: "charging_power",
            name: "Charging Power",
            device_class: Some(Class::Power),
            units: Some("kW"),
            icon: None,
        },
        precision: Some(2),
    },
    SensorInfo {
        description: sensor::Description {
            key: "max_available_power",
            name: "Max Available Power",
            device_class: Some(Class::Current),
            units: Some("A"),
            icon: None,
        },
        precision: Some(0),
    },
    SensorInfo {
        description: sensor::Description {
            key: "charging_speed",
            name: "Charging Speed",
            device_class: None,
            units: None,
            icon: Some("mdi:speedometer"),
        },
        precision: Some(0),
    },
    SensorInfo {
        description: sensor::Description {
            key: "added_range",
            name: "Added Range",
            device_class: None,
            units: Some("km"),
            icon: Some("mdi:map-marker-distance"),
        },
        precision: Some(0),
    },
    SensorInfo {
        description: sensor::Description {
            key: "added_energy",
            name: "Added Energy",
            device_class: Some(Class::Energy),
            units: Some("kWh"),
            icon: None,
        },
        precision: Some(2),
    },
    SensorInfo {
        description: sensor::Description {
            key: "cost",
            name: "Cost",
            device_class: None,
            units: None,
            icon: Some("mdi:ev-station"),
        },
        precision: None,
    },
    SensorInfo {
        description: sensor::Description {
            key: "state_of_charge",
            name: "State of Charge",
            device_class: Some(Class::Battery),
            units: Some("%"),
            icon: None,
        },
        precision: None,
    },
    SensorInfo {
        description: sensor::Description {
            key: "current_mode",
            name: "Current Mode",
            device_class: None,
            units: None,
            icon: Some("mdi:ev-station"),
        },
        precision: None,
    },
    SensorInfo {
        description: sensor::Description {
            key: "depot_price",
            name: "Depot Price",
            device_class: None,
            units: None,
            icon: Some("mdi:ev-station"),
        },
        precision: Some(2),
    },
    SensorInfo {
        description: sensor::Description {
            key: "status_description",
            name: "Status Description",
            device_class: None,
            units: None,
            icon: Some("mdi:ev-station"),
        },
        precision: None,
    },
    SensorInfo {
        description: sensor::Description {
            key: "max_charging_current",
            name: "Max. Charging Current",
            device_class: Some(Class::Current),
            units: Some("A"),
            icon: None,
        },
        precision: None,
    },
];

/// Looks up the table row for a portal field key.
pub fn find_info(key: &str) -> Option<&'static SensorInfo> {
    SENSOR_TYPES.iter().find(|info| info.description.key == key)
}

// Rounds to a fixed number of decimal places.

fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);

    (value * scale).round() / scale
}

/// One published portal field.
pub struct WallboxSensor {
    name: String,
    info: &'static SensorInfo,
    coordinator: Coordinator,
}

impl WallboxSensor {
    pub fn new(
        station: &str,
        info: &'static SensorInfo,
        coordinator: Coordinator,
    ) -> WallboxSensor {
        WallboxSensor {
            name: format!("{} {}", station, info.description.name),
            info,
            coordinator,
        }
    }

    pub fn info(&self) -> &'static SensorInfo {
        self.info
    }
}

impl SensorEntity for WallboxSensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &sensor::Description {
        &self.info.description
    }

    /// The cached portal value for this field. A field with a
    /// precision publishes numeric values rounded to that many
    /// decimals; a cached value that isn't numeric can't be rounded
    /// and is published as unknown rather than an error.
    fn native_value(&self) -> Option<device::Value> {
        let value = self.coordinator.value(self.info.description.key)?;

        let Some(digits) = self.info.precision else {
            return Some(value);
        };

        match value {
            device::Value::Flt(v) => {
                Some(device::Value::Flt(round_to(v, digits)))
            }
            value @ device::Value::Int(_) => Some(value),
            _ => {
                debug!("cannot format {}", &self.name);
                None
            }
        }
    }

    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.coordinator.last_updated()
    }
}
