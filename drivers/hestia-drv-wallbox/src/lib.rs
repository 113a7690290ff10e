//! Hestia integration for the Wallbox EV charger portal.
//!
//! The portal is polled by an external task at the configured
//! cadence; every poll hands the resulting field map to the
//! [`coordinator::Coordinator`]. This crate maps each known field
//! onto a typed sensor entity carrying the portal's display metadata,
//! rounding numeric values where the field calls for it.

use tracing::info;

pub mod config;
pub mod coordinator;
pub mod sensor;

use crate::{
    config::Params, coordinator::Coordinator, sensor::WallboxSensor,
};

pub const NAME: &str = "wallbox";

/// Builds one sensor entity for every field in the coordinator's
/// snapshot that the integration understands. Unknown fields are
/// skipped.
pub fn setup(params: &Params, coordinator: &Coordinator) -> Vec<WallboxSensor> {
    let sensors: Vec<WallboxSensor> = coordinator
        .keys()
        .iter()
        .filter_map(|key| sensor::find_info(key))
        .map(|info| {
            WallboxSensor::new(&params.station, info, coordinator.clone())
        })
        .collect();

    info!("{}: publishing {} sensors", NAME, sensors.len());
    sensors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::DataMap;
    use hestia_api::{device, sensor::SensorEntity};

    #[test]
    fn test_setup_filters_unknown_fields() {
        let co = Coordinator::new();

        co.update(DataMap::from([
            (
                String::from("charging_power"),
                device::Value::Flt(7.2),
            ),
            (String::from("cost"), device::Value::Flt(1.25)),
            (
                String::from("serial_number"),
                device::Value::Str(String::from("WB-1")),
            ),
        ]));

        let params = Params {
            station: String::from("Garage"),
            interval: 30,
        };

        let mut names: Vec<String> = setup(&params, &co)
            .iter()
            .map(|s| String::from(s.name()))
            .collect();

        names.sort();

        assert_eq!(names, vec!["Garage Charging Power", "Garage Cost"]);
    }

    #[test]
    fn test_setup_with_empty_snapshot() {
        let co = Coordinator::new();
        let params = Params {
            station: String::from("Garage"),
            interval: 30,
        };

        assert!(setup(&params, &co).is_empty());
    }
}
