//! Thin sensor-entity support.
//!
//! Sensors are read-only: an integration publishes each hardware or
//! portal field as an entity carrying static display metadata and a
//! current value. How the value is obtained (polling, push, a cached
//! snapshot) is the integration's business; this module only defines
//! the surface clients read.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::types::device;

/// Broad classification of what a sensor measures. Clients use it to
/// pick display formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Battery,
    Current,
    Energy,
    Power,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Class::Battery => write!(f, "battery"),
            Class::Current => write!(f, "current"),
            Class::Energy => write!(f, "energy"),
            Class::Power => write!(f, "power"),
        }
    }
}

/// Static display metadata for one sensor field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Description {
    /// Field key in the source data.
    pub key: &'static str,

    /// Human-readable name of the field.
    pub name: &'static str,

    pub device_class: Option<Class>,

    /// Engineering units of the value, if any.
    pub units: Option<&'static str>,

    /// Suggested frontend icon.
    pub icon: Option<&'static str>,
}

/// Interface implemented by every sensor entity.
pub trait SensorEntity {
    /// Full display name of this sensor.
    fn name(&self) -> &str;

    /// The static metadata describing the underlying field.
    fn description(&self) -> &Description;

    /// Current value. `None` when the source hasn't reported one or
    /// the reported value can't be represented.
    fn native_value(&self) -> Option<device::Value>;

    /// When the data behind the current value was obtained.
    fn last_updated(&self) -> Option<DateTime<Utc>>;

    /// The current value paired with its source timestamp.
    fn reading(&self) -> Option<device::Reading> {
        match (self.native_value(), self.last_updated()) {
            (Some(value), Some(ts)) => Some(device::Reading { ts, value }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedSensor {
        value: Option<device::Value>,
        ts: Option<DateTime<Utc>>,
    }

    const DESCRIPTION: Description = Description {
        key: "charge",
        name: "Charge",
        device_class: Some(Class::Battery),
        units: Some("%"),
        icon: None,
    };

    impl SensorEntity for FixedSensor {
        fn name(&self) -> &str {
            "Test Charge"
        }

        fn description(&self) -> &Description {
            &DESCRIPTION
        }

        fn native_value(&self) -> Option<device::Value> {
            self.value.clone()
        }

        fn last_updated(&self) -> Option<DateTime<Utc>> {
            self.ts
        }
    }

    #[test]
    fn test_class_display() {
        assert_eq!(Class::Battery.to_string(), "battery");
        assert_eq!(Class::Current.to_string(), "current");
        assert_eq!(Class::Energy.to_string(), "energy");
        assert_eq!(Class::Power.to_string(), "power");
    }

    #[test]
    fn test_reading() {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let sensor = FixedSensor {
            value: Some(device::Value::Flt(87.5)),
            ts: Some(ts),
        };

        assert_eq!(
            sensor.reading(),
            Some(device::Reading {
                ts,
                value: device::Value::Flt(87.5)
            })
        );

        // Without a value or a timestamp there is no reading.

        let sensor = FixedSensor {
            value: None,
            ts: Some(ts),
        };

        assert_eq!(sensor.reading(), None);

        let sensor = FixedSensor {
            value: Some(device::Value::Int(1)),
            ts: None,
        };

        assert_eq!(sensor.reading(), None);
    }
}
