use hestia_api::Error;
use serde::Deserialize;
use std::convert::TryFrom;

/// Represents how configuration information is given to the driver.
/// A `DriverConfig` is a map with `String` keys and `toml::Value`
/// values, taken from the driver's table in the configuration file.
pub type DriverConfig = toml::value::Table;

const DEFAULT_INTERVAL: u64 = 30;

fn default_interval() -> u64 {
    DEFAULT_INTERVAL
}

/// Validated driver parameters.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Params {
    /// Display name of the charger. Sensor names are prefixed with
    /// it.
    pub station: String,

    /// Poll cadence, in seconds, handed to the external poller.
    #[serde(default = "default_interval")]
    pub interval: u64,
}

impl TryFrom<DriverConfig> for Params {
    type Error = Error;

    fn try_from(cfg: DriverConfig) -> Result<Self, Self::Error> {
        let params: Params = toml::Value::Table(cfg)
            .try_into()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        // The interval is clamped to at least one second.

        Ok(Params {
            interval: std::cmp::max(params.interval, 1),
            ..params
        })
    }
}
