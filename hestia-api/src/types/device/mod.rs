//! This module defines types related to devices.

use chrono::{DateTime, Utc};

mod value;
pub use value::Value;

/// A device value paired with the time the underlying data was
/// obtained.
#[derive(Debug, PartialEq, Clone)]
pub struct Reading {
    pub ts: DateTime<Utc>,
    pub value: Value,
}
