//! This crate defines the traits and types shared by Hestia
//! integrations.
//!
//! An integration brings one family of devices into the system: it
//! implements [`cover::CoverEntity`] for hardware that opens and
//! closes over an opening, and exposes polled, read-only hardware
//! fields through [`sensor::SensorEntity`].

mod types;

// Pull types down to the `hestia-api` namespace.

pub use types::device;
pub use types::Error;

/// A specialization of `std::result::Result<>` where the error value
/// is `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;

pub mod cover;
pub mod sensor;
