//! Cover device support.
//!
//! A cover is anything that opens and closes over an opening: garage
//! doors, blinds, shades, shutters. An integration implements
//! [`CoverEntity`] for each physical device, overriding the command
//! primitives the hardware actually supports and supplying whichever
//! of the state signals the hardware reports. The composite state and
//! the capability set are derived here so every integration reports
//! them the same way.
//!
//! Command primitives are synchronous and may block on device I/O.
//! Async callers go through the [`CoverCommands`] wrappers, which
//! hand each primitive to the blocking worker pool. Dispatch through
//! [`service::Registry`] additionally gates every call on the
//! entity's capability set.

mod caps;
mod command;
mod state;

pub mod service;

pub use caps::Capabilities;
pub use command::CoverCommands;
pub use state::{State, StateAttributes};

use crate::types::Error;
use crate::Result;

/// Base interface implemented by every cover device.
///
/// Only [`is_closed`](CoverEntity::is_closed) is required. Everything
/// else has a default suitable for a device that reports no motion,
/// no positions, and accepts no commands beyond what its driver
/// overrides.
pub trait CoverEntity: Send + Sync {
    /// Returns `Some(true)` if the cover is closed, `Some(false)` if
    /// it isn't, and `None` if the driver can't tell.
    fn is_closed(&self) -> Option<bool>;

    /// Returns whether the cover is currently opening. Hardware that
    /// doesn't report motion leaves this unimplemented.
    fn is_opening(&self) -> Option<bool> {
        None
    }

    /// Returns whether the cover is currently closing.
    fn is_closing(&self) -> Option<bool> {
        None
    }

    /// Current position of the cover, where 0 means fully closed and
    /// 100 fully open. `None` means the device doesn't report a
    /// position.
    fn current_position(&self) -> Option<u8> {
        None
    }

    /// Current position of the cover tilt, on the same 0 to 100
    /// scale.
    fn current_tilt_position(&self) -> Option<u8> {
        None
    }

    /// Escape hatch for devices whose command set can't be inferred
    /// from their telemetry, e.g. a cover that accepts positioning
    /// commands but never reports a position. When this returns
    /// `Some`, the declared set is used unchanged.
    fn declared_features(&self) -> Option<Capabilities> {
        None
    }

    /// The capability set service dispatch is gated on. Devices
    /// shouldn't override this; an explicit set is declared through
    /// [`declared_features`](CoverEntity::declared_features) instead.
    fn supported_features(&self) -> Capabilities {
        if let Some(declared) = self.declared_features() {
            return declared;
        }

        let mut features =
            Capabilities::OPEN | Capabilities::CLOSE | Capabilities::STOP;

        if self.current_position().is_some() {
            features |= Capabilities::SET_POSITION;
        }

        if self.current_tilt_position().is_some() {
            features |= Capabilities::TILT;
        }

        features
    }

    /// The composite lifecycle state. Recomputed from the underlying
    /// signals on every read; the driver updates those signals
    /// asynchronously, so the result is never cached.
    fn state(&self) -> Option<State> {
        state::derive_state(
            self.is_opening(),
            self.is_closing(),
            self.is_closed(),
        )
    }

    /// The attribute payload published alongside the state. Positions
    /// the device doesn't report are left out.
    fn state_attributes(&self) -> StateAttributes {
        StateAttributes {
            current_position: self.current_position(),
            current_tilt_position: self.current_tilt_position(),
        }
    }

    /// Opens the cover. May block on device I/O; async callers go
    /// through [`CoverCommands::open`].
    fn open_cover(&self) -> Result<()> {
        Err(Error::NotSupported)
    }

    /// Closes the cover.
    fn close_cover(&self) -> Result<()> {
        Err(Error::NotSupported)
    }

    /// Moves the cover to a specific position. Accepted and ignored
    /// by devices that don't support positioning.
    fn set_cover_position(&self, _position: u8) -> Result<()> {
        Ok(())
    }

    /// Stops the cover.
    fn stop_cover(&self) -> Result<()> {
        Ok(())
    }

    /// Opens the cover tilt.
    fn open_cover_tilt(&self) -> Result<()> {
        Ok(())
    }

    /// Closes the cover tilt.
    fn close_cover_tilt(&self) -> Result<()> {
        Ok(())
    }

    /// Moves the cover tilt to a specific position.
    fn set_cover_tilt_position(&self, _tilt_position: u8) -> Result<()> {
        Ok(())
    }

    /// Stops the cover tilt.
    fn stop_cover_tilt(&self) -> Result<()> {
        Ok(())
    }

    /// Opens the cover if it's closed, closes it otherwise. An
    /// unknown closed signal dispatches a close.
    fn toggle(&self) -> Result<()> {
        if self.is_closed() == Some(true) {
            self.open_cover()
        } else {
            self.close_cover()
        }
    }

    /// Opens the tilt when its position reads fully closed, closes it
    /// otherwise. This keys off the tilt position value since covers
    /// report no discrete tilt-closed signal.
    fn toggle_tilt(&self) -> Result<()> {
        if self.current_tilt_position() == Some(0) {
            self.open_cover_tilt()
        } else {
            self.close_cover_tilt()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // A cover that overrides nothing but the required signal.

    struct BareCover;

    impl CoverEntity for BareCover {
        fn is_closed(&self) -> Option<bool> {
            None
        }
    }

    // A cover whose telemetry is set by the test.

    struct TelemetryCover {
        closed: Option<bool>,
        position: Option<u8>,
        tilt_position: Option<u8>,
    }

    impl CoverEntity for TelemetryCover {
        fn is_closed(&self) -> Option<bool> {
            self.closed
        }

        fn current_position(&self) -> Option<u8> {
            self.position
        }

        fn current_tilt_position(&self) -> Option<u8> {
            self.tilt_position
        }
    }

    // A cover that records which primitives were invoked.

    #[derive(Default)]
    struct RecordingCover {
        closed: Option<bool>,
        tilt_position: Option<u8>,
        log: Mutex<Vec<&'static str>>,
    }

    impl RecordingCover {
        fn log(&self) -> Vec<&'static str> {
            self.log.lock().unwrap().clone()
        }
    }

    impl CoverEntity for RecordingCover {
        fn is_closed(&self) -> Option<bool> {
            self.closed
        }

        fn current_tilt_position(&self) -> Option<u8> {
            self.tilt_position
        }

        fn open_cover(&self) -> Result<()> {
            self.log.lock().unwrap().push("open");
            Ok(())
        }

        fn close_cover(&self) -> Result<()> {
            self.log.lock().unwrap().push("close");
            Ok(())
        }

        fn open_cover_tilt(&self) -> Result<()> {
            self.log.lock().unwrap().push("open_tilt");
            Ok(())
        }

        fn close_cover_tilt(&self) -> Result<()> {
            self.log.lock().unwrap().push("close_tilt");
            Ok(())
        }
    }

    #[test]
    fn test_default_primitives() {
        let cover = BareCover;

        // Open and close must fail loudly when the driver didn't
        // supply them. The remaining primitives are silent no-ops.

        assert_eq!(cover.open_cover(), Err(Error::NotSupported));
        assert_eq!(cover.close_cover(), Err(Error::NotSupported));
        assert_eq!(cover.set_cover_position(50), Ok(()));
        assert_eq!(cover.stop_cover(), Ok(()));
        assert_eq!(cover.open_cover_tilt(), Ok(()));
        assert_eq!(cover.close_cover_tilt(), Ok(()));
        assert_eq!(cover.set_cover_tilt_position(50), Ok(()));
        assert_eq!(cover.stop_cover_tilt(), Ok(()));
    }

    #[test]
    fn test_feature_inference() {
        let base =
            Capabilities::OPEN | Capabilities::CLOSE | Capabilities::STOP;

        let cover = TelemetryCover {
            closed: None,
            position: None,
            tilt_position: None,
        };

        assert_eq!(cover.supported_features(), base);

        let cover = TelemetryCover {
            closed: None,
            position: Some(30),
            tilt_position: None,
        };

        assert_eq!(
            cover.supported_features(),
            base | Capabilities::SET_POSITION
        );

        let cover = TelemetryCover {
            closed: None,
            position: None,
            tilt_position: Some(0),
        };

        assert_eq!(cover.supported_features(), base | Capabilities::TILT);

        let cover = TelemetryCover {
            closed: None,
            position: Some(100),
            tilt_position: Some(100),
        };

        assert_eq!(
            cover.supported_features(),
            base | Capabilities::SET_POSITION | Capabilities::TILT
        );
    }

    #[test]
    fn test_declared_features_override() {
        struct DeclaredCover;

        impl CoverEntity for DeclaredCover {
            fn is_closed(&self) -> Option<bool> {
                Some(true)
            }

            // The device reports a position but only supports open.

            fn current_position(&self) -> Option<u8> {
                Some(10)
            }

            fn declared_features(&self) -> Option<Capabilities> {
                Some(Capabilities::OPEN)
            }
        }

        assert_eq!(DeclaredCover.supported_features(), Capabilities::OPEN);
    }

    #[test]
    fn test_derived_state() {
        let cover = TelemetryCover {
            closed: Some(true),
            position: None,
            tilt_position: None,
        };

        assert_eq!(cover.state(), Some(State::Closed));

        let cover = TelemetryCover {
            closed: None,
            position: None,
            tilt_position: None,
        };

        assert_eq!(cover.state(), None);
    }

    #[test]
    fn test_state_attributes() {
        let cover = TelemetryCover {
            closed: Some(false),
            position: Some(75),
            tilt_position: None,
        };

        assert_eq!(
            cover.state_attributes(),
            StateAttributes {
                current_position: Some(75),
                current_tilt_position: None
            }
        );
    }

    #[test]
    fn test_toggle() {
        let cover = RecordingCover {
            closed: Some(true),
            ..RecordingCover::default()
        };

        assert_eq!(cover.toggle(), Ok(()));
        assert_eq!(cover.log(), vec!["open"]);

        let cover = RecordingCover {
            closed: Some(false),
            ..RecordingCover::default()
        };

        assert_eq!(cover.toggle(), Ok(()));
        assert_eq!(cover.log(), vec!["close"]);

        // An unknown closed signal is treated as not closed.

        let cover = RecordingCover {
            closed: None,
            ..RecordingCover::default()
        };

        assert_eq!(cover.toggle(), Ok(()));
        assert_eq!(cover.log(), vec!["close"]);
    }

    #[test]
    fn test_toggle_tilt() {
        let cover = RecordingCover {
            tilt_position: Some(0),
            ..RecordingCover::default()
        };

        assert_eq!(cover.toggle_tilt(), Ok(()));
        assert_eq!(cover.log(), vec!["open_tilt"]);

        let cover = RecordingCover {
            tilt_position: Some(1),
            ..RecordingCover::default()
        };

        assert_eq!(cover.toggle_tilt(), Ok(()));
        assert_eq!(cover.log(), vec!["close_tilt"]);

        let cover = RecordingCover {
            tilt_position: None,
            ..RecordingCover::default()
        };

        assert_eq!(cover.toggle_tilt(), Ok(()));
        assert_eq!(cover.log(), vec!["close_tilt"]);
    }
}
