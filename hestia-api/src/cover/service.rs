//! Service registration and dispatch for covers.
//!
//! Clients invoke covers through named services. Each service carries
//! a required-capability mask; a call whose target entity doesn't
//! declare the full mask is rejected before any primitive runs.
//! Parameters are validated here as well, so entity primitives only
//! ever see well-formed values and carry no runtime checks of their
//! own.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{Capabilities, CoverCommands, CoverEntity};
use crate::types::{device, Error};
use crate::Result;

/// One invocable cover operation, with its parameters still in wire
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Open,
    Close,
    SetPosition { position: device::Value },
    Stop,
    Toggle,
    OpenTilt,
    CloseTilt,
    StopTilt,
    SetTiltPosition { tilt_position: device::Value },
    ToggleTilt,
}

impl Request {
    /// The capability mask an entity must declare before this request
    /// is dispatched to it.
    pub fn required_features(&self) -> Capabilities {
        match self {
            Request::Open => Capabilities::OPEN,
            Request::Close => Capabilities::CLOSE,
            Request::SetPosition { .. } => Capabilities::SET_POSITION,
            Request::Stop => Capabilities::STOP,
            Request::Toggle => Capabilities::OPEN | Capabilities::CLOSE,
            Request::OpenTilt => Capabilities::OPEN_TILT,
            Request::CloseTilt => Capabilities::CLOSE_TILT,
            Request::StopTilt => Capabilities::STOP_TILT,
            Request::SetTiltPosition { .. } => Capabilities::SET_TILT_POSITION,
            Request::ToggleTilt => {
                Capabilities::OPEN_TILT | Capabilities::CLOSE_TILT
            }
        }
    }

    /// The service name, as clients spell it.
    pub fn name(&self) -> &'static str {
        match self {
            Request::Open => "open_cover",
            Request::Close => "close_cover",
            Request::SetPosition { .. } => "set_cover_position",
            Request::Stop => "stop_cover",
            Request::Toggle => "toggle",
            Request::OpenTilt => "open_cover_tilt",
            Request::CloseTilt => "close_cover_tilt",
            Request::StopTilt => "stop_cover_tilt",
            Request::SetTiltPosition { .. } => "set_cover_tilt_position",
            Request::ToggleTilt => "toggle_cover_tilt",
        }
    }
}

// Positions arrive as wire values and must be integers within the
// 0 to 100 scale.

fn parse_position(value: &device::Value) -> Result<u8> {
    match value {
        device::Value::Int(v) if (0..=100).contains(v) => Ok(*v as u8),
        device::Value::Int(_) => Err(Error::InvArgument(String::from(
            "position must be between 0 and 100",
        ))),
        _ => Err(Error::InvArgument(String::from(
            "position must be an integer",
        ))),
    }
}

/// Holds every registered cover, keyed by entity id.
#[derive(Default)]
pub struct Registry {
    entities: HashMap<String, Arc<dyn CoverEntity>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            entities: HashMap::new(),
        }
    }

    /// Registers a cover under the given entity id. Ids are unique;
    /// registering a second entity under an existing id is an error.
    pub fn add(
        &mut self,
        id: &str,
        entity: Arc<dyn CoverEntity>,
    ) -> Result<()> {
        if self.entities.contains_key(id) {
            return Err(Error::InUse);
        }

        debug!("registered cover entity '{}'", id);
        self.entities.insert(String::from(id), entity);
        Ok(())
    }

    /// Looks up a registered cover.
    pub fn entity(&self, id: &str) -> Option<&Arc<dyn CoverEntity>> {
        self.entities.get(id)
    }

    /// Resolves the target entity, verifies it declares the request's
    /// capability mask, validates any parameters, and awaits the
    /// corresponding command wrapper. Device errors raised by the
    /// primitive propagate to the caller unmodified.
    pub async fn call(&self, id: &str, request: Request) -> Result<()> {
        let Some(entity) = self.entities.get(id) else {
            warn!("no cover entity '{}'", id);
            return Err(Error::NotFound);
        };

        let needed = request.required_features();

        if !entity.supported_features().contains(needed) {
            warn!(
                "cover entity '{}' doesn't support '{}'",
                id,
                request.name()
            );
            return Err(Error::NotSupported);
        }

        debug!("dispatching '{}' to cover entity '{}'", request.name(), id);

        match request {
            Request::Open => entity.open().await,
            Request::Close => entity.close().await,
            Request::SetPosition { position } => {
                entity.set_position(parse_position(&position)?).await
            }
            Request::Stop => entity.stop().await,
            Request::Toggle => entity.toggle_cover().await,
            Request::OpenTilt => entity.open_tilt().await,
            Request::CloseTilt => entity.close_tilt().await,
            Request::StopTilt => entity.stop_tilt().await,
            Request::SetTiltPosition { tilt_position } => {
                entity
                    .set_tilt_position(parse_position(&tilt_position)?)
                    .await
            }
            Request::ToggleTilt => entity.toggle_cover_tilt().await,
        }
    }
}
