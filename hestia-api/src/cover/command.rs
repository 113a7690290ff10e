//! Awaitable forms of the cover command primitives.
//!
//! The primitives on [`CoverEntity`] are synchronous and may block on
//! device I/O. Each wrapper here hands the primitive to the blocking
//! worker pool and awaits its completion, so the calling task is
//! never blocked. Once a command has been handed off it runs to
//! completion or failure; there is no cancellation or timeout at this
//! layer.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task;

use super::CoverEntity;
use crate::Result;

// Runs one synchronous primitive on the blocking pool. The entity
// handle is cloned into the worker since the closure must own its
// captures.

async fn run_primitive<E, F>(entity: &Arc<E>, op: F) -> Result<()>
where
    E: CoverEntity + ?Sized + 'static,
    F: FnOnce(&E) -> Result<()> + Send + 'static,
{
    let entity = Arc::clone(entity);

    task::spawn_blocking(move || op(&*entity)).await?
}

/// Asynchronous command wrappers, implemented for any shared cover
/// entity handle. Errors raised by the primitive propagate to the
/// caller unmodified.
#[async_trait]
pub trait CoverCommands {
    /// Opens the cover.
    async fn open(&self) -> Result<()>;

    /// Closes the cover.
    async fn close(&self) -> Result<()>;

    /// Moves the cover to a specific position.
    async fn set_position(&self, position: u8) -> Result<()>;

    /// Stops the cover.
    async fn stop(&self) -> Result<()>;

    /// Opens the cover tilt.
    async fn open_tilt(&self) -> Result<()>;

    /// Closes the cover tilt.
    async fn close_tilt(&self) -> Result<()>;

    /// Moves the cover tilt to a specific position.
    async fn set_tilt_position(&self, tilt_position: u8) -> Result<()>;

    /// Stops the cover tilt.
    async fn stop_tilt(&self) -> Result<()>;

    /// Opens the cover if it's closed, closes it otherwise.
    async fn toggle_cover(&self) -> Result<()>;

    /// Opens the tilt when its position reads fully closed, closes it
    /// otherwise.
    async fn toggle_cover_tilt(&self) -> Result<()>;
}

#[async_trait]
impl<E> CoverCommands for Arc<E>
where
    E: CoverEntity + ?Sized + 'static,
{
    async fn open(&self) -> Result<()> {
        run_primitive(self, |e| e.open_cover()).await
    }

    async fn close(&self) -> Result<()> {
        run_primitive(self, |e| e.close_cover()).await
    }

    async fn set_position(&self, position: u8) -> Result<()> {
        run_primitive(self, move |e| e.set_cover_position(position)).await
    }

    async fn stop(&self) -> Result<()> {
        run_primitive(self, |e| e.stop_cover()).await
    }

    async fn open_tilt(&self) -> Result<()> {
        run_primitive(self, |e| e.open_cover_tilt()).await
    }

    async fn close_tilt(&self) -> Result<()> {
        run_primitive(self, |e| e.close_cover_tilt()).await
    }

    async fn set_tilt_position(&self, tilt_position: u8) -> Result<()> {
        run_primitive(self, move |e| e.set_cover_tilt_position(tilt_position))
            .await
    }

    async fn stop_tilt(&self) -> Result<()> {
        run_primitive(self, |e| e.stop_cover_tilt()).await
    }

    async fn toggle_cover(&self) -> Result<()> {
        if self.is_closed() == Some(true) {
            self.open().await
        } else {
            self.close().await
        }
    }

    async fn toggle_cover_tilt(&self) -> Result<()> {
        if self.current_tilt_position() == Some(0) {
            self.open_tilt().await
        } else {
            self.close_tilt().await
        }
    }
}
