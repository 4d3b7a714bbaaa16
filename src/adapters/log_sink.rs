//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  Whatever logger the binary installs decides where
//! they end up.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(fans) => {
                info!("START | fans={}", fans);
            }
            AppEvent::ChargerConnected => {
                info!("CHARGER | connected, charger bay HIGH");
            }
            AppEvent::ChargerDisconnected => {
                info!("CHARGER | disconnected, charger bay LOW");
            }
            // One per inbound message; keep it out of the default level.
            AppEvent::FansPublished { trigger, fans } => {
                debug!("FANS | {:?} -> {} wire={:?}", trigger, fans, fans.to_wire());
            }
        }
    }
}
