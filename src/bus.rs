//! Local message bus.
//!
//! Stands in for the middleware's callback executor.  Producers hand raw
//! payloads to [`LocalBus::deliver`] from any thread; the payload is
//! decoded by topic and queued.  When the queue is full the oldest entry
//! is evicted, so the most recent command always survives.  A single
//! consumer calls
//! [`LocalBus::spin_once`], which runs each queued command through the
//! [`CoolingService`] to completion before taking the next one, so the
//! controller state is never touched concurrently.
//!
//! ```text
//! ┌──────────────┐  AppCommand  ┌──────────────┐
//! │  Producers   │────────────▶│  spin_once    │──▶ CoolingService
//! │  (deliver)   │   bounded    │  (consumer)   │
//! └──────────────┘   channel    └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;
use log::warn;

use crate::app::commands::AppCommand;
use crate::app::ports::{EventSink, FanCommandPort};
use crate::app::service::CoolingService;
use crate::config::{CoolingConfig, MAX_TOPIC_LEN};
use crate::error::{BusError, Result};
use crate::messages::{decode_status, decode_twist};

/// Default inbound queue depth.
pub const INBOUND_DEPTH: usize = 8;

type Topic = String<MAX_TOPIC_LEN>;

fn topic(name: &str) -> core::result::Result<Topic, BusError> {
    let mut t = Topic::new();
    t.push_str(name).map_err(|_| BusError::TopicTooLong)?;
    Ok(t)
}

/// Topic router plus bounded inbound queue.
pub struct LocalBus<const DEPTH: usize = INBOUND_DEPTH> {
    status_topic: Topic,
    cmd_vel_topic: Topic,
    inbound: Channel<CriticalSectionRawMutex, AppCommand, DEPTH>,
}

impl<const DEPTH: usize> LocalBus<DEPTH> {
    pub fn new(config: &CoolingConfig) -> core::result::Result<Self, BusError> {
        const { assert!(DEPTH > 0, "inbound queue needs at least one slot") };
        Ok(Self {
            status_topic: topic(&config.status_topic)?,
            cmd_vel_topic: topic(&config.cmd_vel_topic)?,
            inbound: Channel::new(),
        })
    }

    /// Decode a payload received on `topic` and queue it for dispatch.
    pub fn deliver(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let cmd = if topic == self.status_topic.as_str() {
            AppCommand::ChargerStatus(decode_status(payload)?)
        } else if topic == self.cmd_vel_topic.as_str() {
            AppCommand::VelocityCommand(decode_twist(payload)?)
        } else {
            warn!("BUS: no subscriber for topic '{}'", topic);
            return Err(BusError::UnknownTopic.into());
        };
        self.enqueue(cmd);
        Ok(())
    }

    /// Queue an already-decoded command, evicting the oldest queued
    /// command while the queue is full.
    /// Returns the last command evicted, if any.
    pub fn enqueue(&self, cmd: AppCommand) -> Option<AppCommand> {
        let mut evicted = None;
        while self.inbound.try_send(cmd).is_err() {
            // The consumer may have drained the queue in between.
            if let Ok(old) = self.inbound.try_receive() {
                warn!("BUS: inbound queue full, evicting {:?}", old.trigger());
                evicted = Some(old);
            }
        }
        evicted
    }

    /// Dispatch every queued command in FIFO order.
    /// Returns the number of commands handled.
    pub fn spin_once(
        &self,
        service: &mut CoolingService,
        fans: &mut impl FanCommandPort,
        sink: &mut impl EventSink,
    ) -> usize {
        let mut handled = 0;
        while let Ok(cmd) = self.inbound.try_receive() {
            service.handle_command(cmd, fans, sink);
            handled += 1;
        }
        handled
    }

    /// Commands waiting for dispatch.
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }
}
