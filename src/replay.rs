//! Line-oriented replay of recorded bus traffic.
//!
//! Each input line is an [`Envelope`] holding an inbound topic and its
//! message, e.g. `{"topic":"cmd_vel","msg":{"linear":{"x":0.2}}}`.  Lines
//! are pushed through the [`LocalBus`] and dispatched one at a time, so the
//! publisher sees one fan command per accepted line, in input order.
//! Blank lines and lines starting with `#` are skipped.  Malformed lines
//! are logged and counted, never fatal.

use std::io::BufRead;

use log::warn;

use crate::app::ports::{EventSink, FanCommandPort};
use crate::app::service::CoolingService;
use crate::bus::LocalBus;
use crate::error::{Error, Result};
use crate::messages::{CodecError, Envelope};

/// Outcome of a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Non-blank, non-comment lines read.
    pub lines: usize,
    /// Commands dispatched to the service.
    pub dispatched: usize,
    /// Lines dropped for a bad envelope, payload, or topic.
    pub rejected: usize,
}

/// Split one replay line into its topic and raw message payload.
pub fn parse_line(line: &str) -> core::result::Result<(String, Vec<u8>), CodecError> {
    let envelope: Envelope<'_, serde_json::Value> =
        serde_json::from_str(line).map_err(|e| CodecError::new("envelope", e))?;
    let payload =
        serde_json::to_vec(&envelope.msg).map_err(|e| CodecError::new("envelope", e))?;
    Ok((envelope.topic.into_owned(), payload))
}

/// Feed every line of `input` through `bus` into `service`.
pub fn run<const DEPTH: usize>(
    input: impl BufRead,
    bus: &LocalBus<DEPTH>,
    service: &mut CoolingService,
    fans: &mut impl FanCommandPort,
    sink: &mut impl EventSink,
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        stats.lines += 1;

        let delivered = parse_line(line)
            .map_err(Error::from)
            .and_then(|(topic, payload)| bus.deliver(&topic, &payload));
        if let Err(e) = delivered {
            warn!("REPLAY | line {}: {}", index + 1, e);
            stats.rejected += 1;
        }

        stats.dispatched += bus.spin_once(service, fans, sink);
    }

    Ok(stats)
}
