//! Fan command publisher adapters.
//!
//! Implements [`FanCommandPort`].  Publishing never reports failure
//! back to the domain; write errors are logged and the command is lost.

use std::borrow::Cow;
use std::io::Write;

use log::warn;

use crate::app::ports::FanCommandPort;
use crate::messages::{Envelope, FanCommand};

/// Writes each fan command as one JSON line wrapped in an [`Envelope`].
pub struct JsonLinesPublisher<W: Write> {
    topic: String,
    out: W,
    failures: u64,
}

impl<W: Write> JsonLinesPublisher<W> {
    pub fn new(out: W, topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            out,
            failures: 0,
        }
    }

    /// Commands that could not be written.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, cmd: &FanCommand) -> std::io::Result<()> {
        let line = Envelope {
            topic: Cow::Borrowed(self.topic.as_str()),
            msg: cmd,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> FanCommandPort for JsonLinesPublisher<W> {
    fn publish(&mut self, cmd: &FanCommand) {
        if let Err(e) = self.write_line(cmd) {
            self.failures += 1;
            warn!("PUB | {} write failed: {}", self.topic, e);
        }
    }
}
