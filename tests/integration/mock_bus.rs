//! Mock bus adapters for integration tests.
//!
//! Records every published fan command and every emitted event so tests
//! can assert on the full history without a live transport.

use ridgeback_cooling::app::events::AppEvent;
use ridgeback_cooling::app::ports::{EventSink, FanCommandPort};
use ridgeback_cooling::fans::{FanBank, FanPosition, FanSetting};
use ridgeback_cooling::messages::FanCommand;

// ── MockPublisher ─────────────────────────────────────────────

pub struct MockPublisher {
    pub published: Vec<FanCommand>,
}

#[allow(dead_code)]
impl MockPublisher {
    pub fn new() -> Self {
        Self {
            published: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&FanBank> {
        self.published.last().map(|cmd| &cmd.fans)
    }

    pub fn count(&self) -> usize {
        self.published.len()
    }

    pub fn last_charger_bay(&self) -> Option<[FanSetting; 2]> {
        self.last()
            .map(|fans| FanPosition::CHARGER_BAY.map(|pos| fans[pos]))
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl FanCommandPort for MockPublisher {
    fn publish(&mut self, cmd: &FanCommand) {
        self.published.push(*cmd);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
