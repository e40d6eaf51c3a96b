use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::EventType;
use crate::State;

/// A watch notification: what happened, and the session state when it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    event_type: EventType,
    state: State,
}

impl Event {
    pub fn new(
        event_type: EventType,
        state: State,
    ) -> Self {
        Self { event_type, state }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn state(&self) -> State {
        self.state
    }
}

impl fmt::Display for Event {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "event{{{} | {}}}", self.event_type, self.state)
    }
}
