use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;

/// What happened to a watched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Not about a node: the session's connection state changed
    Session,
    Created,
    Deleted,
    /// The node's data changed
    Changed,
    ChildrenChanged,
    /// The server dropped the watch without the node changing
    NotWatching,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Session => "session",
            EventType::Created => "created",
            EventType::Deleted => "deleted",
            EventType::Changed => "changed",
            EventType::ChildrenChanged => "children_changed",
            EventType::NotWatching => "not_watching",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            EventType::Session => -1,
            EventType::Created => 1,
            EventType::Deleted => 2,
            EventType::Changed => 3,
            EventType::ChildrenChanged => 4,
            EventType::NotWatching => -2,
        }
    }
}

impl TryFrom<i32> for EventType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(EventType::Session),
            1 => Ok(EventType::Created),
            2 => Ok(EventType::Deleted),
            3 => Ok(EventType::Changed),
            4 => Ok(EventType::ChildrenChanged),
            -2 => Ok(EventType::NotWatching),
            _ => Err(Error::UnknownCode {
                kind: "event type",
                code,
            }),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection state of the session at the time an event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Closed,
    Connecting,
    Associating,
    Connected,
    /// Connected to a server that only serves reads
    ReadOnly,
    NotConnected,
    ExpiredSession,
    AuthenticationFailed,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Closed => "closed",
            State::Connecting => "connecting",
            State::Associating => "associating",
            State::Connected => "connected",
            State::ReadOnly => "read_only",
            State::NotConnected => "not_connected",
            State::ExpiredSession => "expired_session",
            State::AuthenticationFailed => "authentication_failed",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            State::Closed => 0,
            State::Connecting => 1,
            State::Associating => 2,
            State::Connected => 3,
            State::ReadOnly => 5,
            State::NotConnected => 999,
            State::ExpiredSession => -112,
            State::AuthenticationFailed => -113,
        }
    }

    /// No further events can be delivered once the session reaches this state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            State::Closed | State::ExpiredSession | State::AuthenticationFailed
        )
    }
}

impl TryFrom<i32> for State {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(State::Closed),
            1 => Ok(State::Connecting),
            2 => Ok(State::Associating),
            3 => Ok(State::Connected),
            5 => Ok(State::ReadOnly),
            999 => Ok(State::NotConnected),
            -112 => Ok(State::ExpiredSession),
            -113 => Ok(State::AuthenticationFailed),
            _ => Err(Error::UnknownCode {
                kind: "state",
                code,
            }),
        }
    }
}

impl fmt::Display for State {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
