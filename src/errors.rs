//! Error hierarchy for operation results and watch delivery
//!
//! Building a result value or rendering one never fails. The failure surface is
//! limited to the one-shot watch channel, decoding of wire codes into typed
//! enums, and configuration loading.

use config::ConfigError;

use crate::State;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failures delivered through (or rejected by) a watch channel
    #[error(transparent)]
    Watch(#[from] WatchError),

    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A wire code the client does not know how to represent
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i32 },
}

/// Why a watch resolved without an event, or why a resolution attempt was refused.
///
/// The first group is what a holder can observe from [`crate::WatchFuture`]. The
/// last two are only ever returned to the producer side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WatchError {
    /// Session expired before the watched node changed
    #[error("Session expired before the watch fired")]
    SessionExpired,

    /// Connection to the ensemble was lost before the watch fired
    #[error("Connection lost before the watch fired")]
    ConnectionLoss,

    /// Authentication failed, the session can no longer deliver events
    #[error("Authentication failed before the watch fired")]
    AuthFailed,

    /// The client was closed by its owner
    #[error("Client closed before the watch fired")]
    Closed,

    /// The producer went away without resolving the watch
    #[error("Watch notifier dropped without resolving")]
    NotifierDropped,

    /// Any other transport failure, carried as text
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The holder abandoned the watch
    #[error("Watch cancelled by its holder")]
    Cancelled,

    /// The watch already carries an outcome
    #[error("Watch already resolved")]
    AlreadyResolved,
}

impl WatchError {
    /// Failure a pending watch receives when the session lands in `state`.
    ///
    /// Returns `None` for states that keep watches alive.
    pub fn from_state(state: State) -> Option<Self> {
        match state {
            State::ExpiredSession => Some(WatchError::SessionExpired),
            State::AuthenticationFailed => Some(WatchError::AuthFailed),
            State::Closed => Some(WatchError::Closed),
            State::NotConnected => Some(WatchError::ConnectionLoss),
            State::Connecting | State::Associating | State::Connected | State::ReadOnly => None,
        }
    }
}
