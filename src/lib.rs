//! Typed results and one-shot watch notifications for a hierarchical
//! coordination service client.
//!
//! Every asynchronous operation of the client completes with an immutable
//! value from [`results`]; reads that register a watch complete with a
//! [`WatchResult`], pairing the value observed at registration with a
//! [`WatchFuture`] that fires once when that value goes stale.
//!
//! Payloads are rendered for logs through the capability-dispatch printers in
//! [`print`]. The transport (connection, session, wire codec, retries) lives
//! outside this crate: it builds the values found here and drives each
//! [`WatchNotifier`].

mod config;
mod errors;
pub mod print;
pub mod results;
mod types;
mod watch;

pub use self::config::*;
pub use errors::*;
pub use print::PayloadSize;
pub use results::*;
pub use types::*;
pub use watch::*;
