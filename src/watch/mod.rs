//! Watch composition
//!
//! A watch-registering read returns two things: the value it observed and a
//! one-shot notification for the next change. [`WatchResult`] pairs them.
//!
//! # Basic Usage
//! ```
//! use bytes::Bytes;
//! use zk_results::{watch_channel, Event, EventType, GetResult, Stat, State, WatchResult};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! // Transport side: read the node and register the watch
//! let (notifier, next) = watch_channel();
//! let watch = WatchResult::new(GetResult::new(Bytes::from_static(b"v1"), Stat::default()), next);
//!
//! // Holder side
//! let (initial, next) = watch.into_parts();
//! assert_eq!(initial.data(), &Bytes::from_static(b"v1"));
//!
//! notifier.notify(Event::new(EventType::Changed, State::Connected)).unwrap();
//! let event = next.await.unwrap();
//! assert_eq!(event.event_type(), EventType::Changed);
//! # });
//! ```
//!
//! The channel resolves at most once. Failures from the transport (session
//! expiry, connection loss) arrive through the same future as events and are
//! never retried here.

mod channel;
mod watch_result;

pub use channel::*;
pub use watch_result::*;

#[cfg(test)]
mod watch_result_test;
