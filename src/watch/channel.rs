//! Single-fire channel carrying the outcome of one watch.
//!
//! ```text
//!                 notify(event)
//!   {pending} ───────────────────▶ {resolved with event}
//!       │    ───────────────────▶ {resolved with error}
//!       │         fail(error) / notifier dropped
//!       │
//!       └──────────────────────▶ {cancelled}
//!           cancel() / future dropped
//! ```
//!
//! Terminal states never change again: a second `notify`/`fail` is refused with
//! [`WatchError::AlreadyResolved`] and leaves the first outcome untouched, and a
//! cancelled future keeps answering [`WatchError::Cancelled`].

use std::fmt::Debug;
use std::future::poll_fn;
use std::future::Future;
use std::pin::pin;
use std::pin::Pin;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::task::ready;
use std::task::Context;
use std::task::Poll;

use futures::future::FusedFuture;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::sync::Notify;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::Event;
use crate::WatchConfig;
use crate::WatchError;

/// What a watch resolves to.
pub type WatchOutcome = std::result::Result<Event, WatchError>;

static NEXT_WATCH_ID: AtomicU64 = AtomicU64::new(1);

/// Creates a watch channel with default diagnostics.
pub fn watch_channel() -> (WatchNotifier, WatchFuture) {
    watch_channel_with(&WatchConfig::default())
}

/// Creates a watch channel.
///
/// The transport keeps the [`WatchNotifier`] next to its registration for the
/// watched path; the [`WatchFuture`] goes to the caller, usually inside a
/// [`crate::WatchResult`].
pub fn watch_channel_with(config: &WatchConfig) -> (WatchNotifier, WatchFuture) {
    let (tx, rx) = oneshot::channel();
    let id = NEXT_WATCH_ID.fetch_add(1, Ordering::Relaxed);
    trace!(watch_id = id, label = %config.label, "Watch channel created");

    (
        WatchNotifier {
            id,
            slot: Mutex::new(Slot::Armed(tx)),
            settled: Notify::new(),
            config: config.clone(),
        },
        WatchFuture {
            id,
            inner: Inner::Pending(rx),
        },
    )
}

/// Observable state of a [`WatchFuture`], from the holder's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// No outcome taken yet
    Pending,
    /// The outcome (event or failure) was handed to the holder
    Resolved,
    /// The holder gave up on the watch
    Cancelled,
}

enum Slot {
    Armed(oneshot::Sender<WatchOutcome>),
    Resolved,
    Cancelled,
}

/// Producer half of a watch channel.
///
/// Resolution takes `&self`, so the transport may share one notifier (behind an
/// `Arc`) between the code path that dispatches node events and the one that
/// fails every pending watch when the session is lost. Whichever call comes
/// first wins.
pub struct WatchNotifier {
    id: u64,
    slot: Mutex<Slot>,
    /// Signalled every time `slot` leaves `Armed`
    settled: Notify,
    config: WatchConfig,
}

impl Debug for WatchNotifier {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("WatchNotifier").field("id", &self.id).finish()
    }
}

impl WatchNotifier {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Delivers the event that made the watched value stale.
    ///
    /// # Errors
    /// - [`WatchError::AlreadyResolved`] if an outcome was already delivered
    /// - [`WatchError::Cancelled`] if the holder abandoned the watch
    pub fn notify(
        &self,
        event: Event,
    ) -> Result<(), WatchError> {
        self.resolve(Ok(event))
    }

    /// Resolves the watch with a failure, typically the session being lost.
    ///
    /// Same errors as [`WatchNotifier::notify`].
    pub fn fail(
        &self,
        error: WatchError,
    ) -> Result<(), WatchError> {
        self.resolve(Err(error))
    }

    fn resolve(
        &self,
        outcome: WatchOutcome,
    ) -> Result<(), WatchError> {
        let result = self.resolve_locked(outcome);
        // Wake `closed()` waiters outside the slot lock, on every path.
        self.settled.notify_waiters();
        result
    }

    fn resolve_locked(
        &self,
        outcome: WatchOutcome,
    ) -> Result<(), WatchError> {
        let mut slot = self.slot.lock();
        let sender = match std::mem::replace(&mut *slot, Slot::Resolved) {
            Slot::Armed(sender) => sender,
            Slot::Resolved => {
                self.log_rejected(WatchError::AlreadyResolved, &outcome);
                return Err(WatchError::AlreadyResolved);
            }
            Slot::Cancelled => {
                *slot = Slot::Cancelled;
                self.log_rejected(WatchError::Cancelled, &outcome);
                return Err(WatchError::Cancelled);
            }
        };

        if let Err(outcome) = sender.send(outcome) {
            *slot = Slot::Cancelled;
            self.log_rejected(WatchError::Cancelled, &outcome);
            return Err(WatchError::Cancelled);
        }

        trace!(watch_id = self.id, label = %self.config.label, "Watch resolved");
        Ok(())
    }

    fn log_rejected(
        &self,
        reason: WatchError,
        outcome: &WatchOutcome,
    ) {
        if self.config.log_rejected_resolutions {
            debug!(
                watch_id = self.id,
                label = %self.config.label,
                ?reason,
                ?outcome,
                "Watch resolution rejected"
            );
        }
    }

    /// True once an outcome has been handed to the channel.
    pub fn is_resolved(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Resolved)
    }

    /// True once the holder cancelled or dropped its [`WatchFuture`] before
    /// an outcome was delivered.
    pub fn is_cancelled(&self) -> bool {
        match &*self.slot.lock() {
            Slot::Armed(sender) => sender.is_closed(),
            Slot::Resolved => false,
            Slot::Cancelled => true,
        }
    }

    /// Completes when the watch no longer needs the transport's registration:
    /// either the holder abandoned it, or it was resolved (before or while
    /// waiting).
    pub async fn closed(&self) {
        // Registered before the slot is inspected, so a resolution racing
        // with the check is still observed.
        let mut settled = pin!(self.settled.notified());
        poll_fn(|cx| match &mut *self.slot.lock() {
            Slot::Armed(sender) => {
                if sender.poll_closed(cx).is_ready() {
                    return Poll::Ready(());
                }
                settled.as_mut().poll(cx)
            }
            Slot::Resolved | Slot::Cancelled => Poll::Ready(()),
        })
        .await
    }
}

impl Drop for WatchNotifier {
    fn drop(&mut self) {
        if let Slot::Armed(sender) = &*self.slot.get_mut() {
            if !sender.is_closed() && self.config.warn_on_unresolved_drop {
                warn!(
                    watch_id = self.id,
                    label = %self.config.label,
                    "Watch notifier dropped before resolving, holder will see NotifierDropped"
                );
            }
        }
    }
}

enum Inner {
    Pending(oneshot::Receiver<WatchOutcome>),
    Taken,
    Cancelled,
}

/// Consumer half of a watch channel: resolves once with the next [`Event`] or
/// with the failure that ended the subscription.
///
/// Dropping it before resolution is the same as [`WatchFuture::cancel`]. Polling
/// again after the outcome was returned panics, like any completed future.
pub struct WatchFuture {
    id: u64,
    inner: Inner,
}

impl Debug for WatchFuture {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("WatchFuture")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish()
    }
}

impl WatchFuture {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> WatchState {
        match self.inner {
            Inner::Pending(_) => WatchState::Pending,
            Inner::Taken => WatchState::Resolved,
            Inner::Cancelled => WatchState::Cancelled,
        }
    }

    /// Takes the outcome if it has arrived, without waiting.
    ///
    /// Returns `Ok(None)` while the watch is pending and
    /// `Err(WatchError::Cancelled)` after [`WatchFuture::cancel`].
    ///
    /// # Panics
    ///
    /// Panics if the outcome was already taken.
    pub fn try_take(&mut self) -> Result<Option<Event>, WatchError> {
        let received = match &mut self.inner {
            Inner::Pending(rx) => match rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Closed) => None,
            },
            Inner::Cancelled => return Err(WatchError::Cancelled),
            Inner::Taken => panic!("WatchFuture outcome already taken"),
        };
        self.settle(received).map(Some)
    }

    /// Abandons the watch. Any outcome not yet taken is discarded and the
    /// notifier's [`closed`](WatchNotifier::closed) completes.
    ///
    /// No-op once the future reached a terminal state.
    pub fn cancel(&mut self) {
        if let Inner::Pending(rx) = &mut self.inner {
            rx.close();
            self.inner = Inner::Cancelled;
            trace!(watch_id = self.id, "Watch cancelled");
        }
    }

    fn settle(
        &mut self,
        received: Option<WatchOutcome>,
    ) -> WatchOutcome {
        self.inner = Inner::Taken;
        let outcome = received.unwrap_or(Err(WatchError::NotifierDropped));
        trace!(watch_id = self.id, ?outcome, "Watch outcome taken");
        outcome
    }
}

impl Future for WatchFuture {
    type Output = WatchOutcome;

    fn poll(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Self::Output> {
        let this = self.get_mut();
        let received = match &mut this.inner {
            Inner::Pending(rx) => ready!(Pin::new(rx).poll(cx)).ok(),
            Inner::Cancelled => return Poll::Ready(Err(WatchError::Cancelled)),
            Inner::Taken => panic!("WatchFuture polled after its outcome was taken"),
        };
        Poll::Ready(this.settle(received))
    }
}

impl FusedFuture for WatchFuture {
    fn is_terminated(&self) -> bool {
        !matches!(self.inner, Inner::Pending(_))
    }
}

impl Drop for WatchFuture {
    fn drop(&mut self) {
        if matches!(self.inner, Inner::Pending(_)) {
            trace!(watch_id = self.id, "Watch abandoned by holder");
        }
    }
}
