use std::fmt;

use crate::ExistsResult;
use crate::GetChildrenResult;
use crate::GetResult;
use crate::WatchFuture;

mod private {
    pub trait Sealed {}

    impl Sealed for crate::GetResult {}
    impl Sealed for crate::GetChildrenResult {}
    impl Sealed for crate::ExistsResult {}
}

/// Results that a watch-registering read can start from.
pub trait WatchInitial: fmt::Display + private::Sealed {}

impl WatchInitial for GetResult {}
impl WatchInitial for GetChildrenResult {}
impl WatchInitial for ExistsResult {}

/// The value seen when the watch was registered, plus the future that fires
/// once that value goes stale.
///
/// The initial value reflects the node strictly before registration; the event
/// is the first change after it. Later changes are not reported through this
/// handle: register a new watch to keep observing.
#[derive(Debug)]
pub struct WatchResult<R: WatchInitial> {
    initial: R,
    next: WatchFuture,
}

pub type WatchGetResult = WatchResult<GetResult>;
pub type WatchChildrenResult = WatchResult<GetChildrenResult>;
pub type WatchExistsResult = WatchResult<ExistsResult>;

impl<R: WatchInitial> WatchResult<R> {
    pub fn new(
        initial: R,
        next: WatchFuture,
    ) -> Self {
        Self { initial, next }
    }

    pub fn initial(&self) -> &R {
        &self.initial
    }

    /// The pending notification, to await or poll in place.
    pub fn next_mut(&mut self) -> &mut WatchFuture {
        &mut self.next
    }

    /// Gives up the initial value and keeps only the notification.
    pub fn into_next(self) -> WatchFuture {
        self.next
    }

    pub fn into_parts(self) -> (R, WatchFuture) {
        (self.initial, self.next)
    }
}

/// The future has no synchronous value and is left out.
impl<R: WatchInitial> fmt::Display for WatchResult<R> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "watch_result{{initial={}}}", self.initial)
    }
}
