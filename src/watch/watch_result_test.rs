use bytes::Bytes;

use crate::watch_channel;
use crate::Event;
use crate::EventType;
use crate::ExistsResult;
use crate::GetChildrenResult;
use crate::GetResult;
use crate::Stat;
use crate::State;
use crate::WatchChildrenResult;
use crate::WatchError;
use crate::WatchExistsResult;
use crate::WatchGetResult;
use crate::WatchResult;
use crate::WatchState;

fn stat() -> Stat {
    Stat {
        czxid: 1,
        mzxid: 2,
        data_version: 1,
        ..Stat::default()
    }
}

#[test]
fn test_display_omits_future() {
    let (_notifier, next) = watch_channel();
    let initial = GetResult::new(Bytes::from_static(b"abc"), stat());
    let expected = format!("watch_result{{initial={initial}}}");

    let watch = WatchResult::new(initial, next);
    assert_eq!(watch.to_string(), expected);
    assert_eq!(watch.to_string(), format!("watch_result{{initial=get_result{{size=3 {}}}}}", stat()));
}

#[test]
fn test_display_for_children_and_exists() {
    let (_n1, next1) = watch_channel();
    let watch: WatchChildrenResult =
        WatchResult::new(GetChildrenResult::new(vec!["a".into(), "b".into()], stat()), next1);
    assert_eq!(
        watch.to_string(),
        format!("watch_result{{initial=get_children_result{{[a, b] parent={}}}}}", stat())
    );

    let (_n2, next2) = watch_channel();
    let watch: WatchExistsResult = WatchResult::new(ExistsResult::absent(), next2);
    assert_eq!(watch.to_string(), "watch_result{initial=exists_result{(no)}}");
}

#[test]
fn test_initial_is_available_synchronously() {
    let (_notifier, next) = watch_channel();
    let watch: WatchGetResult = WatchResult::new(GetResult::new(Bytes::from_static(b"v1"), stat()), next);

    assert_eq!(watch.initial().data(), &Bytes::from_static(b"v1"));
    assert_eq!(watch.initial().stat(), &stat());
}

#[tokio::test]
async fn test_future_outlives_initial_value() {
    let (notifier, next) = watch_channel();
    let watch = WatchResult::new(ExistsResult::present(stat()), next);

    let next = watch.into_next();
    notifier
        .notify(Event::new(EventType::Deleted, State::Connected))
        .unwrap();

    let event = next.await.unwrap();
    assert_eq!(event.event_type(), EventType::Deleted);
}

#[tokio::test]
async fn test_next_mut_polls_in_place() {
    let (notifier, next) = watch_channel();
    let mut watch = WatchResult::new(GetChildrenResult::new(vec![], stat()), next);

    assert_eq!(watch.next_mut().try_take(), Ok(None));

    notifier.fail(WatchError::ConnectionLoss).unwrap();
    assert_eq!(watch.next_mut().await, Err(WatchError::ConnectionLoss));
    assert_eq!(watch.next_mut().state(), WatchState::Resolved);

    // The initial value stays readable after the future resolved
    assert!(watch.initial().children().is_empty());
}

#[tokio::test]
async fn test_dropping_watch_result_releases_registration() {
    let (notifier, next) = watch_channel();
    let watch = WatchResult::new(GetResult::new(Bytes::new(), stat()), next);

    drop(watch);

    assert!(notifier.is_cancelled());
    notifier.closed().await;
    assert_eq!(
        notifier.notify(Event::new(EventType::Changed, State::Connected)),
        Err(WatchError::Cancelled)
    );
}

#[tokio::test]
async fn test_into_parts_moves_ownership() {
    let (notifier, next) = watch_channel();
    let initial = GetResult::new(Bytes::from_static(b"x"), stat());
    let watch = WatchResult::new(initial.clone(), next);

    let (got, next) = watch.into_parts();
    assert_eq!(got, initial);

    let handle = tokio::spawn(next);
    notifier
        .notify(Event::new(EventType::Changed, State::ReadOnly))
        .unwrap();
    let event = handle.await.unwrap().unwrap();
    assert_eq!(event.state(), State::ReadOnly);
}
