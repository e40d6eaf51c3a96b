use crate::Acl;
use crate::AclRule;
use crate::Error;
use crate::EventType;
use crate::Permission;
use crate::Stat;
use crate::State;

fn sample_stat() -> Stat {
    Stat {
        czxid: 10,
        mzxid: 12,
        pzxid: 11,
        ctime: 1_700_000_000_000,
        mtime: 1_700_000_000_500,
        data_version: 2,
        child_version: 1,
        acl_version: 0,
        ephemeral_owner: 0,
        data_size: 5,
        children_count: 3,
    }
}

#[test]
fn test_stat_display() {
    assert_eq!(
        sample_stat().to_string(),
        "{czxid=10 mzxid=12 pzxid=11 ctime=1700000000000 mtime=1700000000500 version=2 cversion=1 aversion=0 ephemeral_owner=0 data_size=5 children=3}"
    );
}

#[test]
fn test_stat_is_ephemeral() {
    let mut stat = sample_stat();
    assert!(!stat.is_ephemeral());
    stat.ephemeral_owner = 0x1234;
    assert!(stat.is_ephemeral());
}

#[test]
fn test_permission_display() {
    assert_eq!(Permission::ALL.to_string(), "rwcda");
    assert_eq!(Permission::NONE.to_string(), "-----");
    assert_eq!((Permission::READ | Permission::CREATE).to_string(), "r-c--");
    assert_eq!(Permission::ADMIN.to_string(), "----a");
}

#[test]
fn test_permission_bits() {
    let p = Permission::READ | Permission::WRITE;
    assert_eq!(p.bits(), 3);
    assert!(p.contains(Permission::READ));
    assert!(!p.contains(Permission::DELETE));
    assert!(Permission::ALL.contains(p));
    assert_eq!(Permission::from_bits(31), Permission::ALL);
}

#[test]
fn test_acl_rule_accessors_and_display() {
    let rule = AclRule::new(Permission::READ, "digest", "user:hash");
    assert_eq!(rule.permission(), Permission::READ);
    assert_eq!(rule.scheme(), "digest");
    assert_eq!(rule.id(), "user:hash");
    assert_eq!(rule.to_string(), "(digest:user:hash, r----)");
}

#[test]
fn test_acl_display() {
    assert_eq!(Acl::open_unsafe().to_string(), "[(world:anyone, rwcda)]");
    assert_eq!(Acl::read_unsafe().to_string(), "[(world:anyone, r----)]");
    assert_eq!(Acl::default().to_string(), "[]");

    let acl = Acl::new(vec![
        AclRule::world_anyone(Permission::READ),
        AclRule::auth_ids(Permission::ALL),
    ]);
    assert_eq!(acl.len(), 2);
    assert_eq!(acl.to_string(), "[(world:anyone, r----), (auth:, rwcda)]");
}

#[test]
fn test_event_type_codes() {
    for event_type in [
        EventType::Session,
        EventType::Created,
        EventType::Deleted,
        EventType::Changed,
        EventType::ChildrenChanged,
        EventType::NotWatching,
    ] {
        assert_eq!(EventType::try_from(event_type.code()).unwrap(), event_type);
    }

    let err = EventType::try_from(42).unwrap_err();
    assert!(matches!(err, Error::UnknownCode { kind: "event type", code: 42 }));
}

#[test]
fn test_state_codes_and_terminal() {
    assert_eq!(State::try_from(3).unwrap(), State::Connected);
    assert_eq!(State::try_from(-112).unwrap(), State::ExpiredSession);
    assert!(State::try_from(4).is_err());

    assert!(State::ExpiredSession.is_terminal());
    assert!(State::Closed.is_terminal());
    assert!(State::AuthenticationFailed.is_terminal());
    assert!(!State::Connected.is_terminal());
    assert!(!State::NotConnected.is_terminal());
}

#[test]
fn test_kind_display() {
    assert_eq!(EventType::ChildrenChanged.to_string(), "children_changed");
    assert_eq!(EventType::Session.to_string(), "session");
    assert_eq!(State::ReadOnly.to_string(), "read_only");
    assert_eq!(State::Connected.to_string(), "connected");
}

#[test]
fn test_serde_uses_snake_case_names() {
    assert_eq!(
        serde_json::to_string(&EventType::ChildrenChanged).unwrap(),
        "\"children_changed\""
    );
    assert_eq!(
        serde_json::from_str::<State>("\"expired_session\"").unwrap(),
        State::ExpiredSession
    );
    assert_eq!(serde_json::to_string(&Permission::ALL).unwrap(), "31");
}
