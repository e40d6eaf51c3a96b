use std::fmt;
use std::ops::BitOr;

use serde::Deserialize;
use serde::Serialize;

use crate::print_range;

/// Permission bits of a single access rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(u32);

impl Permission {
    pub const NONE: Permission = Permission(0);
    pub const READ: Permission = Permission(1);
    pub const WRITE: Permission = Permission(1 << 1);
    pub const CREATE: Permission = Permission(1 << 2);
    pub const DELETE: Permission = Permission(1 << 3);
    pub const ADMIN: Permission = Permission(1 << 4);
    pub const ALL: Permission = Permission(0b11111);

    /// Keeps unknown high bits as they came off the wire.
    pub const fn from_bits(bits: u32) -> Self {
        Permission(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(
        self,
        other: Permission,
    ) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Permission {
    type Output = Permission;

    fn bitor(
        self,
        rhs: Permission,
    ) -> Permission {
        Permission(self.0 | rhs.0)
    }
}

/// Renders as `rwcda`, with `-` for every missing bit.
impl fmt::Display for Permission {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (bit, letter) in [
            (Permission::READ, 'r'),
            (Permission::WRITE, 'w'),
            (Permission::CREATE, 'c'),
            (Permission::DELETE, 'd'),
            (Permission::ADMIN, 'a'),
        ] {
            write!(f, "{}", if self.contains(bit) { letter } else { '-' })?;
        }
        Ok(())
    }
}

/// A single grant: `permission` for the principal `scheme:id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AclRule {
    permission: Permission,
    scheme: String,
    id: String,
}

impl AclRule {
    pub fn new(
        permission: Permission,
        scheme: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            permission,
            scheme: scheme.into(),
            id: id.into(),
        }
    }

    /// Grant for everyone (`world:anyone`).
    pub fn world_anyone(permission: Permission) -> Self {
        Self::new(permission, "world", "anyone")
    }

    /// Grant for whichever identities the creating session authenticated with.
    pub fn auth_ids(permission: Permission) -> Self {
        Self::new(permission, "auth", "")
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for AclRule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "({}:{}, {})", self.scheme, self.id, self.permission)
    }
}

/// Ordered list of access rules attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acl(Vec<AclRule>);

impl Acl {
    pub fn new(rules: Vec<AclRule>) -> Self {
        Self(rules)
    }

    /// Everyone may do everything.
    pub fn open_unsafe() -> Self {
        Self(vec![AclRule::world_anyone(Permission::ALL)])
    }

    /// Everyone may read, nobody may change anything.
    pub fn read_unsafe() -> Self {
        Self(vec![AclRule::world_anyone(Permission::READ)])
    }

    /// Everything is granted to the creator's authenticated identities.
    pub fn creator_all() -> Self {
        Self(vec![AclRule::auth_ids(Permission::ALL)])
    }

    pub fn rules(&self) -> &[AclRule] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_rules(self) -> Vec<AclRule> {
        self.0
    }
}

impl From<Vec<AclRule>> for Acl {
    fn from(rules: Vec<AclRule>) -> Self {
        Self(rules)
    }
}

impl<'a> IntoIterator for &'a Acl {
    type Item = &'a AclRule;
    type IntoIter = std::slice::Iter<'a, AclRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Acl {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        print_range!(f, &self.0)
    }
}
