use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Metadata stamp of a node, captured by the server alongside every read or write.
///
/// Values are copied out of the response as-is; this layer never interprets the
/// counters beyond rendering them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stat {
    /// Transaction id of the change that created the node
    pub czxid: i64,
    /// Transaction id of the change that last modified the node's data
    pub mzxid: i64,
    /// Transaction id of the change that last modified the node's children
    pub pzxid: i64,
    /// Creation time, milliseconds since epoch
    pub ctime: i64,
    /// Last modification time, milliseconds since epoch
    pub mtime: i64,
    /// Number of changes to the data
    pub data_version: i32,
    /// Number of changes to the children
    pub child_version: i32,
    /// Number of changes to the ACL
    pub acl_version: i32,
    /// Session id of the owner if the node is ephemeral, zero otherwise
    pub ephemeral_owner: i64,
    /// Length of the data field
    pub data_size: i32,
    /// Number of children
    pub children_count: i32,
}

impl Stat {
    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral_owner != 0
    }
}

impl fmt::Display for Stat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{{czxid={} mzxid={} pzxid={} ctime={} mtime={} version={} cversion={} aversion={} ephemeral_owner={} data_size={} children={}}}",
            self.czxid,
            self.mzxid,
            self.pzxid,
            self.ctime,
            self.mtime,
            self.data_version,
            self.child_version,
            self.acl_version,
            self.ephemeral_owner,
            self.data_size,
            self.children_count
        )
    }
}
