use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::print_buffer;
use crate::print_range;
use crate::Acl;
use crate::Buffer;
use crate::Stat;

/// Outcome of reading a node's data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetResult {
    data: Buffer,
    stat: Stat,
}

impl GetResult {
    pub fn new(
        data: Buffer,
        stat: Stat,
    ) -> Self {
        Self { data, stat }
    }

    pub fn data(&self) -> &Buffer {
        &self.data
    }

    pub fn stat(&self) -> &Stat {
        &self.stat
    }

    pub fn into_parts(self) -> (Buffer, Stat) {
        (self.data, self.stat)
    }
}

impl fmt::Display for GetResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("get_result{")?;
        print_buffer!(f, self.data)?;
        write!(f, " {}}}", self.stat)
    }
}

/// Outcome of listing a node's children.
///
/// Children keep the order the server sent them in. The order is only used for
/// display and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetChildrenResult {
    children: Vec<String>,
    parent_stat: Stat,
}

impl GetChildrenResult {
    pub fn new(
        children: Vec<String>,
        parent_stat: Stat,
    ) -> Self {
        Self { children, parent_stat }
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn parent_stat(&self) -> &Stat {
        &self.parent_stat
    }

    pub fn into_parts(self) -> (Vec<String>, Stat) {
        (self.children, self.parent_stat)
    }
}

impl fmt::Display for GetChildrenResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("get_children_result{")?;
        print_range!(f, &self.children)?;
        write!(f, " parent={}}}", self.parent_stat)
    }
}

/// Outcome of an existence check.
///
/// A missing node is an ordinary answer, not an error: the result simply holds
/// no [`Stat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExistsResult {
    stat: Option<Stat>,
}

impl ExistsResult {
    pub fn new(stat: Option<Stat>) -> Self {
        Self { stat }
    }

    pub fn present(stat: Stat) -> Self {
        Self { stat: Some(stat) }
    }

    pub fn absent() -> Self {
        Self { stat: None }
    }

    pub fn stat(&self) -> Option<&Stat> {
        self.stat.as_ref()
    }

    pub fn exists(&self) -> bool {
        self.stat.is_some()
    }

    pub fn into_stat(self) -> Option<Stat> {
        self.stat
    }
}

impl From<Option<Stat>> for ExistsResult {
    fn from(stat: Option<Stat>) -> Self {
        Self::new(stat)
    }
}

impl From<ExistsResult> for bool {
    fn from(result: ExistsResult) -> Self {
        result.exists()
    }
}

impl fmt::Display for ExistsResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.stat {
            Some(stat) => write!(f, "exists_result{{{stat}}}"),
            None => f.write_str("exists_result{(no)}"),
        }
    }
}

/// Outcome of reading a node's access rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetAclResult {
    acl: Acl,
    stat: Stat,
}

impl GetAclResult {
    pub fn new(
        acl: Acl,
        stat: Stat,
    ) -> Self {
        Self { acl, stat }
    }

    pub fn acl(&self) -> &Acl {
        &self.acl
    }

    pub fn stat(&self) -> &Stat {
        &self.stat
    }

    pub fn into_parts(self) -> (Acl, Stat) {
        (self.acl, self.stat)
    }
}

impl fmt::Display for GetAclResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "get_acl_result{{{} {}}}", self.acl, self.stat)
    }
}
