use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::Stat;

/// Outcome of creating a node.
///
/// `name` is the path the server actually created, which differs from the
/// requested one for sequential nodes (`/queue/item-` becomes
/// `/queue/item-0000000007`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateResult {
    name: String,
}

impl CreateResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for CreateResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "create_result{{name={}}}", self.name)
    }
}

/// Outcome of writing a node's data; holds the stamp after the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetResult {
    stat: Stat,
}

impl SetResult {
    pub fn new(stat: Stat) -> Self {
        Self { stat }
    }

    pub fn stat(&self) -> &Stat {
        &self.stat
    }

    pub fn into_stat(self) -> Stat {
        self.stat
    }
}

impl fmt::Display for SetResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "set_result{{{}}}", self.stat)
    }
}
