//! Immutable operation results
//!
//! Every asynchronous operation completes with one of these values:
//! - [`GetResult`] - node data and its stamp
//! - [`GetChildrenResult`] - child names and the parent's stamp
//! - [`ExistsResult`] - a stamp, or nothing if the node is missing
//! - [`CreateResult`] - the name the server created
//! - [`SetResult`] - the stamp after a write
//! - [`GetAclResult`] - access rules and their stamp
//! - [`Event`] - the notification a watch eventually delivers
//!
//! Values are built once by the transport and never change afterwards. Their
//! `Display` output is meant for logs and diagnostics and is not parsed back.

mod event;
mod read;
mod write;

pub use event::*;
pub use read::*;
pub use write::*;
