//! Node-level values carried by operation results
//!
//! - [`Stat`] - metadata stamp returned with every read and write
//! - [`Permission`], [`AclRule`], [`Acl`] - access rules
//! - [`EventType`], [`State`] - the two halves of a watch notification

mod acl;
mod kinds;
mod stat;

pub use acl::*;
pub use kinds::*;
pub use stat::*;

/// Raw node data.
pub type Buffer = bytes::Bytes;

#[cfg(test)]
mod types_test;
