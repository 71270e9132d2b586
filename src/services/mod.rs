//! Services layer
//!
//! This module connects the pagination core to data:
//! - `ListSource`: where pages of entities come from
//! - `ListOwner`: holds a list's pagination state and publishes fetched pages into the store

pub mod list_owner;
pub mod source;

pub use list_owner::ListOwner;
pub use source::{ListSource, MemoryListSource};
