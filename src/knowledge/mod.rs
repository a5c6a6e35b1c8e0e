//! Knowledge stores: the static response table and the dynamic
//! persistence-backed lookup.

mod dynamic_store;
mod static_store;

pub use dynamic_store::{MemoryResponseStore, ResponseStore, SqliteResponseStore};
pub use static_store::StaticResponseTable;
