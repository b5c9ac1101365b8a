//! Storage backends for [`PopularMap`](crate::PopularMap).

pub mod btree;
pub mod hashmap;
pub mod traits;

pub use traits::MapStore;
