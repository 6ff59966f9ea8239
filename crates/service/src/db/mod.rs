//! SeaORM data access used by the `SeaOrm*Repository` implementations.
//!
//! Functions take any `ConnectionTrait` so they run the same on a pooled
//! connection or inside a transaction.

pub mod airline_store;
pub mod airport_store;
