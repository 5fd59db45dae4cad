//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and their helpers
//! - `wire.rs`: Raw serde structs, where the service shape differs from the domain type
//! - pure projections (`resolve.rs`, `series.rs`, `table.rs`, `state.rs`)
//! - `client.rs`: Sub-client with HTTP methods (feature `http`)
//! - `loader.rs`: View-level loaders that turn failures into a no-data state

pub mod commodity;
pub mod market;
pub mod price;
pub mod price_history;
pub mod stats;
pub mod ticker;
