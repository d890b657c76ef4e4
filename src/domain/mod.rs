//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching the external feed
//! - `convert.rs` — `From` conversions between wire and domain types
//! - `state.rs` — State containers with update methods

pub mod order;
