//! # Order Model
//!
//! Immutable customer-order records with exact decimal totals.
//!
//! ## Architecture
//!
//! The crate is a single core layer:
//!
//! 1. **Shared** — identifier newtypes, money parse/format helpers
//! 2. **Domain** — the `order` vertical slice: domain type, wire type,
//!    conversions, state container
//!
//! ## Quick Start
//!
//! ```rust
//! use order_model::prelude::*;
//! use rust_decimal::Decimal;
//! use std::collections::BTreeMap;
//!
//! let order = Order::new(
//!     "ORD-1",
//!     "CUST-42",
//!     vec![101, 102],
//!     vec![7, 8, 9],
//!     Decimal::new(19999, 2),
//!     BTreeMap::from([("priority".to_string(), 1)]),
//! );
//!
//! assert_eq!(order.id().as_str(), "ORD-1");
//! assert_eq!(order.items(), [101, 102]);
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Shared newtypes and utilities used across all domain modules.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified model error types.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CustomerId, OrderId};

    // Money helpers
    pub use crate::shared::{format_money, parse_money};

    // Domain types — order
    pub use crate::domain::order::{CustomerOrders, Order};

    // Errors
    pub use crate::error::ModelError;
}
