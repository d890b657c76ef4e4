//! Order domain — immutable order records, per-customer tracking.

mod convert;
pub mod state;
pub mod wire;

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::shared::{CustomerId, OrderId};

pub use state::CustomerOrders;

// ─── Order ───────────────────────────────────────────────────────────────────

/// An immutable customer-order record.
///
/// Constructed once with all six fields and never mutated afterwards: fields
/// are private, accessors hand out borrows, and no mutating method exists.
/// Instances are therefore safe to share across threads without
/// synchronization.
///
/// Equality is field-wise: sequences compare element-wise in order, the
/// delivery map compares by key/value set, and `total` compares numerically
/// (`199.99 == 199.990`). The `Display` rendering is deterministic, with
/// delivery keys in sorted order; it is diagnostic only, not a parse format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<i32>,
    codes: Vec<i32>,
    total: Decimal,
    delivery: BTreeMap<String, i32>,
}

impl Order {
    /// Build a record from its six fields. No validation is performed.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<i32>,
        codes: Vec<i32>,
        total: Decimal,
        delivery: BTreeMap<String, i32>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
            codes,
            total,
            delivery,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Item reference codes, in order-line sequence. Duplicates permitted.
    pub fn items(&self) -> &[i32] {
        &self.items
    }

    /// Secondary numeric codes, independent of `items`.
    pub fn codes(&self) -> &[i32] {
        &self.codes
    }

    /// Monetary total. No currency, sign, or range constraint.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Delivery attributes keyed by name. No schema is enforced on the key
    /// set.
    pub fn delivery(&self) -> &BTreeMap<String, i32> {
        &self.delivery
    }

    /// Decode a record from feed JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let record: wire::OrderRecord = serde_json::from_str(json)?;
        Ok(record.into())
    }

    /// Encode the record as feed JSON.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&wire::OrderRecord::from(
            self.clone(),
        ))?)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {{ id: {}, customer: {}, items: {:?}, codes: {:?}, total: {}, delivery: {{",
            self.id, self.customer_id, self.items, self.codes, self.total
        )?;
        for (i, (key, value)) in self.delivery.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}} }}")
    }
}
