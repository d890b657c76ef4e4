//! Order state containers — app-owned, update logic provided here.

use std::collections::HashMap;

use super::Order;
use crate::shared::{CustomerId, OrderId};

/// Tracks known orders grouped by customer.
///
/// The records themselves stay immutable; the container is the mutable unit.
/// The app owns instances of this type and synchronizes access externally.
#[derive(Debug, Clone)]
pub struct CustomerOrders {
    orders: HashMap<CustomerId, Vec<Order>>,
}

impl CustomerOrders {
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    pub fn get(&self, customer: &CustomerId) -> Option<&[Order]> {
        self.orders.get(customer).map(Vec::as_slice)
    }

    /// Insert an order, replacing any existing record with the same id for
    /// that customer.
    pub fn upsert(&mut self, order: Order) {
        let customer_orders = self
            .orders
            .entry(order.customer_id().clone())
            .or_default();

        let before = customer_orders.len();
        customer_orders.retain(|o| o.id() != order.id());
        if customer_orders.len() < before {
            tracing::debug!("Replacing order {}", order.id());
        }
        customer_orders.push(order);
    }

    /// Remove an order by id across all customers.
    pub fn remove(&mut self, id: &OrderId) {
        self.orders.values_mut().for_each(|orders| {
            orders.retain(|o| o.id() != id);
        });
    }

    /// Clear all orders.
    pub fn clear(&mut self) {
        self.orders.clear();
    }

    /// Total number of tracked orders.
    pub fn len(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }

    /// Check if any orders are tracked.
    pub fn is_empty(&self) -> bool {
        self.orders.values().all(|v| v.is_empty())
    }
}

impl Default for CustomerOrders {
    fn default() -> Self {
        Self::new()
    }
}
