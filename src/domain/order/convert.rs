//! Conversions: feed wire records ⇄ Order domain types.

use super::wire;
use super::Order;

impl From<wire::OrderRecord> for Order {
    fn from(record: wire::OrderRecord) -> Self {
        Order {
            id: record.id,
            customer_id: record.customer_id,
            items: record.items,
            codes: record.codes,
            total: record.total,
            delivery: record.delivery,
        }
    }
}

impl From<Order> for wire::OrderRecord {
    fn from(order: Order) -> Self {
        wire::OrderRecord {
            id: order.id,
            customer_id: order.customer_id,
            items: order.items,
            codes: order.codes,
            total: order.total,
            delivery: order.delivery,
        }
    }
}
