//! Wire types for the order feed.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::{serde_util, CustomerId, OrderId};

/// Raw order record as it appears on the feed.
///
/// Field names are camelCase on the wire. The monetary total travels as an
/// exact decimal string; bare JSON numbers are accepted on input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<i32>,
    pub codes: Vec<i32>,
    #[serde(with = "serde_util::money_compat")]
    pub total: Decimal,
    pub delivery: BTreeMap<String, i32>,
}
