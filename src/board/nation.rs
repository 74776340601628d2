//! Nations and their submitted orders.

use serde::{Deserialize, Serialize};

use super::order::Order;

/// A party in the game: its name, home regions, and this phase's orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nation {
    pub name: String,
    pub home_regions: Vec<String>,
    orders: Vec<Order>,
}

impl Nation {
    pub fn new(name: &str, home_regions: &[&str]) -> Self {
        Nation {
            name: name.to_string(),
            home_regions: home_regions.iter().map(|k| k.to_string()).collect(),
            orders: Vec::new(),
        }
    }

    /// Orders in submission order, at most one per position.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The order given to the unit at `position`, if any.
    pub fn order_at(&self, position: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.position() == position)
    }

    /// Stores `order`, replacing an earlier order for the same position in
    /// its original slot. Returns the replaced order.
    pub fn record_order(&mut self, order: Order) -> Option<Order> {
        match self
            .orders
            .iter_mut()
            .find(|o| o.position() == order.position())
        {
            Some(slot) => Some(std::mem::replace(slot, order)),
            None => {
                self.orders.push(order);
                None
            }
        }
    }

    pub fn clear_orders(&mut self) {
        self.orders.clear();
    }
}
