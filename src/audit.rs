//! Order/delivery status audit
//!
//! `Orders.status` and `Delivery.delivery_status` are independent columns and
//! the schema never correlates them. This module reads both and reports the
//! pairs that disagree under [`DeliveryStatus::is_consistent_with`]. It never
//! writes. A NULL status on either side has nothing to compare and is skipped.

use crate::model::{DeliveryStatus, OrderStatus};
use crate::storage::SqliteStore;
use crate::Result;
use serde::Serialize;
use std::collections::HashMap;

/// A delivery whose status does not fit its order's status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMismatch {
    pub order_id: i64,
    pub delivery_id: i64,
    pub order_status: OrderStatus,
    pub delivery_status: DeliveryStatus,
}

impl std::fmt::Display for StatusMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "order {} is {} but delivery {} is {}",
            self.order_id, self.order_status, self.delivery_id, self.delivery_status
        )
    }
}

/// All deliveries that disagree with their order, in delivery order
pub fn status_mismatches(store: &SqliteStore) -> Result<Vec<StatusMismatch>> {
    let orders: HashMap<i64, OrderStatus> = store
        .list_orders()?
        .into_iter()
        .filter_map(|order| Some((order.order_id, order.status?)))
        .collect();

    let mismatches: Vec<StatusMismatch> = store
        .list_deliveries()?
        .into_iter()
        .filter_map(|delivery| {
            let delivery_status = delivery.delivery_status?;
            let order_status = *orders.get(&delivery.order_id)?;
            (!delivery_status.is_consistent_with(order_status)).then(|| StatusMismatch {
                order_id: delivery.order_id,
                delivery_id: delivery.delivery_id,
                order_status,
                delivery_status,
            })
        })
        .collect();

    tracing::debug!("Status audit found {} mismatches", mismatches.len());
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewDelivery, NewOrder, PaymentMethod};

    #[test]
    fn test_seed_mismatches() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.seed().unwrap();

        let mismatches = status_mismatches(&store).unwrap();
        let order_ids: Vec<i64> = mismatches.iter().map(|m| m.order_id).collect();
        assert_eq!(order_ids, vec![2, 3]);
        assert_eq!(mismatches[0].order_status, OrderStatus::Confirmed);
        assert_eq!(mismatches[0].delivery_status, DeliveryStatus::Delivered);
        assert_eq!(
            mismatches[1].to_string(),
            "order 3 is preparing but delivery 3 is in_transit"
        );
    }

    #[test]
    fn test_consistent_pair_is_not_reported() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.seed().unwrap();

        let order_id = store
            .insert_order(&NewOrder {
                user_id: 1,
                restaurant_id: 2,
                order_time: None,
                total_amount: 8.99,
                status: Some(OrderStatus::OutForDelivery),
                payment_status: None,
                payment_method: PaymentMethod::DebitCard,
            })
            .unwrap();
        store
            .insert_delivery(&NewDelivery {
                order_id,
                partner_id: 2,
                pickup_time: None,
                delivery_time: None,
                delivery_status: Some(DeliveryStatus::PickedUp),
                delivery_fee: 1.5,
            })
            .unwrap();

        let mismatches = status_mismatches(&store).unwrap();
        assert!(mismatches.iter().all(|m| m.order_id != order_id));
        assert_eq!(mismatches.len(), 2);
    }

    #[test]
    fn test_null_statuses_are_skipped() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.seed().unwrap();

        // Order 2 and delivery 3 are the two seeded mismatches
        store
            .connection()
            .execute("UPDATE Orders SET status = NULL WHERE order_id = 2", [])
            .unwrap();
        store
            .connection()
            .execute("UPDATE Delivery SET delivery_status = NULL WHERE delivery_id = 3", [])
            .unwrap();

        assert!(status_mismatches(&store).unwrap().is_empty());
    }

    #[test]
    fn test_empty_database_has_no_mismatches() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(status_mismatches(&store).unwrap().is_empty());
    }
}
