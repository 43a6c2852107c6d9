//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - Users, Restaurants, Menu_Items, Delivery_Partners
//! - Orders(user_id, restaurant_id), Order_Items(order_id, item_id)
//! - Delivery(order_id, partner_id), Reviews(user_id, restaurant_id)

pub mod schema;
pub mod seed;
pub mod sqlite;

pub use sqlite::{ColumnInfo, DbStats, ResultSet, SqliteStore, TableCount};
