//! Row types for the eight tables
//!
//! Each table has a read type (one full row, as returned by `SELECT *`) and a
//! `New*` insert type. Insert types leave out the generated primary key, and
//! hold columns with a database default as `Option` so `None` falls back to
//! the column default.
//!
//! Defaulted columns are nullable: the default only applies when the column
//! is left out of the INSERT, and an explicit NULL is stored as NULL. Read
//! types therefore hold those columns as `Option` as well.

use super::enums::{DeliveryStatus, OrderStatus, PaymentMethod, PaymentStatus};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A customer account (`Users`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    /// Unique across all users
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

/// A restaurant (`Restaurants`).
///
/// `rating` is stored as given and is never recomputed from `Reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub restaurant_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub cuisine_type: String,
    pub rating: Option<f64>,
    pub is_active: Option<bool>,
    pub opening_hours: NaiveTime,
    pub closing_hours: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub cuisine_type: String,
    /// Defaults to 0.0
    pub rating: Option<f64>,
    /// Defaults to true
    pub is_active: Option<bool>,
    pub opening_hours: NaiveTime,
    pub closing_hours: NaiveTime,
}

/// A dish offered by one restaurant (`Menu_Items`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_available: Option<bool>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    /// Defaults to true
    pub is_available: Option<bool>,
    pub image_url: Option<String>,
}

/// A courier (`Delivery_Partners`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPartner {
    pub partner_id: i64,
    pub name: String,
    /// Unique across all partners
    pub phone: String,
    pub vehicle_type: String,
    pub is_available: Option<bool>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDeliveryPartner {
    pub name: String,
    pub phone: String,
    pub vehicle_type: String,
    pub is_available: Option<bool>,
    pub rating: Option<f64>,
}

/// An order placed by a user at a restaurant (`Orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub order_time: Option<NaiveDateTime>,
    pub total_amount: f64,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: i64,
    pub restaurant_id: i64,
    /// Defaults to the insert time
    pub order_time: Option<NaiveDateTime>,
    pub total_amount: f64,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: PaymentMethod,
}

/// One line of an order (`Order_Items`).
///
/// `item_price` is a copy taken at order time; later changes to
/// `Menu_Items.price` do not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub item_price: f64,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub item_price: f64,
    pub special_instructions: Option<String>,
}

/// Courier assignment for an order (`Delivery`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub delivery_id: i64,
    pub order_id: i64,
    pub partner_id: i64,
    pub pickup_time: Option<NaiveDateTime>,
    pub delivery_time: Option<NaiveDateTime>,
    pub delivery_status: Option<DeliveryStatus>,
    pub delivery_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDelivery {
    pub order_id: i64,
    pub partner_id: i64,
    pub pickup_time: Option<NaiveDateTime>,
    pub delivery_time: Option<NaiveDateTime>,
    pub delivery_status: Option<DeliveryStatus>,
    pub delivery_fee: f64,
}

/// A user's review of a restaurant (`Reviews`). `rating` is 1 to 5 inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: i64,
    pub restaurant_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
}
