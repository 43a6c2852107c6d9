//! Data model - typed rows and enumeration columns

pub mod entities;
pub mod enums;

pub use entities::{
    Delivery, DeliveryPartner, MenuItem, NewDelivery, NewDeliveryPartner, NewMenuItem, NewOrder,
    NewOrderItem, NewRestaurant, NewReview, NewUser, Order, OrderItem, Restaurant, Review, User,
};
pub use enums::{DeliveryStatus, OrderStatus, PaymentMethod, PaymentStatus};
