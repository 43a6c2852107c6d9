//! Demonstration rows
//!
//! Loaded once into an empty database. Every row names its primary key, so
//! the foreign keys below hold even when AUTOINCREMENT has already handed out
//! ids to rows that were later deleted.

pub const SEED_USERS: &str = r#"
INSERT INTO Users (user_id, name, email, phone, address, password) VALUES
    (1, 'John Doe', 'john.doe@example.com', '9876543210', '123 Main St, City', 'password123'),
    (2, 'Alice Smith', 'alice.smith@example.com', '8765432109', '456 Elm St, Town', 'alicepass'),
    (3, 'Bob Johnson', 'bob.johnson@example.com', '7654321098', '789 Pine St, Village', 'bobsecure')
"#;

pub const SEED_RESTAURANTS: &str = r#"
INSERT INTO Restaurants (restaurant_id, name, address, phone, cuisine_type, rating, opening_hours, closing_hours) VALUES
    (1, 'Tasty Bites', '101 Food Lane, City', '9988776655', 'Italian', 4.5, '10:00:00', '22:00:00'),
    (2, 'Spice Garden', '202 Spicy Road, Town', '9876543211', 'Indian', 4.7, '09:00:00', '23:00:00'),
    (3, 'Sushi Heaven', '303 Ocean Ave, Village', '9765432101', 'Japanese', 4.8, '11:00:00', '21:00:00')
"#;

pub const SEED_MENU_ITEMS: &str = r#"
INSERT INTO Menu_Items (item_id, restaurant_id, name, description, price, category, is_available, image_url) VALUES
    (1, 1, 'Margherita Pizza', 'Classic pizza with fresh tomatoes, mozzarella, and basil', 9.99, 'Pizza', 1, 'https://example.com/pizza.jpg'),
    (2, 1, 'Pasta Alfredo', 'Creamy Alfredo sauce with fettuccine pasta', 12.99, 'Pasta', 1, 'https://example.com/pasta.jpg'),
    (3, 2, 'Butter Chicken', 'Rich and creamy butter chicken with naan', 14.99, 'Indian Main Course', 1, 'https://example.com/butterchicken.jpg'),
    (4, 2, 'Paneer Tikka', 'Grilled paneer cubes marinated in spices', 8.99, 'Appetizer', 1, 'https://example.com/paneer.jpg'),
    (5, 3, 'Sushi Platter', 'Assorted fresh sushi rolls with soy sauce', 19.99, 'Sushi', 1, 'https://example.com/sushi.jpg')
"#;

pub const SEED_DELIVERY_PARTNERS: &str = r#"
INSERT INTO Delivery_Partners (partner_id, name, phone, vehicle_type, is_available, rating) VALUES
    (1, 'Mike Brown', '9998887776', 'Bike', 1, 4.6),
    (2, 'Sarah Lee', '8887776665', 'Scooter', 1, 4.8),
    (3, 'David Kim', '7776665554', 'Car', 1, 4.5)
"#;

pub const SEED_ORDERS: &str = r#"
INSERT INTO Orders (order_id, user_id, restaurant_id, total_amount, status, payment_status, payment_method) VALUES
    (1, 1, 1, 22.98, 'pending', 'pending', 'credit_card'),
    (2, 2, 2, 14.99, 'confirmed', 'completed', 'cash'),
    (3, 3, 3, 19.99, 'preparing', 'completed', 'upi')
"#;

pub const SEED_ORDER_ITEMS: &str = r#"
INSERT INTO Order_Items (order_item_id, order_id, item_id, quantity, item_price, special_instructions) VALUES
    (1, 1, 1, 1, 9.99, 'Extra cheese'),
    (2, 1, 2, 1, 12.99, 'Less salt'),
    (3, 2, 3, 1, 14.99, 'Spicy'),
    (4, 3, 5, 1, 19.99, 'No wasabi')
"#;

pub const SEED_DELIVERY: &str = r#"
INSERT INTO Delivery (delivery_id, order_id, partner_id, pickup_time, delivery_time, delivery_status, delivery_fee) VALUES
    (1, 1, 1, CURRENT_TIMESTAMP, NULL, 'assigned', 2.50),
    (2, 2, 2, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP, 'delivered', 3.00),
    (3, 3, 3, CURRENT_TIMESTAMP, NULL, 'in_transit', 2.75)
"#;

pub const SEED_REVIEWS: &str = r#"
INSERT INTO Reviews (review_id, user_id, restaurant_id, rating, comment) VALUES
    (1, 1, 1, 5, 'Amazing food! Highly recommended.'),
    (2, 2, 2, 4, 'Great taste, but a bit spicy for me.'),
    (3, 3, 3, 5, 'Best sushi in town!')
"#;

/// Seed statements in dependency order
pub fn all_seed_statements() -> Vec<&'static str> {
    vec![
        SEED_USERS,
        SEED_RESTAURANTS,
        SEED_MENU_ITEMS,
        SEED_DELIVERY_PARTNERS,
        SEED_ORDERS,
        SEED_ORDER_ITEMS,
        SEED_DELIVERY,
        SEED_REVIEWS,
    ]
}
