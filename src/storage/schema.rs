//! Database schema definitions

use crate::{Error, Result};

/// SQL to create the Users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) NOT NULL UNIQUE,
    phone VARCHAR(50) NOT NULL,
    address TEXT NOT NULL,
    password VARCHAR(255) NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQL to create the Restaurants table
/// `DECIMAL(p,s)` has no effect on SQLite storage, so each decimal column
/// carries a CHECK for its precision and scale
pub const CREATE_RESTAURANTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Restaurants (
    restaurant_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL,
    address TEXT NOT NULL,
    phone VARCHAR(50) NOT NULL,
    cuisine_type VARCHAR(50) NOT NULL,
    rating DECIMAL(3,2) DEFAULT 0.0
        CHECK (rating >= 0 AND rating < 10 AND round(rating, 2) = rating),
    is_active BOOLEAN DEFAULT 1,
    opening_hours TIME NOT NULL,
    closing_hours TIME NOT NULL
)
"#;

/// SQL to create the Menu_Items table
pub const CREATE_MENU_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Menu_Items (
    item_id INTEGER PRIMARY KEY AUTOINCREMENT,
    restaurant_id INTEGER NOT NULL,
    name VARCHAR(100) NOT NULL,
    description TEXT,
    price DECIMAL(10,2) NOT NULL
        CHECK (abs(price) < 1e8 AND round(price, 2) = price),
    category VARCHAR(50) NOT NULL,
    is_available BOOLEAN DEFAULT 1,
    image_url VARCHAR(255),
    FOREIGN KEY (restaurant_id) REFERENCES Restaurants(restaurant_id)
)
"#;

/// SQL to create the Delivery_Partners table
pub const CREATE_DELIVERY_PARTNERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Delivery_Partners (
    partner_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL,
    phone VARCHAR(50) NOT NULL UNIQUE,
    vehicle_type VARCHAR(50) NOT NULL,
    is_available BOOLEAN DEFAULT 1,
    rating DECIMAL(3,2) DEFAULT 0.0
        CHECK (rating >= 0 AND rating < 10 AND round(rating, 2) = rating)
)
"#;

/// SQL to create the Orders table
/// The three enumeration columns carry their closed value sets as CHECKs
pub const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Orders (
    order_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    restaurant_id INTEGER NOT NULL,
    order_time DATETIME DEFAULT CURRENT_TIMESTAMP,
    total_amount DECIMAL(10,2) NOT NULL
        CHECK (abs(total_amount) < 1e8 AND round(total_amount, 2) = total_amount),
    status TEXT DEFAULT 'pending'
        CHECK (status IN ('pending', 'confirmed', 'preparing', 'out_for_delivery', 'delivered', 'cancelled')),
    payment_status TEXT DEFAULT 'pending'
        CHECK (payment_status IN ('pending', 'completed', 'failed', 'refunded')),
    payment_method TEXT NOT NULL
        CHECK (payment_method IN ('cash', 'credit_card', 'debit_card', 'upi', 'wallet')),
    FOREIGN KEY (user_id) REFERENCES Users(user_id),
    FOREIGN KEY (restaurant_id) REFERENCES Restaurants(restaurant_id)
)
"#;

/// SQL to create the Order_Items table
pub const CREATE_ORDER_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Order_Items (
    order_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id INTEGER NOT NULL,
    item_id INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    item_price DECIMAL(10,2) NOT NULL
        CHECK (abs(item_price) < 1e8 AND round(item_price, 2) = item_price),
    special_instructions TEXT,
    FOREIGN KEY (order_id) REFERENCES Orders(order_id),
    FOREIGN KEY (item_id) REFERENCES Menu_Items(item_id)
)
"#;

/// SQL to create the Delivery table
pub const CREATE_DELIVERY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Delivery (
    delivery_id INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id INTEGER NOT NULL,
    partner_id INTEGER NOT NULL,
    pickup_time DATETIME,
    delivery_time DATETIME,
    delivery_status TEXT DEFAULT 'assigned'
        CHECK (delivery_status IN ('assigned', 'picked_up', 'in_transit', 'delivered', 'cancelled')),
    delivery_fee DECIMAL(6,2) NOT NULL
        CHECK (abs(delivery_fee) < 1e4 AND round(delivery_fee, 2) = delivery_fee),
    FOREIGN KEY (order_id) REFERENCES Orders(order_id),
    FOREIGN KEY (partner_id) REFERENCES Delivery_Partners(partner_id)
)
"#;

/// SQL to create the Reviews table
/// No uniqueness on (user_id, restaurant_id): a user may review a restaurant repeatedly
pub const CREATE_REVIEWS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Reviews (
    review_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    restaurant_id INTEGER NOT NULL,
    rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
    comment TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES Users(user_id),
    FOREIGN KEY (restaurant_id) REFERENCES Restaurants(restaurant_id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_email ON Users(email)",
    "CREATE INDEX IF NOT EXISTS idx_cuisine ON Restaurants(cuisine_type)",
    "CREATE INDEX IF NOT EXISTS idx_rating ON Restaurants(rating)",
    "CREATE INDEX IF NOT EXISTS idx_category ON Menu_Items(category)",
    "CREATE INDEX IF NOT EXISTS idx_restaurant ON Menu_Items(restaurant_id)",
    "CREATE INDEX IF NOT EXISTS idx_availability ON Delivery_Partners(is_available)",
    "CREATE INDEX IF NOT EXISTS idx_user ON Orders(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_restaurant_order ON Orders(restaurant_id)",
    "CREATE INDEX IF NOT EXISTS idx_status ON Orders(status)",
    "CREATE INDEX IF NOT EXISTS idx_order_time ON Orders(order_time)",
    "CREATE INDEX IF NOT EXISTS idx_order ON Order_Items(order_id)",
    "CREATE INDEX IF NOT EXISTS idx_order_delivery ON Delivery(order_id)",
    "CREATE INDEX IF NOT EXISTS idx_partner ON Delivery(partner_id)",
    "CREATE INDEX IF NOT EXISTS idx_delivery_status ON Delivery(delivery_status)",
    "CREATE INDEX IF NOT EXISTS idx_user_review ON Reviews(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_restaurant_review ON Reviews(restaurant_id)",
];

/// Table names in creation order (parents before children)
pub const TABLES: &[&str] = &[
    "Users",
    "Restaurants",
    "Menu_Items",
    "Delivery_Partners",
    "Orders",
    "Order_Items",
    "Delivery",
    "Reviews",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_USERS_TABLE,
        CREATE_RESTAURANTS_TABLE,
        CREATE_MENU_ITEMS_TABLE,
        CREATE_DELIVERY_PARTNERS_TABLE,
        CREATE_ORDERS_TABLE,
        CREATE_ORDER_ITEMS_TABLE,
        CREATE_DELIVERY_TABLE,
        CREATE_REVIEWS_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

/// Resolve a user-supplied table name to its canonical spelling.
///
/// Matching is case-insensitive like SQL identifiers. Only names from
/// [`TABLES`] are ever interpolated into SQL text.
pub fn resolve_table(name: &str) -> Result<&'static str> {
    TABLES
        .iter()
        .copied()
        .find(|t| t.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownTable(name.to_string()))
}
