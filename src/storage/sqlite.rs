//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, Row, params};
use rusqlite::types::{ToSql, ValueRef};
use serde::Serialize;
use crate::{Error, Result};
use crate::model::{
    Delivery, DeliveryPartner, MenuItem, NewDelivery, NewDeliveryPartner, NewMenuItem, NewOrder,
    NewOrderItem, NewRestaurant, NewReview, NewUser, Order, OrderItem, Restaurant, Review, User,
};
use super::{schema, seed};

/// SQLite-backed storage for the food-delivery schema
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::debug!("Opened database at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        // SQLite ignores FOREIGN KEY clauses unless enabled per connection
        self.conn.pragma_update(None, "foreign_keys", true)?;
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Raw connection, for statements the typed API does not cover
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Seed Data ==========

    /// Load the demonstration rows in one transaction.
    ///
    /// Requires every table to be empty. The seed rows carry their own ids,
    /// so a database emptied by deletes seeds the same way as a fresh one.
    pub fn seed(&mut self) -> Result<()> {
        if !self.is_empty()? {
            return Err(Error::NotEmpty);
        }

        let tx = self.conn.transaction()?;
        for stmt in seed::all_seed_statements() {
            tx.execute(stmt, [])?;
        }
        tx.commit()?;

        tracing::info!("Loaded seed data");
        Ok(())
    }

    /// True when no table holds any row
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.stats()?.total() == 0)
    }

    // ========== Insert Operations ==========

    /// Insert a user, returning the generated `user_id`
    pub fn insert_user(&self, user: &NewUser) -> Result<i64> {
        InsertBuilder::new("Users")
            .value("name", &user.name)
            .value("email", &user.email)
            .value("phone", &user.phone)
            .value("address", &user.address)
            .value("password", &user.password)
            .execute(&self.conn)
    }

    /// Insert a restaurant, returning the generated `restaurant_id`
    pub fn insert_restaurant(&self, restaurant: &NewRestaurant) -> Result<i64> {
        InsertBuilder::new("Restaurants")
            .value("name", &restaurant.name)
            .value("address", &restaurant.address)
            .value("phone", &restaurant.phone)
            .value("cuisine_type", &restaurant.cuisine_type)
            .value_or_default("rating", &restaurant.rating)
            .value_or_default("is_active", &restaurant.is_active)
            .value("opening_hours", &restaurant.opening_hours)
            .value("closing_hours", &restaurant.closing_hours)
            .execute(&self.conn)
    }

    /// Insert a menu item, returning the generated `item_id`
    pub fn insert_menu_item(&self, item: &NewMenuItem) -> Result<i64> {
        InsertBuilder::new("Menu_Items")
            .value("restaurant_id", &item.restaurant_id)
            .value("name", &item.name)
            .value("description", &item.description)
            .value("price", &item.price)
            .value("category", &item.category)
            .value_or_default("is_available", &item.is_available)
            .value("image_url", &item.image_url)
            .execute(&self.conn)
    }

    /// Insert a delivery partner, returning the generated `partner_id`
    pub fn insert_delivery_partner(&self, partner: &NewDeliveryPartner) -> Result<i64> {
        InsertBuilder::new("Delivery_Partners")
            .value("name", &partner.name)
            .value("phone", &partner.phone)
            .value("vehicle_type", &partner.vehicle_type)
            .value_or_default("is_available", &partner.is_available)
            .value_or_default("rating", &partner.rating)
            .execute(&self.conn)
    }

    /// Insert an order, returning the generated `order_id`
    pub fn insert_order(&self, order: &NewOrder) -> Result<i64> {
        InsertBuilder::new("Orders")
            .value("user_id", &order.user_id)
            .value("restaurant_id", &order.restaurant_id)
            .value_or_default("order_time", &order.order_time)
            .value("total_amount", &order.total_amount)
            .value_or_default("status", &order.status)
            .value_or_default("payment_status", &order.payment_status)
            .value("payment_method", &order.payment_method)
            .execute(&self.conn)
    }

    /// Insert an order line, returning the generated `order_item_id`
    pub fn insert_order_item(&self, item: &NewOrderItem) -> Result<i64> {
        InsertBuilder::new("Order_Items")
            .value("order_id", &item.order_id)
            .value("item_id", &item.item_id)
            .value("quantity", &item.quantity)
            .value("item_price", &item.item_price)
            .value("special_instructions", &item.special_instructions)
            .execute(&self.conn)
    }

    /// Insert a delivery, returning the generated `delivery_id`
    pub fn insert_delivery(&self, delivery: &NewDelivery) -> Result<i64> {
        InsertBuilder::new("Delivery")
            .value("order_id", &delivery.order_id)
            .value("partner_id", &delivery.partner_id)
            .value("pickup_time", &delivery.pickup_time)
            .value("delivery_time", &delivery.delivery_time)
            .value_or_default("delivery_status", &delivery.delivery_status)
            .value("delivery_fee", &delivery.delivery_fee)
            .execute(&self.conn)
    }

    /// Insert a review, returning the generated `review_id`
    pub fn insert_review(&self, review: &NewReview) -> Result<i64> {
        InsertBuilder::new("Reviews")
            .value("user_id", &review.user_id)
            .value("restaurant_id", &review.restaurant_id)
            .value("rating", &review.rating)
            .value("comment", &review.comment)
            .execute(&self.conn)
    }

    // ========== Select Operations ==========

    /// `SELECT * FROM Users`
    pub fn list_users(&self) -> Result<Vec<User>> {
        self.list("SELECT * FROM Users ORDER BY user_id", |row| self.row_to_user(row))
    }

    /// `SELECT * FROM Restaurants`
    pub fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.list("SELECT * FROM Restaurants ORDER BY restaurant_id", |row| {
            self.row_to_restaurant(row)
        })
    }

    /// `SELECT * FROM Menu_Items`
    pub fn list_menu_items(&self) -> Result<Vec<MenuItem>> {
        self.list("SELECT * FROM Menu_Items ORDER BY item_id", |row| {
            self.row_to_menu_item(row)
        })
    }

    /// `SELECT * FROM Delivery_Partners`
    pub fn list_delivery_partners(&self) -> Result<Vec<DeliveryPartner>> {
        self.list("SELECT * FROM Delivery_Partners ORDER BY partner_id", |row| {
            self.row_to_delivery_partner(row)
        })
    }

    /// `SELECT * FROM Orders`
    pub fn list_orders(&self) -> Result<Vec<Order>> {
        self.list("SELECT * FROM Orders ORDER BY order_id", |row| self.row_to_order(row))
    }

    /// `SELECT * FROM Order_Items`
    pub fn list_order_items(&self) -> Result<Vec<OrderItem>> {
        self.list("SELECT * FROM Order_Items ORDER BY order_item_id", |row| {
            self.row_to_order_item(row)
        })
    }

    /// `SELECT * FROM Delivery`
    pub fn list_deliveries(&self) -> Result<Vec<Delivery>> {
        self.list("SELECT * FROM Delivery ORDER BY delivery_id", |row| {
            self.row_to_delivery(row)
        })
    }

    /// `SELECT * FROM Reviews`
    pub fn list_reviews(&self) -> Result<Vec<Review>> {
        self.list("SELECT * FROM Reviews ORDER BY review_id", |row| self.row_to_review(row))
    }

    fn list<T, F>(&self, sql: &str, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], map)?.collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }

    /// Untyped `SELECT *` over any schema table, in primary-key order
    pub fn select_all(&self, table: &str) -> Result<ResultSet> {
        let table = schema::resolve_table(table)?;
        let mut stmt = self.conn.prepare(&format!("SELECT * FROM {} ORDER BY rowid", table))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut result = ResultSet {
            table: table.to_string(),
            columns,
            rows: Vec::new(),
        };

        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(result.columns.len());
            for idx in 0..result.columns.len() {
                values.push(value_to_json(row.get_ref(idx)?));
            }
            result.rows.push(values);
        }

        Ok(result)
    }

    // ========== Delete Operations ==========

    /// Delete a restaurant. Fails with a foreign-key violation while any
    /// menu item, order or review still refers to it (no cascade).
    pub fn delete_restaurant(&self, restaurant_id: i64) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM Restaurants WHERE restaurant_id = ?1",
            params![restaurant_id],
        )?;
        Ok(deleted)
    }

    // ========== Catalog ==========

    /// `SHOW TABLES`
    pub fn tables(&self) -> Result<Vec<String>> {
        self.list(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
            |row| row.get(0),
        )
    }

    /// `DESC <table>`
    pub fn describe(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let table = schema::resolve_table(table)?;
        self.list(&format!("PRAGMA table_info({})", table), |row| {
            let pk: i64 = row.get("pk")?;
            Ok(ColumnInfo {
                name: row.get("name")?,
                decl_type: row.get("type")?,
                not_null: row.get("notnull")?,
                default_value: row.get("dflt_value")?,
                primary_key: pk > 0,
            })
        })
    }

    /// Count rows in one table
    pub fn count(&self, table: &str) -> Result<usize> {
        let table = schema::resolve_table(table)?;
        let count: i64 = self.conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        let mut tables = Vec::with_capacity(schema::TABLES.len());
        for table in schema::TABLES {
            tables.push(TableCount {
                table: table.to_string(),
                rows: self.count(table)?,
            });
        }
        Ok(DbStats { tables })
    }

    // ========== Row Mapping ==========

    fn row_to_user(&self, row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            address: row.get("address")?,
            password: row.get("password")?,
            created_at: row.get("created_at")?,
        })
    }

    fn row_to_restaurant(&self, row: &Row) -> rusqlite::Result<Restaurant> {
        Ok(Restaurant {
            restaurant_id: row.get("restaurant_id")?,
            name: row.get("name")?,
            address: row.get("address")?,
            phone: row.get("phone")?,
            cuisine_type: row.get("cuisine_type")?,
            rating: row.get("rating")?,
            is_active: row.get("is_active")?,
            opening_hours: row.get("opening_hours")?,
            closing_hours: row.get("closing_hours")?,
        })
    }

    fn row_to_menu_item(&self, row: &Row) -> rusqlite::Result<MenuItem> {
        Ok(MenuItem {
            item_id: row.get("item_id")?,
            restaurant_id: row.get("restaurant_id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            price: row.get("price")?,
            category: row.get("category")?,
            is_available: row.get("is_available")?,
            image_url: row.get("image_url")?,
        })
    }

    fn row_to_delivery_partner(&self, row: &Row) -> rusqlite::Result<DeliveryPartner> {
        Ok(DeliveryPartner {
            partner_id: row.get("partner_id")?,
            name: row.get("name")?,
            phone: row.get("phone")?,
            vehicle_type: row.get("vehicle_type")?,
            is_available: row.get("is_available")?,
            rating: row.get("rating")?,
        })
    }

    fn row_to_order(&self, row: &Row) -> rusqlite::Result<Order> {
        Ok(Order {
            order_id: row.get("order_id")?,
            user_id: row.get("user_id")?,
            restaurant_id: row.get("restaurant_id")?,
            order_time: row.get("order_time")?,
            total_amount: row.get("total_amount")?,
            status: row.get("status")?,
            payment_status: row.get("payment_status")?,
            payment_method: row.get("payment_method")?,
        })
    }

    fn row_to_order_item(&self, row: &Row) -> rusqlite::Result<OrderItem> {
        Ok(OrderItem {
            order_item_id: row.get("order_item_id")?,
            order_id: row.get("order_id")?,
            item_id: row.get("item_id")?,
            quantity: row.get("quantity")?,
            item_price: row.get("item_price")?,
            special_instructions: row.get("special_instructions")?,
        })
    }

    fn row_to_delivery(&self, row: &Row) -> rusqlite::Result<Delivery> {
        Ok(Delivery {
            delivery_id: row.get("delivery_id")?,
            order_id: row.get("order_id")?,
            partner_id: row.get("partner_id")?,
            pickup_time: row.get("pickup_time")?,
            delivery_time: row.get("delivery_time")?,
            delivery_status: row.get("delivery_status")?,
            delivery_fee: row.get("delivery_fee")?,
        })
    }

    fn row_to_review(&self, row: &Row) -> rusqlite::Result<Review> {
        Ok(Review {
            review_id: row.get("review_id")?,
            user_id: row.get("user_id")?,
            restaurant_id: row.get("restaurant_id")?,
            rating: row.get("rating")?,
            comment: row.get("comment")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Single-row INSERT over the columns actually supplied.
///
/// Columns left out take their schema default, which is how `Option` fields
/// of the `New*` types map to `DEFAULT` values.
struct InsertBuilder<'a> {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<&'a dyn ToSql>,
}

impl<'a> InsertBuilder<'a> {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    fn value(mut self, column: &'static str, value: &'a dyn ToSql) -> Self {
        self.columns.push(column);
        self.values.push(value);
        self
    }

    fn value_or_default<T: ToSql + 'a>(self, column: &'static str, value: &'a Option<T>) -> Self {
        match value {
            Some(value) => self.value(column, value),
            None => self,
        }
    }

    fn sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.values.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        )
    }

    fn execute(self, conn: &Connection) -> Result<i64> {
        conn.execute(&self.sql(), rusqlite::params_from_iter(self.values.iter()))?;
        let id = conn.last_insert_rowid();
        tracing::debug!(table = self.table, id, "Inserted row");
        Ok(id)
    }
}

fn value_to_json(value: ValueRef<'_>) -> serde_json::Value {
    match value {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Integer(i) => serde_json::Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(text) => serde_json::Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(bytes) => {
            serde_json::Value::String(bytes.iter().map(|b| format!("{:02x}", b)).collect())
        }
    }
}

/// Rows of an untyped `SELECT *`
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl ResultSet {
    /// Rows as `column -> value` objects
    pub fn records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| self.columns.iter().cloned().zip(row.iter().cloned()).collect())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One column as reported by `DESC <table>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

/// Row count of one table
#[derive(Debug, Clone, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: usize,
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct DbStats {
    pub tables: Vec<TableCount>,
}

impl DbStats {
    /// Row count for `table`, matched case-insensitively
    pub fn get(&self, table: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|t| t.table.eq_ignore_ascii_case(table))
            .map(|t| t.rows)
    }

    pub fn total(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }
}
