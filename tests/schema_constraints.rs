use chrono::NaiveTime;
use food_delivery::model::{
    NewDelivery, NewDeliveryPartner, NewMenuItem, NewOrder, NewOrderItem, NewRestaurant,
    NewReview, NewUser,
};
use food_delivery::{
    ConstraintKind, DeliveryStatus, Error, OrderStatus, PaymentMethod, PaymentStatus, SqliteStore,
};
use std::collections::BTreeSet;

/// One user, restaurant 3 under its seeded id and one partner, without the rest of the seed
const PARENTS: &str = r#"
INSERT INTO Users (user_id, name, email, phone, address, password)
    VALUES (2, 'Alice Smith', 'alice.smith@example.com', '8765432109', '456 Elm St, Town', 'alicepass');
INSERT INTO Restaurants (restaurant_id, name, address, phone, cuisine_type, opening_hours, closing_hours)
    VALUES (3, 'Sushi Heaven', '303 Ocean Ave, Village', '9765432101', 'Japanese', '11:00:00', '21:00:00');
INSERT INTO Delivery_Partners (partner_id, name, phone, vehicle_type)
    VALUES (1, 'Mike Brown', '9998887776', 'Bike');
"#;

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.seed().unwrap();
    store
}

fn order(
    status: Option<OrderStatus>,
    payment_status: Option<PaymentStatus>,
    payment_method: PaymentMethod,
) -> NewOrder {
    NewOrder {
        user_id: 2,
        restaurant_id: 3,
        order_time: None,
        total_amount: 1.0,
        status,
        payment_status,
        payment_method,
    }
}

fn review(rating: i64) -> NewReview {
    NewReview {
        user_id: 1,
        restaurant_id: 2,
        rating,
        comment: Some("Rated".to_string()),
    }
}

fn assert_constraint<T: std::fmt::Debug>(result: Result<T, Error>, expected: ConstraintKind) {
    match result {
        Err(err) => assert_eq!(err.constraint_kind(), Some(expected), "unexpected error: {}", err),
        Ok(value) => panic!("expected {} violation, got {:?}", expected, value),
    }
}

#[test]
fn duplicate_user_email_is_rejected() {
    let store = seeded_store();
    let result = store.insert_user(&NewUser {
        name: "Another John".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "1112223333".to_string(),
        address: "1 Other St".to_string(),
        password: "pw".to_string(),
    });
    assert_constraint(result, ConstraintKind::Unique);
    assert_eq!(store.count("Users").unwrap(), 3);
}

#[test]
fn duplicate_partner_phone_is_rejected() {
    let store = seeded_store();
    let result = store.insert_delivery_partner(&NewDeliveryPartner {
        name: "Copy Cat".to_string(),
        phone: "9998887776".to_string(),
        vehicle_type: "Bike".to_string(),
        is_available: None,
        rating: None,
    });
    assert_constraint(result, ConstraintKind::Unique);
}

#[test]
fn review_rating_is_bounded() {
    let store = seeded_store();

    assert_constraint(store.insert_review(&review(0)), ConstraintKind::Check);
    assert_constraint(store.insert_review(&review(6)), ConstraintKind::Check);

    for rating in 1..=5 {
        store.insert_review(&review(rating)).unwrap();
    }
    assert_eq!(store.list_reviews().unwrap().len(), 8);
}

#[test]
fn same_user_may_review_a_restaurant_twice() {
    let store = seeded_store();
    store.insert_review(&review(3)).unwrap();
    store.insert_review(&review(2)).unwrap();

    let reviews = store.list_reviews().unwrap();
    let repeats = reviews
        .iter()
        .filter(|r| r.user_id == 1 && r.restaurant_id == 2)
        .count();
    assert_eq!(repeats, 2);
}

#[test]
fn children_need_existing_parents() {
    let store = seeded_store();

    let order = NewOrder {
        user_id: 1,
        restaurant_id: 42,
        order_time: None,
        total_amount: 5.0,
        status: None,
        payment_status: None,
        payment_method: PaymentMethod::Cash,
    };
    assert_constraint(store.insert_order(&order), ConstraintKind::ForeignKey);

    let item = NewOrderItem {
        order_id: 99,
        item_id: 1,
        quantity: 2,
        item_price: 9.99,
        special_instructions: None,
    };
    assert_constraint(store.insert_order_item(&item), ConstraintKind::ForeignKey);

    let item = NewOrderItem {
        order_id: 1,
        item_id: 99,
        quantity: 1,
        item_price: 1.0,
        special_instructions: None,
    };
    assert_constraint(store.insert_order_item(&item), ConstraintKind::ForeignKey);

    let delivery = NewDelivery {
        order_id: 1,
        partner_id: 99,
        pickup_time: None,
        delivery_time: None,
        delivery_status: None,
        delivery_fee: 2.0,
    };
    assert_constraint(store.insert_delivery(&delivery), ConstraintKind::ForeignKey);

    let menu_item = NewMenuItem {
        restaurant_id: 99,
        name: "Ghost Dish".to_string(),
        description: None,
        price: 1.0,
        category: "None".to_string(),
        is_available: None,
        image_url: None,
    };
    assert_constraint(store.insert_menu_item(&menu_item), ConstraintKind::ForeignKey);
}

#[test]
fn payment_method_outside_enumeration_is_rejected() {
    let store = seeded_store();
    let result = store.connection().execute(
        "INSERT INTO Orders (user_id, restaurant_id, total_amount, payment_method) VALUES (1, 1, 10.0, 'bitcoin')",
        [],
    );
    let err: Error = result.unwrap_err().into();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));

    for method in PaymentMethod::all() {
        let order = NewOrder {
            user_id: 1,
            restaurant_id: 1,
            order_time: None,
            total_amount: 10.0,
            status: None,
            payment_status: None,
            payment_method: *method,
        };
        store.insert_order(&order).unwrap();
    }
}

#[test]
fn every_order_status_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.connection().execute_batch(PARENTS).unwrap();

    for status in OrderStatus::all() {
        store.insert_order(&order(Some(*status), None, PaymentMethod::Upi)).unwrap();
    }

    let stored: Vec<Option<OrderStatus>> = store.list_orders().unwrap().iter().map(|o| o.status).collect();
    let expected: Vec<Option<OrderStatus>> = OrderStatus::all().iter().copied().map(Some).collect();
    assert_eq!(stored, expected);
}

#[test]
fn every_payment_status_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.connection().execute_batch(PARENTS).unwrap();

    for status in PaymentStatus::all() {
        store.insert_order(&order(None, Some(*status), PaymentMethod::Wallet)).unwrap();
    }

    let stored: Vec<Option<PaymentStatus>> = store
        .list_orders()
        .unwrap()
        .iter()
        .map(|o| o.payment_status)
        .collect();
    let expected: Vec<Option<PaymentStatus>> = PaymentStatus::all().iter().copied().map(Some).collect();
    assert_eq!(stored, expected);
}

#[test]
fn every_payment_method_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.connection().execute_batch(PARENTS).unwrap();

    for method in PaymentMethod::all() {
        store.insert_order(&order(None, None, *method)).unwrap();
    }

    let stored: Vec<PaymentMethod> = store.list_orders().unwrap().iter().map(|o| o.payment_method).collect();
    assert_eq!(stored, PaymentMethod::all().to_vec());
}

#[test]
fn every_delivery_status_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.connection().execute_batch(PARENTS).unwrap();
    let order_id = store.insert_order(&order(None, None, PaymentMethod::Cash)).unwrap();

    for status in DeliveryStatus::all() {
        let delivery = NewDelivery {
            order_id,
            partner_id: 1,
            pickup_time: None,
            delivery_time: None,
            delivery_status: Some(*status),
            delivery_fee: 2.25,
        };
        store.insert_delivery(&delivery).unwrap();
    }

    let stored: Vec<Option<DeliveryStatus>> = store
        .list_deliveries()
        .unwrap()
        .iter()
        .map(|d| d.delivery_status)
        .collect();
    let expected: Vec<Option<DeliveryStatus>> = DeliveryStatus::all().iter().copied().map(Some).collect();
    assert_eq!(stored, expected);
}

#[test]
fn status_outside_enumeration_is_rejected() {
    let store = seeded_store();
    for sql in [
        "UPDATE Orders SET status = 'lost' WHERE order_id = 1",
        "UPDATE Orders SET payment_status = 'disputed' WHERE order_id = 1",
        "UPDATE Delivery SET delivery_status = 'returned' WHERE delivery_id = 1",
    ] {
        let err: Error = store.connection().execute(sql, []).unwrap_err().into();
        assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check), "{}", sql);
    }
}

#[test]
fn seeded_selects_match_literal_data() {
    let store = seeded_store();

    assert_eq!(store.list_orders().unwrap().len(), 3);

    let ratings: Vec<i64> = store.list_reviews().unwrap().iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![5, 4, 5]);

    let users = store.list_users().unwrap();
    assert_eq!(users[1].email, "alice.smith@example.com");

    let items = store.list_order_items().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[3].special_instructions.as_deref(), Some("No wasabi"));

    let menu = store.list_menu_items().unwrap();
    assert_eq!(menu.iter().filter(|m| m.restaurant_id == 2).count(), 2);

    let partners = store.list_delivery_partners().unwrap();
    assert_eq!(partners[2].vehicle_type, "Car");
}

#[test]
fn order_item_price_is_a_snapshot() {
    let store = seeded_store();
    store
        .connection()
        .execute("UPDATE Menu_Items SET price = 11.49 WHERE item_id = 1", [])
        .unwrap();

    let items = store.list_order_items().unwrap();
    assert!((items[0].item_price - 9.99).abs() < 1e-9);
}

#[test]
fn restaurant_with_menu_items_cannot_be_deleted() {
    let store = seeded_store();
    assert_constraint(store.delete_restaurant(1), ConstraintKind::ForeignKey);
    assert_eq!(store.count("Restaurants").unwrap(), 3);
}

#[test]
fn unreferenced_restaurant_can_be_deleted() {
    let store = seeded_store();
    let id = store
        .insert_restaurant(&NewRestaurant {
            name: "Pop-up".to_string(),
            address: "Market Square".to_string(),
            phone: "5550001111".to_string(),
            cuisine_type: "Street Food".to_string(),
            rating: Some(3.9),
            is_active: Some(false),
            opening_hours: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            closing_hours: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        })
        .unwrap();

    assert_eq!(store.delete_restaurant(id).unwrap(), 1);
    assert_eq!(store.delete_restaurant(id).unwrap(), 0);
}

#[test]
fn show_tables_lists_the_schema() {
    let store = SqliteStore::open_in_memory().unwrap();
    let tables: BTreeSet<String> = store.tables().unwrap().into_iter().collect();
    let expected: BTreeSet<String> = food_delivery::storage::schema::TABLES
        .iter()
        .map(|t| t.to_string())
        .collect();
    assert_eq!(tables, expected);
}

#[test]
fn file_database_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("food_delivery.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.seed().unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.count("orders").unwrap(), 3);
    assert!(!store.is_empty().unwrap());

    // Foreign keys are enforced on every new connection
    assert_constraint(store.delete_restaurant(2), ConstraintKind::ForeignKey);
}
