use eshop::console::{Console, GOODBYE};
use eshop::lifecycle::EshopSystem;
use eshop::model::Product;
use eshop::product_store::ProductError;

/// Runs one scripted session against `system` and returns everything printed.
async fn session(system: &EshopSystem, script: &str) -> String {
    let mut out = Vec::new();
    Console::new(
        script.as_bytes(),
        &mut out,
        system.product_client.clone(),
        system.order_client.clone(),
    )
    .run()
    .await
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_add_product_then_order() {
    let system = EshopSystem::in_memory(32);
    let script = "\
1
P1
Mug
M
9.99
5
P1
3
done
1 Main St
0
";
    let out = session(&system, script).await;

    assert!(out.contains("Product added successfully."));
    assert!(out.contains("Creating order 1"));
    assert!(out.contains("Order added successfully."));
    assert!(out.contains("Delivery Address: 1 Main St"));
    assert!(out.contains("Total Amount: 29.97"));
    assert!(out.trim_end().ends_with(GOODBYE));

    let orders = system.order_client.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items[0].quantity, 3);
    assert!((orders[0].total_amount - 29.97).abs() < 1e-9);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_menu_choice_and_end_of_input() {
    let system = EshopSystem::in_memory(32);
    let out = session(&system, "9\n").await;

    assert!(out.contains("Invalid choice. Please try again."));
    // The menu is shown again before input runs out.
    assert_eq!(out.matches("0. Exit").count(), 2);
    assert!(out.trim_end().ends_with(GOODBYE));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_empty_collections() {
    let system = EshopSystem::in_memory(32);
    let out = session(&system, "2\n6\n0\n").await;

    assert!(out.contains("No products found."));
    assert!(out.contains("No orders found."));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_products_table() {
    let system = EshopSystem::in_memory(32);
    system
        .product_client
        .add_product(Product::new("P1", "Mug", "M", 9.99))
        .await
        .unwrap();
    system
        .product_client
        .add_product(Product::new("P2", "Plate", "L", 2.5))
        .await
        .unwrap();

    let out = session(&system, "2\n0\n").await;
    assert!(out.contains("| No | Product ID | Product Name | Size | Price |"));
    assert!(out.contains("|  1 | P1         | Mug          | M    |  9.99 |"));
    assert!(out.contains("|  2 | P2         | Plate        | L    |  2.50 |"));
    assert!(out.contains("Total products: 2"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bad_price_adds_nothing() {
    let system = EshopSystem::in_memory(32);
    let out = session(&system, "1\nP1\nMug\nM\ncheap\n1\nP2\nCup\nS\n-3\n0\n").await;

    assert!(out.contains("Invalid price: 'cheap' is not a number. Product not added."));
    assert!(out.contains("Invalid price: price must not be negative, got -3. Product not added."));
    assert!(system.product_client.list_products().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_product_is_reported() {
    let system = EshopSystem::in_memory(32);
    let out = session(&system, "1\nP1\nMug\nM\n9.99\n1\nP1\nCup\nS\n1\n0\n").await;

    assert!(out.contains("Product ID already exists: P1"));
    let products = system.product_client.list_products().await.unwrap();
    assert_eq!(products, vec![Product::new("P1", "Mug", "M", 9.99)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_product_keeps_empty_fields() {
    let system = EshopSystem::in_memory(32);
    system
        .product_client
        .add_product(Product::new("P1", "Mug", "M", 9.99))
        .await
        .unwrap();

    // id, name and size kept; price changed.
    let out = session(&system, "3\nP1\n\n\n\n11.50\n0\n").await;
    assert!(out.contains("Product updated successfully."));
    assert_eq!(
        system.product_client.get_product("P1").await.unwrap(),
        Product::new("P1", "Mug", "M", 11.5)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_product_renames_to_unused_id() {
    let system = EshopSystem::in_memory(32);
    system
        .product_client
        .add_product(Product::new("P1", "Mug", "M", 9.99))
        .await
        .unwrap();

    let out = session(&system, "3\nP1\nP9\n\n\n\n0\n").await;
    assert!(out.contains("Product updated successfully."));
    assert!(out.contains("|  1 | P9         | Mug          | M    |  9.99 |"));
    assert!(matches!(
        system.product_client.get_product("P1").await,
        Err(ProductError::NotFound(id)) if id == "P1"
    ));
    assert_eq!(
        system.product_client.get_product("P9").await.unwrap(),
        Product::new("P9", "Mug", "M", 9.99)
    );
    assert_eq!(system.product_client.list_products().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_product_rejects_taken_id() {
    let system = EshopSystem::in_memory(32);
    let mug = Product::new("P1", "Mug", "M", 9.99);
    let plate = Product::new("P2", "Plate", "L", 2.5);
    system.product_client.add_product(mug.clone()).await.unwrap();
    system.product_client.add_product(plate.clone()).await.unwrap();

    let out = session(&system, "3\nP2\nP1\nBowl\n\n\n0\n").await;
    assert!(out.contains("Product ID already exists: P1"));
    assert_eq!(
        system.product_client.list_products().await.unwrap(),
        vec![mug, plate]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_product_invalid_price_aborts() {
    let system = EshopSystem::in_memory(32);
    let mug = Product::new("P1", "Mug", "M", 9.99);
    system.product_client.add_product(mug.clone()).await.unwrap();

    let out = session(&system, "3\nP1\n\nJug\n\nfree\n3\nP7\n0\n").await;
    assert!(out.contains("No changes made."));
    assert!(out.contains("Product not found: P7"));
    assert_eq!(system.product_client.get_product("P1").await.unwrap(), mug);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_product() {
    let system = EshopSystem::in_memory(32);
    system
        .product_client
        .add_product(Product::new("P1", "Mug", "M", 9.99))
        .await
        .unwrap();

    let out = session(&system, "4\nP9\n4\nP1\n4\n0\n").await;
    assert!(out.contains("Product not found: P9"));
    assert!(out.contains("Product deleted successfully."));
    // The third delete finds an empty catalog and returns to the menu.
    assert!(out.contains("No products found."));
    assert!(system.product_client.list_products().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_order_retries_bad_input() {
    let system = EshopSystem::in_memory(32);
    system
        .product_client
        .add_product(Product::new("P1", "Mug", "M", 9.99))
        .await
        .unwrap();

    let script = "\
5
P9
P1
zero
0
2
DONE
Somewhere
0
";
    let out = session(&system, script).await;
    assert!(out.contains("Product not found. Please try again."));
    assert!(out.contains("Invalid quantity: 'zero' is not a number."));
    assert!(out.contains("Invalid quantity: quantity must be at least 1."));

    let orders = system.order_client.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items[0].quantity, 2);
    assert_eq!(orders[0].delivery_address, "Somewhere");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_order_without_items_writes_nothing() {
    let system = EshopSystem::in_memory(32);
    let out = session(&system, "5\n0\n").await;
    assert!(out.contains("No products available. Add a product first."));

    system
        .product_client
        .add_product(Product::new("P1", "Mug", "M", 9.99))
        .await
        .unwrap();
    let out = session(&system, "5\ndone\n0\n").await;
    assert!(out.contains("No products selected. Order not created."));
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_view_orders() {
    let system = EshopSystem::in_memory(32);
    session(&system, "1\nP1\nMug\nM\n9.99\n5\nP1\n3\ndone\n1 Main St\n0\n").await;

    let out = session(&system, "6\n0\n").await;
    assert!(out.contains("Order ID: 1"));
    assert!(out.contains("| No | Product ID | Product Name | Size | Price | Quantity | Total |"));
    assert!(out.contains("|  1 | P1         | Mug          | M    |  9.99 |        3 | 29.97 |"));
    assert!(out.contains("Total orders: 1"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_order_quantities() {
    let system = EshopSystem::in_memory(32);
    let setup = "\
1
P1
Mug
M
9.99
1
P2
Plate
L
2.5
5
P1
1
P2
2
done
1 Main St
0
";
    session(&system, setup).await;

    // Address kept, first quantity set to 4, second rejected as non-numeric.
    let out = session(&system, "7\n1\n\n4\nmany\n0\n").await;
    assert!(out.contains("Warning: 'many' is not a number. Keeping quantity 2."));
    assert!(out.contains("Order updated successfully."));

    let order = system.order_client.get_order(1).await.unwrap();
    assert_eq!(order.delivery_address, "1 Main St");
    assert_eq!(order.items[0].quantity, 4);
    assert_eq!(order.items[1].quantity, 2);
    assert!((order.total_amount - 44.96).abs() < 1e-9);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_order_bad_ids() {
    let system = EshopSystem::in_memory(32);
    session(&system, "1\nP1\nMug\nM\n9.99\n5\nP1\n1\ndone\nx\n0\n").await;

    let out = session(&system, "7\nfirst\n7\n5\n0\n").await;
    assert!(out.contains("Invalid order ID: 'first' is not a number."));
    assert!(out.contains("Order not found: 5"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_order() {
    let system = EshopSystem::in_memory(32);
    session(&system, "1\nP1\nMug\nM\n9.99\n5\nP1\n1\ndone\nx\n0\n").await;

    let out = session(&system, "8\none\n8\n2\n8\n1\n0\n").await;
    assert!(out.contains("Invalid order ID: 'one' is not a number."));
    assert!(out.contains("Order not found: 2"));
    assert!(out.contains("Order deleted successfully."));
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_input_ending_mid_operation_exits_cleanly() {
    let system = EshopSystem::in_memory(32);
    let out = session(&system, "1\nP1\nMug\n").await;

    assert!(out.trim_end().ends_with(GOODBYE));
    assert!(system.product_client.list_products().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
