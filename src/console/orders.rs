//! Order operations behind menu entries 5-8.

use super::input::{is_done, parse_order_id, parse_quantity, parse_quantity_edit, QuantityEdit};
use super::products::catalog_table;
use super::table::{money, Align, Table};
use super::{Console, ConsoleError};
use crate::model::{LineItem, Order, OrderCreate, OrderUpdate};
use crate::order_store::OrderError;
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::warn;

/// Line item table of one order.
pub(super) fn order_table(order: &Order) -> Table {
    let mut table = Table::new([
        ("No", Align::Right),
        ("Product ID", Align::Left),
        ("Product Name", Align::Left),
        ("Size", Align::Left),
        ("Price", Align::Right),
        ("Quantity", Align::Right),
        ("Total", Align::Right),
    ]);
    for (no, item) in order.items.iter().enumerate() {
        table.row([
            (no + 1).to_string(),
            item.product_id.clone(),
            item.product_name.clone(),
            item.size.clone(),
            money(item.price),
            item.quantity.to_string(),
            money(item.subtotal()),
        ]);
    }
    table
}

/// One row per order, for picking an order to edit.
pub(super) fn summary_table(orders: &[Order]) -> Table {
    let mut table = Table::new([
        ("Order ID", Align::Right),
        ("Items", Align::Right),
        ("Total Amount", Align::Right),
        ("Delivery Address", Align::Left),
    ]);
    for order in orders {
        table.row([
            order.order_id.to_string(),
            order.items.len().to_string(),
            money(order.total_amount),
            order.delivery_address.clone(),
        ]);
    }
    table
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    fn show_order(&mut self, order: &Order) -> Result<(), ConsoleError> {
        self.say(format!("\nOrder ID: {}", order.order_id))?;
        self.say(format!("Delivery Address: {}", order.delivery_address))?;
        let table = order_table(order).render();
        write!(self.output, "{table}")?;
        self.say(format!("Total Amount: {}", money(order.total_amount)))
    }

    pub(super) async fn add_order(&mut self) -> Result<(), ConsoleError> {
        let catalog = self
            .products
            .list_products()
            .await
            .map_err(ConsoleError::Product)?;
        if catalog.is_empty() {
            return self.say("No products available. Add a product first.");
        }

        let next_id = match self.orders.next_order_id().await {
            Ok(id) => id,
            Err(e) => return self.recover_order(e),
        };
        self.say(format!("Creating order {next_id}"))?;
        let table = catalog_table(&catalog).render();
        write!(self.output, "{table}")?;

        let mut items: Vec<LineItem> = Vec::new();
        loop {
            let product_id = self
                .prompt("Enter product ID (or 'done' to finish): ")
                .await?;
            if is_done(&product_id) {
                break;
            }
            let product = match self.orders.select_product(&product_id).await {
                Ok(product) => product,
                Err(OrderError::UnknownProduct(_)) => {
                    self.say("Product not found. Please try again.")?;
                    continue;
                }
                Err(e) => return self.recover_order(e),
            };
            let quantity = loop {
                let raw = self.prompt("Enter quantity: ").await?;
                match parse_quantity(&raw) {
                    Ok(quantity) => break quantity,
                    Err(e) => self.say(format!("Invalid quantity: {e}."))?,
                }
            };
            items.push(LineItem::snapshot(&product, quantity));
        }

        if items.is_empty() {
            return self.say("No products selected. Order not created.");
        }
        let delivery_address = self.prompt("Enter delivery address: ").await?;

        match self
            .orders
            .place_order(OrderCreate {
                items,
                delivery_address,
            })
            .await
        {
            Ok(order) => {
                self.say("Order added successfully.")?;
                self.show_order(&order)
            }
            Err(e) => self.recover_order(e),
        }
    }

    pub(super) async fn view_orders(&mut self) -> Result<(), ConsoleError> {
        let orders = self
            .orders
            .list_orders()
            .await
            .map_err(ConsoleError::Order)?;
        if orders.is_empty() {
            return self.say("No orders found.");
        }
        for order in &orders {
            self.show_order(order)?;
        }
        self.say(format!("\nTotal orders: {}", orders.len()))
    }

    pub(super) async fn edit_order(&mut self) -> Result<(), ConsoleError> {
        let orders = self
            .orders
            .list_orders()
            .await
            .map_err(ConsoleError::Order)?;
        if orders.is_empty() {
            return self.say("No orders found.");
        }
        let table = summary_table(&orders).render();
        write!(self.output, "{table}")?;

        let raw_id = self.prompt("Enter order ID to edit: ").await?;
        let order_id = match parse_order_id(&raw_id) {
            Ok(id) => id,
            Err(e) => return self.say(format!("Invalid order ID: {e}.")),
        };
        let current = match self.orders.get_order(order_id).await {
            Ok(order) => order,
            Err(e) => return self.recover_order(e),
        };

        self.say("Press Enter to keep the current value.")?;
        let delivery_address = self
            .prompt_or_keep("New delivery address", &current.delivery_address)
            .await?;

        let mut quantities = Vec::with_capacity(current.items.len());
        for item in &current.items {
            let label = format!(
                "Quantity for {} ({}) [{}]: ",
                item.product_name, item.product_id, item.quantity
            );
            let raw = self.prompt(&label).await?;
            let quantity = match parse_quantity_edit(&raw) {
                QuantityEdit::Keep => None,
                QuantityEdit::Set(quantity) => Some(quantity),
                QuantityEdit::Rejected(e) => {
                    warn!(order_id, product_id = %item.product_id, "Rejected quantity edit");
                    self.say(format!(
                        "Warning: {e}. Keeping quantity {}.",
                        item.quantity
                    ))?;
                    None
                }
            };
            quantities.push(quantity);
        }

        let update = OrderUpdate {
            delivery_address,
            quantities,
        };
        match self.orders.edit_order(order_id, update).await {
            Ok(order) => {
                self.say("Order updated successfully.")?;
                self.show_order(&order)
            }
            Err(e) => self.recover_order(e),
        }
    }

    pub(super) async fn delete_order(&mut self) -> Result<(), ConsoleError> {
        let raw_id = self.prompt("Enter order ID to delete: ").await?;
        let order_id = match parse_order_id(&raw_id) {
            Ok(id) => id,
            Err(e) => return self.say(format!("Invalid order ID: {e}.")),
        };
        match self.orders.remove_order(order_id).await {
            Ok(()) => self.say("Order deleted successfully."),
            Err(e) => self.recover_order(e),
        }
    }
}
