//! Catalog operations behind menu entries 1-4.

use super::input::parse_price;
use super::table::{money, Align, Table};
use super::{Console, ConsoleError};
use crate::model::{Product, ProductUpdate};
use std::io::Write;
use tokio::io::AsyncBufRead;

/// Numbered catalog table.
pub(super) fn catalog_table(products: &[Product]) -> Table {
    let mut table = Table::new([
        ("No", Align::Right),
        ("Product ID", Align::Left),
        ("Product Name", Align::Left),
        ("Size", Align::Left),
        ("Price", Align::Right),
    ]);
    for (no, product) in products.iter().enumerate() {
        table.row([
            (no + 1).to_string(),
            product.product_id.clone(),
            product.product_name.clone(),
            product.size.clone(),
            money(product.price),
        ]);
    }
    table
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn add_product(&mut self) -> Result<(), ConsoleError> {
        let product_id = self.prompt("Enter product ID: ").await?;
        let product_name = self.prompt("Enter product name: ").await?;
        let size = self.prompt("Enter product size: ").await?;
        let raw_price = self.prompt("Enter product price: ").await?;

        let price = match parse_price(&raw_price) {
            Ok(price) => price,
            Err(e) => return self.say(format!("Invalid price: {e}. Product not added.")),
        };

        match self
            .products
            .add_product(Product::new(product_id, product_name, size, price))
            .await
        {
            Ok(_) => self.say("Product added successfully."),
            Err(e) => self.recover_product(e),
        }
    }

    /// Prints the catalog; returns false when it is empty.
    async fn show_catalog(&mut self) -> Result<bool, ConsoleError> {
        let products = self
            .products
            .list_products()
            .await
            .map_err(ConsoleError::Product)?;
        if products.is_empty() {
            self.say("No products found.")?;
            return Ok(false);
        }
        let table = catalog_table(&products).render();
        write!(self.output, "{table}")?;
        self.say(format!("Total products: {}", products.len()))?;
        Ok(true)
    }

    pub(super) async fn view_products(&mut self) -> Result<(), ConsoleError> {
        self.show_catalog().await.map(|_| ())
    }

    pub(super) async fn edit_product(&mut self) -> Result<(), ConsoleError> {
        if !self.show_catalog().await? {
            return Ok(());
        }
        let target = self.prompt("Enter product ID to edit: ").await?;
        let current = match self.products.get_product(&target).await {
            Ok(product) => product,
            Err(e) => return self.recover_product(e),
        };

        self.say("Press Enter to keep the current value.")?;
        let product_id = self
            .prompt_or_keep("New product ID", &current.product_id)
            .await?
            .filter(|id| *id != current.product_id);
        let product_name = self
            .prompt_or_keep("New product name", &current.product_name)
            .await?;
        let size = self.prompt_or_keep("New size", &current.size).await?;
        let price = match self
            .prompt_or_keep("New price", &money(current.price))
            .await?
        {
            None => None,
            Some(raw) => match parse_price(&raw) {
                Ok(price) => Some(price),
                Err(e) => return self.say(format!("Invalid price: {e}. No changes made.")),
            },
        };

        let update = ProductUpdate {
            product_id,
            product_name,
            size,
            price,
        };
        if update.is_empty() {
            return self.say("No changes made.");
        }

        match self.products.edit_product(&target, update).await {
            Ok(product) => {
                self.say("Product updated successfully.")?;
                let table = catalog_table(std::slice::from_ref(&product)).render();
                write!(self.output, "{table}")?;
                Ok(())
            }
            Err(e) => self.recover_product(e),
        }
    }

    pub(super) async fn delete_product(&mut self) -> Result<(), ConsoleError> {
        if !self.show_catalog().await? {
            return Ok(());
        }
        let target = self.prompt("Enter product ID to delete: ").await?;
        match self.products.remove_product(&target).await {
            Ok(()) => self.say("Product deleted successfully."),
            Err(e) => self.recover_product(e),
        }
    }
}
