//! # Interactive Console
//!
//! The menu loop the operator drives. Each choice runs one product or order
//! operation against the store clients and then returns to the menu.
//!
//! The console is generic over its input (any Tokio `AsyncBufRead`) and output
//! (any `std::io::Write`), so tests script a whole session from a byte slice
//! and inspect the printed text.
//!
//! ## Errors
//!
//! Expected failures (unknown ids, duplicate ids, bad numbers, empty orders)
//! are printed and the menu continues. Store failures and I/O errors end the
//! session with a [`ConsoleError`]. End of input ends the session normally.

pub mod command;
pub mod input;
mod orders;
mod products;
pub mod table;

pub use command::{menu_text, MenuCommand};

use crate::clients::{OrderClient, ProductClient};
use crate::order_store::OrderError;
use crate::product_store::ProductError;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

pub const GOODBYE: &str = "Exiting... Goodbye!";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input closed while a prompt was waiting.
    #[error("End of input")]
    EndOfInput,

    #[error(transparent)]
    Product(ProductError),

    #[error(transparent)]
    Order(OrderError),
}

/// An interactive session over one input and one output.
pub struct Console<R, W> {
    input: R,
    output: W,
    products: ProductClient,
    orders: OrderClient,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W, products: ProductClient, orders: OrderClient) -> Self {
        Self {
            input,
            output,
            products,
            orders,
        }
    }

    /// Runs the menu until `0` or end of input.
    ///
    /// Consumes the console so its client clones are released on return.
    pub async fn run(mut self) -> Result<(), ConsoleError> {
        info!("Console session started");
        loop {
            let text = menu_text();
            write!(self.output, "{text}")?;

            let choice = match self.prompt("Enter your choice: ").await {
                Ok(choice) => choice,
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let Some(command) = MenuCommand::parse(&choice) else {
                debug!(choice = %choice, "Invalid menu choice");
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };
            if command == MenuCommand::Exit {
                break;
            }

            debug!(?command, "Dispatching");
            match self.dispatch(command).await {
                Ok(()) => {}
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()?;
        info!("Console session ended");
        Ok(())
    }

    async fn dispatch(&mut self, command: MenuCommand) -> Result<(), ConsoleError> {
        match command {
            MenuCommand::AddProduct => self.add_product().await,
            MenuCommand::ViewProducts => self.view_products().await,
            MenuCommand::EditProduct => self.edit_product().await,
            MenuCommand::DeleteProduct => self.delete_product().await,
            MenuCommand::AddOrder => self.add_order().await,
            MenuCommand::ViewOrders => self.view_orders().await,
            MenuCommand::EditOrder => self.edit_order().await,
            MenuCommand::DeleteOrder => self.delete_order().await,
            MenuCommand::Exit => Ok(()),
        }
    }

    /// Prints `label` and reads one line, trimmed.
    async fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts with the current value shown; empty input keeps it.
    async fn prompt_or_keep(&mut self, label: &str, current: &str) -> Result<Option<String>, ConsoleError> {
        let value = self.prompt(&format!("{label} [{current}]: ")).await?;
        Ok((!value.is_empty()).then_some(value))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints an expected product error, or escalates a store failure.
    fn recover_product(&mut self, e: ProductError) -> Result<(), ConsoleError> {
        if e.is_store_failure() {
            return Err(ConsoleError::Product(e));
        }
        self.say(e)
    }

    /// Prints an expected order error, or escalates a store failure.
    fn recover_order(&mut self, e: OrderError) -> Result<(), ConsoleError> {
        if e.is_store_failure() {
            return Err(ConsoleError::Order(e));
        }
        self.say(e)
    }
}
