//! Parsing and validation of the numeric fields typed at prompts.

use crate::model::OrderId;
use thiserror::Error;

/// Sentinel that ends line item selection.
pub const DONE: &str = "done";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),

    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// Parses a unit price: a finite, non-negative number.
pub fn parse_price(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    let price: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !price.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    if price < 0.0 {
        return Err(InputError::NegativePrice(price));
    }
    Ok(price)
}

/// Parses a line item quantity: a whole number of at least 1.
pub fn parse_quantity(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    // "-1" is reported as not a number rather than as a negative quantity.
    let quantity: u32 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if quantity == 0 {
        return Err(InputError::ZeroQuantity);
    }
    Ok(quantity)
}

pub fn parse_order_id(input: &str) -> Result<OrderId, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// True for the `done` sentinel in any letter case.
pub fn is_done(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(DONE)
}

/// Outcome of a "new value or keep" quantity prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityEdit {
    Keep,
    Set(u32),
    /// Input was present but unusable; the old quantity stays.
    Rejected(InputError),
}

pub fn parse_quantity_edit(input: &str) -> QuantityEdit {
    if input.trim().is_empty() {
        return QuantityEdit::Keep;
    }
    match parse_quantity(input) {
        Ok(quantity) => QuantityEdit::Set(quantity),
        Err(e) => QuantityEdit::Rejected(e),
    }
}
