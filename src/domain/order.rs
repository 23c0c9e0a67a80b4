use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;

use super::customer::CustomerId;
use super::product::ProductId;

pub type OrderId = i32;

/// One requested line of a new order. `unit_price` is the price snapshot
/// recorded on the line; it is never looked up from the product.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl OrderLineInput {
    pub fn new(product_id: ProductId, quantity: i32, unit_price: BigDecimal) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> BigDecimal {
        &self.unit_price * &BigDecimal::from(self.quantity)
    }
}

/// A fully priced order ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub order_date: NaiveDate,
    pub total: BigDecimal,
    pub lines: Vec<OrderLineInput>,
}

impl NewOrder {
    pub fn new(customer_id: CustomerId, order_date: NaiveDate, lines: Vec<OrderLineInput>) -> Self {
        Self {
            customer_id,
            order_date,
            total: order_total(&lines),
            lines,
        }
    }
}

/// Sum of `quantity * unit_price` over all lines.
pub fn order_total(lines: &[OrderLineInput]) -> BigDecimal {
    lines
        .iter()
        .map(OrderLineInput::subtotal)
        .fold(BigDecimal::from(0), |acc, subtotal| acc + subtotal)
}

/// An order as listed together with its customer's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub total: BigDecimal,
}

/// An order line as listed together with its product's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLineSummary {
    pub order_id: OrderId,
    pub product_name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}
