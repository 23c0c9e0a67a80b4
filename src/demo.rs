//! Console drivers behind the `demo` and `show` commands.

use std::io::Write;

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::domain::customer::{Customer, CustomerId, CustomerInput};
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineInput, OrderLineSummary, OrderSummary};
use crate::domain::product::{Product, ProductInput};
use crate::errors::AppError;
use crate::Shop;

/// Everything stored, as printed by `show --json`.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<OrderSummary>,
    pub order_lines: Vec<OrderLineSummary>,
}

impl Snapshot {
    pub fn load(shop: &Shop) -> Result<Self, DomainError> {
        Ok(Self {
            customers: shop.customers.list_customers()?,
            products: shop.products.list_products()?,
            orders: shop.orders.list_orders()?,
            order_lines: shop.orders.list_order_lines(None)?,
        })
    }
}

/// Money as shown on the console, rounded to cents.
fn cents(amount: &BigDecimal) -> BigDecimal {
    amount.round(2).with_scale(2)
}

fn customer_line(c: &Customer) -> String {
    format!(
        "({}, {}, {}, {})",
        c.id,
        c.name,
        c.email,
        c.address.as_deref().unwrap_or("-")
    )
}

fn product_line(p: &Product) -> String {
    format!(
        "({}, {}, {}, {}, {})",
        p.id,
        p.name,
        p.description.as_deref().unwrap_or("-"),
        cents(&p.price),
        p.stock
    )
}

fn order_line(o: &OrderSummary) -> String {
    format!(
        "({}, {}, {}, {})",
        o.id,
        o.customer_name,
        o.order_date.format("%Y-%m-%d"),
        cents(&o.total)
    )
}

fn order_detail_line(l: &OrderLineSummary) -> String {
    format!(
        "({}, {}, {}, {})",
        l.order_id,
        l.product_name,
        l.quantity,
        cents(&l.price)
    )
}

pub fn print_customers(shop: &Shop, out: &mut impl Write) -> Result<(), AppError> {
    for customer in shop.customers.list_customers()? {
        writeln!(out, "{}", customer_line(&customer))?;
    }
    Ok(())
}

pub fn print_products(shop: &Shop, out: &mut impl Write) -> Result<(), AppError> {
    for product in shop.products.list_products()? {
        writeln!(out, "{}", product_line(&product))?;
    }
    Ok(())
}

/// Orders with their lines indented underneath.
pub fn print_orders_with_lines(shop: &Shop, out: &mut impl Write) -> Result<(), AppError> {
    for order in shop.orders.list_orders()? {
        writeln!(out, "{}", order_line(&order))?;
        for line in shop.orders.list_order_lines(Some(order.id))? {
            writeln!(out, "   {}", order_detail_line(&line))?;
        }
    }
    Ok(())
}

/// Prints every table. With `json` the whole snapshot is written as one
/// pretty-printed JSON document instead.
pub fn show_all(shop: &Shop, json: bool, out: &mut impl Write) -> Result<(), AppError> {
    if json {
        let snapshot = Snapshot::load(shop)?;
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "All Customers:")?;
    print_customers(shop, out)?;
    writeln!(out, "\nAll Products:")?;
    print_products(shop, out)?;
    writeln!(out, "\nAll Orders:")?;
    for order in shop.orders.list_orders()? {
        writeln!(out, "{}", order_line(&order))?;
    }
    writeln!(out, "\nAll Order Details:")?;
    for line in shop.orders.list_order_lines(None)? {
        writeln!(out, "{}", order_detail_line(&line))?;
    }
    Ok(())
}

/// Adds the customer, or finds the one already registered under the email.
fn ensure_customer(shop: &Shop, input: &CustomerInput) -> Result<CustomerId, AppError> {
    match shop.customers.add_customer(input) {
        Ok(id) => Ok(id),
        Err(DomainError::DuplicateEmail(email)) => {
            log::warn!("Customer with email {} already exists.", email);
            shop.customers
                .list_customers()?
                .into_iter()
                .find(|c| c.email == email)
                .map(|c| c.id)
                .ok_or_else(|| DomainError::Storage(format!("customer {email} vanished")).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Seeds sample data, places two orders and walks through updates and
/// deletes, printing the tables after each step.
pub fn run_demo(shop: &Shop, out: &mut impl Write) -> Result<(), AppError> {
    let john = ensure_customer(
        shop,
        &CustomerInput::new("John Doe", "john@example.com", "123 Elm Street"),
    )?;
    let jane = ensure_customer(
        shop,
        &CustomerInput::new("Jane Smith", "jane@example.com", "456 Oak Avenue"),
    )?;

    let laptop = shop.products.add_product(&ProductInput::new(
        "Laptop",
        "A high-end gaming laptop",
        BigDecimal::from(1500),
        10,
    ))?;
    let smartphone = shop.products.add_product(&ProductInput::new(
        "Smartphone",
        "Latest model smartphone",
        BigDecimal::from(800),
        20,
    ))?;
    let headphones = shop.products.add_product(&ProductInput::new(
        "Headphones",
        "Noise-cancelling headphones",
        BigDecimal::from(200),
        15,
    ))?;

    shop.orders.create_order(
        john,
        vec![
            OrderLineInput::new(laptop, 1, BigDecimal::from(1500)),
            OrderLineInput::new(headphones, 1, BigDecimal::from(200)),
        ],
    )?;
    shop.orders.create_order(
        jane,
        vec![
            OrderLineInput::new(smartphone, 1, BigDecimal::from(800)),
            OrderLineInput::new(headphones, 1, BigDecimal::from(200)),
        ],
    )?;

    writeln!(out, "All Customers:")?;
    print_customers(shop, out)?;
    writeln!(out, "\nAll Products:")?;
    print_products(shop, out)?;
    writeln!(out, "\nAll Orders:")?;
    print_orders_with_lines(shop, out)?;

    writeln!(out, "\nUpdating Customer with ID {john}...")?;
    let renamed = shop.customers.update_customer(
        john,
        &CustomerInput::new("John Updated", "john_updated@example.com", "789 New Street"),
    );
    match renamed {
        Err(DomainError::DuplicateEmail(email)) => {
            log::warn!("Customer with email {} already exists.", email)
        }
        other => other?,
    }
    writeln!(out, "All Customers After Update:")?;
    print_customers(shop, out)?;

    writeln!(out, "\nDeleting Customer with ID {jane}...")?;
    shop.customers.delete_customer(jane)?;
    writeln!(out, "All Customers After Deletion:")?;
    print_customers(shop, out)?;

    writeln!(out, "\nUpdating Product with ID {laptop}...")?;
    shop.products.update_product(
        laptop,
        &ProductInput::new(
            "Laptop Updated",
            "An updated high-end gaming laptop",
            BigDecimal::from(1600),
            8,
        ),
    )?;
    writeln!(out, "All Products After Update:")?;
    print_products(shop, out)?;

    writeln!(out, "\nDeleting Product with ID {headphones}...")?;
    shop.products.delete_product(headphones)?;
    writeln!(out, "All Products After Deletion:")?;
    print_products(shop, out)?;

    Ok(())
}
