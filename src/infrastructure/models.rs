use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::product::Product;
use crate::schema::{customers, order_lines, orders, products};

// Money is REAL in SQLite; conversions happen only at this boundary.

pub fn money_to_f64(value: &BigDecimal) -> Result<f64, DomainError> {
    value
        .to_f64()
        .ok_or_else(|| DomainError::Storage(format!("amount {value} cannot be stored as REAL")))
}

pub fn money_from_f64(value: f64) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(&value.to_string())
        .map_err(|e| DomainError::Storage(format!("stored amount {value} is not a decimal: {e}")))
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            email: row.email,
            address: row.address,
        }
    }
}

/// Used both for inserts and for full-row updates.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = customers)]
#[diesel(treat_none_as_null = true)]
pub struct CustomerValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub address: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: money_from_f64(row.price)?,
            stock: row.stock,
        })
    }
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductValues<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub stock: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub total: f64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_survives_the_real_column() {
        let price = BigDecimal::from_str("1500.00").expect("valid decimal");
        let stored = money_to_f64(&price).expect("to f64");
        assert_eq!(stored, 1500.0);
        assert_eq!(money_from_f64(stored).expect("from f64"), price);
    }

    #[test]
    fn fractional_amount_reads_back_as_shortest_decimal() {
        let read = money_from_f64(19.99).expect("from f64");
        assert_eq!(read, BigDecimal::from_str("19.99").expect("valid decimal"));
    }

    #[test]
    fn nan_is_reported_as_storage_failure() {
        let err = money_from_f64(f64::NAN).unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
