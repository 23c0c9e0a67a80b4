use bigdecimal::BigDecimal;
use serde::Serialize;

pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

/// Field values for creating a product or replacing an existing one.
///
/// `stock` is not checked for negativity.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: BigDecimal,
        stock: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            price,
            stock,
        }
    }
}
