use super::customer::{Customer, CustomerId, CustomerInput};
use super::errors::DomainError;
use super::order::{NewOrder, OrderId, OrderLineSummary, OrderSummary};
use super::product::{Product, ProductId, ProductInput};

pub trait CustomerRepository: Send + Sync + 'static {
    fn create(&self, input: &CustomerInput) -> Result<CustomerId, DomainError>;
    fn update(&self, id: CustomerId, input: &CustomerInput) -> Result<(), DomainError>;
    fn delete(&self, id: CustomerId) -> Result<(), DomainError>;
    fn list(&self) -> Result<Vec<Customer>, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn create(&self, input: &ProductInput) -> Result<ProductId, DomainError>;
    fn update(&self, id: ProductId, input: &ProductInput) -> Result<(), DomainError>;
    fn delete(&self, id: ProductId) -> Result<(), DomainError>;
    fn list(&self) -> Result<Vec<Product>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn create(&self, order: NewOrder) -> Result<OrderId, DomainError>;
    fn list(&self) -> Result<Vec<OrderSummary>, DomainError>;
    fn list_lines(&self, order_id: Option<OrderId>) -> Result<Vec<OrderLineSummary>, DomainError>;
}
