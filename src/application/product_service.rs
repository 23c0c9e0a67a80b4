use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductId, ProductInput};

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_product(&self, input: &ProductInput) -> Result<ProductId, DomainError> {
        self.repo.create(input)
    }

    pub fn update_product(&self, id: ProductId, input: &ProductInput) -> Result<(), DomainError> {
        self.repo.update(id, input)
    }

    pub fn delete_product(&self, id: ProductId) -> Result<(), DomainError> {
        self.repo.delete(id)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.list()
    }
}
