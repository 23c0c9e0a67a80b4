use crate::domain::customer::{Customer, CustomerId, CustomerInput};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fails with `DomainError::DuplicateEmail` when the email is already
    /// registered; nothing is written in that case.
    pub fn add_customer(&self, input: &CustomerInput) -> Result<CustomerId, DomainError> {
        self.repo.create(input)
    }

    pub fn update_customer(&self, id: CustomerId, input: &CustomerInput) -> Result<(), DomainError> {
        self.repo.update(id, input)
    }

    pub fn delete_customer(&self, id: CustomerId) -> Result<(), DomainError> {
        self.repo.delete(id)
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        self.repo.list()
    }
}
