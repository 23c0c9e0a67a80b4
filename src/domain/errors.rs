use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer with email {0} already exists")]
    DuplicateEmail(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn customer_not_found(id: i32) -> Self {
        DomainError::NotFound {
            entity: "Customer",
            id,
        }
    }

    pub fn product_not_found(id: i32) -> Self {
        DomainError::NotFound {
            entity: "Product",
            id,
        }
    }
}
