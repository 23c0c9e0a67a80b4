use serde::Serialize;

pub type CustomerId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

/// Field values for creating a customer or replacing an existing one.
#[derive(Debug, Clone)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
}

impl CustomerInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: Some(address.into()),
        }
    }
}
