use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::DbPool;
use crate::domain::customer::{Customer, CustomerId, CustomerInput};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, CustomerValues};

/// Maps a UNIQUE violation on `customers.email` to `DuplicateEmail`.
fn email_conflict(email: &str) -> impl FnOnce(DieselError) -> DomainError + '_ {
    move |e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DomainError::DuplicateEmail(email.to_string())
        }
        other => other.into(),
    }
}

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn create(&self, input: &CustomerInput) -> Result<CustomerId, DomainError> {
        let mut conn = self.pool.get()?;
        let values = CustomerValues {
            name: &input.name,
            email: &input.email,
            address: input.address.as_deref(),
        };

        let id = conn.immediate_transaction::<_, DomainError, _>(|conn| {
            let taken: bool = diesel::select(exists(
                customers::table.filter(customers::email.eq(input.email.as_str())),
            ))
            .get_result(conn)?;
            if taken {
                return Err(DomainError::DuplicateEmail(input.email.clone()));
            }

            diesel::insert_into(customers::table)
                .values(&values)
                .returning(customers::id)
                .get_result::<CustomerId>(conn)
                .map_err(email_conflict(&input.email))
        })?;

        log::info!("Added customer {} <{}>", id, input.email);
        Ok(id)
    }

    fn update(&self, id: CustomerId, input: &CustomerInput) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let updated = diesel::update(customers::table.find(id))
            .set(&CustomerValues {
                name: &input.name,
                email: &input.email,
                address: input.address.as_deref(),
            })
            .execute(&mut conn)
            .map_err(email_conflict(&input.email))?;

        if updated == 0 {
            return Err(DomainError::customer_not_found(id));
        }
        log::info!("Updated customer {}", id);
        Ok(())
    }

    fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        // Orders placed by this customer are kept and no longer join.
        let deleted = diesel::delete(customers::table.find(id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(DomainError::customer_not_found(id));
        }
        log::info!("Deleted customer {}", id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customers::table
            .order(customers::id.asc())
            .select(CustomerRow::as_select())
            .load(&mut conn)?;

        log::debug!("Loaded {} customers", rows.len());
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
