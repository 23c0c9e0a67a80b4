use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductId, ProductInput};
use crate::schema::products;

use super::models::{money_to_f64, ProductRow, ProductValues};

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn product_values(input: &ProductInput) -> Result<ProductValues<'_>, DomainError> {
    Ok(ProductValues {
        name: &input.name,
        description: input.description.as_deref(),
        price: money_to_f64(&input.price)?,
        stock: input.stock,
    })
}

impl ProductRepository for DieselProductRepository {
    fn create(&self, input: &ProductInput) -> Result<ProductId, DomainError> {
        let values = product_values(input)?;
        let mut conn = self.pool.get()?;

        let id = diesel::insert_into(products::table)
            .values(&values)
            .returning(products::id)
            .get_result::<ProductId>(&mut conn)?;

        log::info!("Added product {} '{}' (stock {})", id, input.name, input.stock);
        Ok(id)
    }

    fn update(&self, id: ProductId, input: &ProductInput) -> Result<(), DomainError> {
        let values = product_values(input)?;
        let mut conn = self.pool.get()?;

        let updated = diesel::update(products::table.find(id))
            .set(&values)
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(DomainError::product_not_found(id));
        }
        log::info!("Updated product {}", id);
        Ok(())
    }

    fn delete(&self, id: ProductId) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(products::table.find(id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(DomainError::product_not_found(id));
        }
        log::info!("Deleted product {}", id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .order(products::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        log::debug!("Loaded {} products", rows.len());
        rows.into_iter().map(Product::try_from).collect()
    }
}
