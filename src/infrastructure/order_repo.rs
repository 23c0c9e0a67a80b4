use diesel::dsl::exists;
use diesel::prelude::*;

use crate::config::ReferentialChecks;
use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderId, OrderLineSummary, OrderSummary};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, order_lines, orders, products};

use super::models::{money_from_f64, money_to_f64, NewOrderLineRow, NewOrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
    checks: ReferentialChecks,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool, checks: ReferentialChecks) -> Self {
        Self { pool, checks }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: NewOrder) -> Result<OrderId, DomainError> {
        let total = money_to_f64(&order.total)?;
        let line_rows = order
            .lines
            .iter()
            .map(|l| -> Result<NewOrderLineRow, DomainError> {
                Ok(NewOrderLineRow {
                    order_id: 0,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    price: money_to_f64(&l.unit_price)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let checks = self.checks;

        let mut conn = self.pool.get()?;

        // BEGIN IMMEDIATE: take the write lock before the first read.
        let order_id = conn.immediate_transaction::<_, DomainError, _>(|conn| {
            if checks == ReferentialChecks::Strict {
                let known: bool =
                    diesel::select(exists(customers::table.find(order.customer_id)))
                        .get_result(conn)?;
                if !known {
                    return Err(DomainError::customer_not_found(order.customer_id));
                }
            }

            // 1. Insert the order header
            let order_id = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    customer_id: order.customer_id,
                    order_date: order.order_date,
                    total,
                })
                .returning(orders::id)
                .get_result::<OrderId>(conn)?;

            // 2. Each line in input order: insert it, then take its quantity out of stock
            for mut line in line_rows {
                line.order_id = order_id;
                diesel::insert_into(order_lines::table)
                    .values(&line)
                    .execute(conn)?;

                let decremented = diesel::update(products::table.find(line.product_id))
                    .set(products::stock.eq(products::stock - line.quantity))
                    .execute(conn)?;

                if decremented == 0 {
                    match checks {
                        ReferentialChecks::Strict => {
                            return Err(DomainError::product_not_found(line.product_id));
                        }
                        ReferentialChecks::Loose => log::warn!(
                            "Order {} references unknown product {}; no stock was decremented",
                            order_id,
                            line.product_id
                        ),
                    }
                }
            }

            Ok(order_id)
        })?;

        log::info!(
            "Created order {} for customer {} ({} lines, total {})",
            order_id,
            order.customer_id,
            order.lines.len(),
            order.total
        );
        Ok(order_id)
    }

    fn list(&self) -> Result<Vec<OrderSummary>, DomainError> {
        let mut conn = self.pool.get()?;

        // Inner join: orders whose customer is gone are not listed.
        let rows = orders::table
            .inner_join(customers::table)
            .select((
                orders::id,
                customers::name,
                orders::order_date,
                orders::total,
            ))
            .order(orders::id.asc())
            .load::<(OrderId, String, chrono::NaiveDate, f64)>(&mut conn)?;

        log::debug!("Loaded {} orders", rows.len());
        rows.into_iter()
            .map(|(id, customer_name, order_date, total)| -> Result<_, DomainError> {
                Ok(OrderSummary {
                    id,
                    customer_name,
                    order_date,
                    total: money_from_f64(total)?,
                })
            })
            .collect()
    }

    fn list_lines(&self, order_id: Option<OrderId>) -> Result<Vec<OrderLineSummary>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = order_lines::table
            .inner_join(products::table)
            .select((
                order_lines::order_id,
                products::name,
                order_lines::quantity,
                order_lines::price,
            ))
            .order((order_lines::order_id.asc(), order_lines::product_id.asc()))
            .into_boxed();
        if let Some(id) = order_id {
            query = query.filter(order_lines::order_id.eq(id));
        }

        let rows = query.load::<(OrderId, String, i32, f64)>(&mut conn)?;

        log::debug!("Loaded {} order lines", rows.len());
        rows.into_iter()
            .map(|(order_id, product_name, quantity, price)| -> Result<_, DomainError> {
                Ok(OrderLineSummary {
                    order_id,
                    product_name,
                    quantity,
                    price: money_from_f64(price)?,
                })
            })
            .collect()
    }
}
