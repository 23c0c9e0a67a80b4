use chrono::{Local, NaiveDate};

use crate::domain::customer::CustomerId;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderId, OrderLineInput, OrderLineSummary, OrderSummary};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records an order dated today.
    ///
    /// The order header, its lines and the stock decrements commit together
    /// or not at all. Calling this twice creates two orders.
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        lines: Vec<OrderLineInput>,
    ) -> Result<OrderId, DomainError> {
        self.create_order_on(customer_id, Local::now().date_naive(), lines)
    }

    pub fn create_order_on(
        &self,
        customer_id: CustomerId,
        order_date: NaiveDate,
        lines: Vec<OrderLineInput>,
    ) -> Result<OrderId, DomainError> {
        self.repo
            .create(NewOrder::new(customer_id, order_date, lines))
    }

    pub fn list_orders(&self) -> Result<Vec<OrderSummary>, DomainError> {
        self.repo.list()
    }

    pub fn list_order_lines(
        &self,
        order_id: Option<OrderId>,
    ) -> Result<Vec<OrderLineSummary>, DomainError> {
        self.repo.list_lines(order_id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Mutex;

    use bigdecimal::BigDecimal;
    use chrono::Local;

    use super::OrderService;
    use crate::domain::errors::DomainError;
    use crate::domain::order::{NewOrder, OrderId, OrderLineInput, OrderLineSummary, OrderSummary};
    use crate::domain::ports::OrderRepository;

    /// Captures what the service hands to the repository.
    #[derive(Default)]
    struct RecordingRepo {
        created: Mutex<Vec<NewOrder>>,
    }

    impl OrderRepository for RecordingRepo {
        fn create(&self, order: NewOrder) -> Result<OrderId, DomainError> {
            let mut created = self.created.lock().expect("lock");
            created.push(order);
            Ok(created.len() as OrderId)
        }

        fn list(&self) -> Result<Vec<OrderSummary>, DomainError> {
            Ok(vec![])
        }

        fn list_lines(&self, _: Option<OrderId>) -> Result<Vec<OrderLineSummary>, DomainError> {
            Ok(vec![])
        }
    }

    #[test]
    fn create_order_prices_and_dates_the_order() {
        let service = OrderService::new(RecordingRepo::default());

        let id = service
            .create_order(
                1,
                vec![
                    OrderLineInput::new(1, 1, BigDecimal::from_str("1500.00").expect("decimal")),
                    OrderLineInput::new(3, 1, BigDecimal::from_str("200.00").expect("decimal")),
                ],
            )
            .expect("create failed");

        assert_eq!(id, 1);
        let created = service.repo.created.lock().expect("lock");
        assert_eq!(created[0].customer_id, 1);
        assert_eq!(created[0].order_date, Local::now().date_naive());
        assert_eq!(created[0].total, BigDecimal::from_str("1700.00").expect("decimal"));
        assert_eq!(created[0].lines.len(), 2);
    }

    #[test]
    fn resubmitting_creates_a_second_order() {
        let service = OrderService::new(RecordingRepo::default());
        let lines = vec![OrderLineInput::new(2, 1, BigDecimal::from(800))];

        let first = service.create_order(2, lines.clone()).expect("first");
        let second = service.create_order(2, lines).expect("second");

        assert_ne!(first, second);
    }
}
