use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Car, Cents, Employee};

/// A completed sale. Carries full snapshots of the employee and the car as
/// they were at sale time, not references into the live collections, so a
/// later removal of either record cannot rewrite history.
/// Sales are immutable - there is no cancellation or refund path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub employee: Employee,
    pub car: Car,
    pub sale_date: NaiveDate,
    pub real_sale_price: Cents,
}

impl Sale {
    pub fn new(employee: Employee, car: Car, sale_date: NaiveDate, real_sale_price: Cents) -> Self {
        Self {
            employee,
            car,
            sale_date,
            real_sale_price,
        }
    }

    /// Realized margin on this sale.
    pub fn profit(&self) -> Cents {
        self.real_sale_price - self.car.cost
    }
}
