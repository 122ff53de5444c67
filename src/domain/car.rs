use serde::{Deserialize, Serialize};

use super::Cents;

/// Externally assigned identifier (stock number).
pub type CarId = u32;

/// A vehicle on the lot. Lives in the inventory until it is sold or
/// explicitly removed; a sold car never returns to the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub producer: String,
    pub model: String,
    pub release_year: i32,
    /// What the dealership paid for the car.
    pub cost: Cents,
    /// Asking price, before negotiation.
    pub potential_sale_price: Cents,
}

impl Car {
    pub fn new(
        id: CarId,
        producer: impl Into<String>,
        model: impl Into<String>,
        release_year: i32,
        cost: Cents,
        potential_sale_price: Cents,
    ) -> Self {
        Self {
            id,
            producer: producer.into(),
            model: model.into(),
            release_year,
            cost,
            potential_sale_price,
        }
    }
}
