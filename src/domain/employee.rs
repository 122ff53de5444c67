use serde::{Deserialize, Serialize};

/// Externally assigned identifier (badge number, HR id, ...).
pub type EmployeeId = u32;

/// A salesperson on the dealership floor.
/// Immutable once created - identity is the externally assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub position: String,
    pub phone_number: String,
    pub email: String,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        full_name: impl Into<String>,
        position: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            position: position.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }
}
