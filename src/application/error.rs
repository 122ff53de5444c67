use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{CarId, EmployeeId, SaleError};
use crate::storage::SnapshotError;

/// Application-level failures. None of these are fatal: the caller reports
/// the message and the in-memory state is unchanged.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("Car not found in inventory: {0}")]
    CarNotFound(CarId),

    #[error("Sale date {sale_date} is in the future (today is {today})")]
    SaleDateInFuture {
        sale_date: NaiveDate,
        today: NaiveDate,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<SaleError> for AppError {
    fn from(err: SaleError) -> Self {
        match err {
            SaleError::FutureDate { sale_date, today } => {
                AppError::SaleDateInFuture { sale_date, today }
            }
            SaleError::EmployeeNotFound(id) => AppError::EmployeeNotFound(id),
            SaleError::CarNotFound(id) => AppError::CarNotFound(id),
        }
    }
}
