use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Car, Cents, Employee, EmployeeId, ModelCount, Period, Sale, SellerCount};

/// One report request: the query name plus the parameters that kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// The full sale log, in registration order.
    AllSales,
    /// Sales whose date equals the given date exactly.
    SalesOnDate(NaiveDate),
    /// Sales inside the period, inclusive both ends.
    SalesInPeriod(Period),
    /// Sales closed by the given employee.
    SalesByEmployee(EmployeeId),
    /// The most sold car model in the period.
    BestModel(Period),
    /// The employee with the most sales in the period.
    TopSeller(Period),
    /// Total realized profit over the period.
    Profit(Period),
    /// All current employees.
    Employees,
    /// The current inventory.
    Cars,
}

/// The unified result of running a report. One discriminated type for every
/// report kind; an empty grouping period is `NoSales`, never a sentinel
/// string mixed in with the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcome {
    Sales(Vec<Sale>),
    Employees(Vec<Employee>),
    Cars(Vec<Car>),
    BestModel(ModelCount),
    TopSeller(SellerCount),
    Profit(Cents),
    NoSales,
}
