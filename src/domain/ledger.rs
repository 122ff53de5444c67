use std::collections::HashMap;

use chrono::NaiveDate;

use super::{Car, CarId, Cents, Employee, EmployeeId, Sale};

/// The in-memory store of the dealership: employees, car inventory and the
/// append-only sale log. The log is kept in registration order, which is not
/// necessarily sale-date order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    employees: HashMap<EmployeeId, Employee>,
    cars: HashMap<CarId, Car>,
    sales: Vec<Sale>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted collections. Replaces
    /// everything wholesale; there is no merge path.
    pub fn from_parts(
        employees: HashMap<EmployeeId, Employee>,
        cars: HashMap<CarId, Car>,
        sales: Vec<Sale>,
    ) -> Self {
        Self {
            employees,
            cars,
            sales,
        }
    }

    pub fn employees(&self) -> &HashMap<EmployeeId, Employee> {
        &self.employees
    }

    pub fn cars(&self) -> &HashMap<CarId, Car> {
        &self.cars
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(&id)
    }

    /// Insert an employee, overwriting any record with the same id.
    /// Last write wins; duplicate ids are not an error.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Remove an employee. Returns false when the id was absent (a no-op,
    /// not an error).
    pub fn remove_employee(&mut self, id: EmployeeId) -> bool {
        self.employees.remove(&id).is_some()
    }

    /// Insert a car, overwriting any record with the same id.
    pub fn add_car(&mut self, car: Car) {
        self.cars.insert(car.id, car);
    }

    /// Remove a car from the inventory. Returns false when the id was absent.
    pub fn remove_car(&mut self, id: CarId) -> bool {
        self.cars.remove(&id).is_some()
    }

    /// Register a completed sale.
    ///
    /// Rejects future-dated sales (`sale_date > today`) and sales referencing
    /// an unknown employee or car. A car already consumed by a prior sale is
    /// no longer in the inventory, so selling it twice fails the same way as
    /// an unknown car id. On success the sale snapshots both records, the car
    /// leaves the inventory and the sale is appended to the log.
    ///
    /// On any error nothing changes: the log and the inventory are only
    /// touched together, after all checks have passed.
    pub fn register_sale(
        &mut self,
        employee_id: EmployeeId,
        car_id: CarId,
        sale_date: NaiveDate,
        real_sale_price: Cents,
        today: NaiveDate,
    ) -> Result<&Sale, SaleError> {
        if sale_date > today {
            return Err(SaleError::FutureDate { sale_date, today });
        }

        let employee = self
            .employees
            .get(&employee_id)
            .ok_or(SaleError::EmployeeNotFound(employee_id))?
            .clone();

        // Last check, so a failure here has not touched any state yet.
        let car = self
            .cars
            .remove(&car_id)
            .ok_or(SaleError::CarNotFound(car_id))?;

        self.sales
            .push(Sale::new(employee, car, sale_date, real_sale_price));
        Ok(self.sales.last().expect("just pushed"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleError {
    /// The sale date lies strictly after the registration date.
    FutureDate {
        sale_date: NaiveDate,
        today: NaiveDate,
    },
    EmployeeNotFound(EmployeeId),
    CarNotFound(CarId),
}

impl std::fmt::Display for SaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleError::FutureDate { sale_date, today } => {
                write!(
                    f,
                    "Sale date {} is in the future (today is {})",
                    sale_date, today
                )
            }
            SaleError::EmployeeNotFound(id) => write!(f, "Employee not found: {}", id),
            SaleError::CarNotFound(id) => write!(f, "Car not found in inventory: {}", id),
        }
    }
}

impl std::error::Error for SaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_employee(Employee::new(
            1,
            "John Connor",
            "Seller",
            "123456789",
            "judgmentday@gmail.com",
        ));
        ledger.add_car(Car::new(1, "Ford", "Mustang", 2024, 5000, 10000));
        ledger
    }

    #[test]
    fn test_add_employee_lookup_round_trip() {
        let ledger = sample_ledger();
        let employee = ledger.employee(1).unwrap();
        assert_eq!(employee.full_name, "John Connor");
        assert_eq!(employee.position, "Seller");
    }

    #[test]
    fn test_add_employee_overwrites_same_id() {
        let mut ledger = sample_ledger();
        ledger.add_employee(Employee::new(1, "Sarah Connor", "Manager", "987", "sc@x.y"));

        assert_eq!(ledger.employees().len(), 1);
        assert_eq!(ledger.employee(1).unwrap().full_name, "Sarah Connor");
    }

    #[test]
    fn test_remove_employee() {
        let mut ledger = sample_ledger();
        assert!(ledger.remove_employee(1));
        assert!(ledger.employee(1).is_none());
    }

    #[test]
    fn test_remove_absent_employee_is_noop() {
        let mut ledger = sample_ledger();
        assert!(!ledger.remove_employee(42));
        assert_eq!(ledger.employees().len(), 1);
    }

    #[test]
    fn test_add_car_lookup_round_trip() {
        let ledger = sample_ledger();
        let car = ledger.car(1).unwrap();
        assert_eq!(car.model, "Mustang");
        assert_eq!(car.cost, 5000);
    }

    #[test]
    fn test_remove_car() {
        let mut ledger = sample_ledger();
        assert!(ledger.remove_car(1));
        assert!(ledger.car(1).is_none());
        assert!(!ledger.remove_car(1));
    }

    #[test]
    fn test_register_sale() {
        let mut ledger = sample_ledger();
        let sale = ledger
            .register_sale(1, 1, date("2024-08-01"), 7000, date("2024-08-15"))
            .unwrap();

        assert_eq!(sale.employee.full_name, "John Connor");
        assert_eq!(sale.car.model, "Mustang");
        assert_eq!(sale.real_sale_price, 7000);

        assert_eq!(ledger.sales().len(), 1);
        assert!(ledger.car(1).is_none(), "sold car must leave the inventory");
    }

    #[test]
    fn test_register_sale_future_date_rejected() {
        let mut ledger = sample_ledger();
        let result = ledger.register_sale(1, 1, date("2025-01-01"), 7000, date("2024-08-15"));

        assert!(matches!(result, Err(SaleError::FutureDate { .. })));
        assert!(ledger.sales().is_empty());
        assert!(ledger.car(1).is_some(), "rejection must not touch inventory");
    }

    #[test]
    fn test_register_sale_on_today_is_allowed() {
        let mut ledger = sample_ledger();
        let today = date("2024-08-15");
        assert!(ledger.register_sale(1, 1, today, 7000, today).is_ok());
    }

    #[test]
    fn test_register_sale_unknown_employee() {
        let mut ledger = sample_ledger();
        let result = ledger.register_sale(99, 1, date("2024-08-01"), 7000, date("2024-08-15"));

        assert_eq!(result.unwrap_err(), SaleError::EmployeeNotFound(99));
        assert!(ledger.sales().is_empty());
        assert!(ledger.car(1).is_some());
    }

    #[test]
    fn test_register_sale_unknown_car() {
        let mut ledger = sample_ledger();
        let result = ledger.register_sale(1, 99, date("2024-08-01"), 7000, date("2024-08-15"));

        assert_eq!(result.unwrap_err(), SaleError::CarNotFound(99));
        assert!(ledger.sales().is_empty());
    }

    #[test]
    fn test_car_cannot_be_sold_twice() {
        let mut ledger = sample_ledger();
        let today = date("2024-08-15");
        ledger
            .register_sale(1, 1, date("2024-08-01"), 7000, today)
            .unwrap();

        let result = ledger.register_sale(1, 1, date("2024-08-02"), 8000, today);

        assert_eq!(result.unwrap_err(), SaleError::CarNotFound(1));
        assert_eq!(ledger.sales().len(), 1, "log unchanged after rejection");
    }

    #[test]
    fn test_sold_car_survives_in_sale_snapshot() {
        let mut ledger = sample_ledger();
        ledger
            .register_sale(1, 1, date("2024-08-01"), 7000, date("2024-08-15"))
            .unwrap();
        // Mutating the live collections cannot rewrite history.
        ledger.remove_employee(1);

        let sale = &ledger.sales()[0];
        assert_eq!(sale.employee.full_name, "John Connor");
        assert_eq!(sale.car.producer, "Ford");
    }
}
