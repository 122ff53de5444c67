use std::path::Path;

use chrono::{NaiveDate, Utc};

use crate::domain::{
    best_selling_model, period_profit, sales_by_employee, sales_in_period, sales_on_date,
    top_employee, Car, CarId, Cents, Employee, EmployeeId, Ledger, Sale,
};
use crate::storage::SnapshotStore;

use super::{AppError, ReportKind, ReportOutcome};

/// Application service providing high-level operations over the dealership
/// ledger. This is the primary interface for any client (CLI, API, TUI).
///
/// The service owns the in-memory ledger plus its snapshot file and persists
/// the whole ledger after every successful mutation, so each CLI invocation
/// sees the state the previous one left behind.
pub struct SalonService {
    ledger: Ledger,
    store: SnapshotStore,
}

impl SalonService {
    /// Start a fresh ledger and write its (empty) snapshot.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let store = SnapshotStore::new(path.as_ref());
        let ledger = Ledger::new();
        store.save(&ledger)?;
        Ok(Self { ledger, store })
    }

    /// Open an existing snapshot file. Fails without touching anything when
    /// the file is missing, unreadable, malformed or carries an unknown
    /// format version.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let store = SnapshotStore::new(path.as_ref());
        let ledger = store.load()?;
        Ok(Self { ledger, store })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ========================
    // Mutations
    // ========================

    /// Add (or overwrite) an employee and persist.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), AppError> {
        self.ledger.add_employee(employee);
        self.store.save(&self.ledger)?;
        Ok(())
    }

    /// Remove an employee. Absence is a no-op, reported via the flag.
    pub fn remove_employee(&mut self, id: EmployeeId) -> Result<bool, AppError> {
        let removed = self.ledger.remove_employee(id);
        if removed {
            self.store.save(&self.ledger)?;
        }
        Ok(removed)
    }

    /// Add (or overwrite) a car and persist.
    pub fn add_car(&mut self, car: Car) -> Result<(), AppError> {
        self.ledger.add_car(car);
        self.store.save(&self.ledger)?;
        Ok(())
    }

    /// Remove a car from the inventory. Absence is a no-op.
    pub fn remove_car(&mut self, id: CarId) -> Result<bool, AppError> {
        let removed = self.ledger.remove_car(id);
        if removed {
            self.store.save(&self.ledger)?;
        }
        Ok(removed)
    }

    /// Register a sale dated no later than today. The "now" of the
    /// future-date rule is the moment of registration.
    pub fn register_sale(
        &mut self,
        employee_id: EmployeeId,
        car_id: CarId,
        sale_date: NaiveDate,
        real_sale_price: Cents,
    ) -> Result<Sale, AppError> {
        let today = Utc::now().date_naive();
        let sale = self
            .ledger
            .register_sale(employee_id, car_id, sale_date, real_sale_price, today)?
            .clone();
        self.store.save(&self.ledger)?;
        Ok(sale)
    }

    // ========================
    // Queries
    // ========================

    /// Employees sorted by id, for stable listings.
    pub fn list_employees(&self) -> Vec<Employee> {
        let mut employees: Vec<_> = self.ledger.employees().values().cloned().collect();
        employees.sort_by_key(|e| e.id);
        employees
    }

    /// Inventory sorted by id.
    pub fn list_cars(&self) -> Vec<Car> {
        let mut cars: Vec<_> = self.ledger.cars().values().cloned().collect();
        cars.sort_by_key(|c| c.id);
        cars
    }

    /// The full sale log, in registration order.
    pub fn list_sales(&self) -> Vec<Sale> {
        self.ledger.sales().to_vec()
    }

    /// Run one report against the current ledger content. Pure with respect
    /// to the ledger; never mutates.
    pub fn run_report(&self, kind: ReportKind) -> ReportOutcome {
        let sales = self.ledger.sales();
        match kind {
            ReportKind::AllSales => ReportOutcome::Sales(sales.to_vec()),
            ReportKind::SalesOnDate(date) => {
                ReportOutcome::Sales(cloned(sales_on_date(sales, date)))
            }
            ReportKind::SalesInPeriod(period) => {
                ReportOutcome::Sales(cloned(sales_in_period(sales, period)))
            }
            ReportKind::SalesByEmployee(id) => {
                ReportOutcome::Sales(cloned(sales_by_employee(sales, id)))
            }
            ReportKind::BestModel(period) => match best_selling_model(sales, period) {
                Some(best) => ReportOutcome::BestModel(best),
                None => ReportOutcome::NoSales,
            },
            ReportKind::TopSeller(period) => match top_employee(sales, period) {
                Some(top) => ReportOutcome::TopSeller(top),
                None => ReportOutcome::NoSales,
            },
            ReportKind::Profit(period) => ReportOutcome::Profit(period_profit(sales, period)),
            ReportKind::Employees => ReportOutcome::Employees(self.list_employees()),
            ReportKind::Cars => ReportOutcome::Cars(self.list_cars()),
        }
    }
}

fn cloned(sales: Vec<&Sale>) -> Vec<Sale> {
    sales.into_iter().cloned().collect()
}
