use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::application::{ReportKind, ReportOutcome, SalonService};
use crate::domain::{format_cents, parse_cents, Car, Employee, Period, Sale};

/// AutoSalon - dealership inventory and sales ledger
#[derive(Parser)]
#[command(name = "autosalon")]
#[command(about = "A local-first inventory and sales ledger for small car dealerships")]
#[command(version)]
pub struct Cli {
    /// Ledger snapshot file path
    #[arg(short, long, default_value = "autosalon.json")]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize an empty ledger file
    Init,

    /// Employee management commands
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Car inventory commands
    #[command(subcommand)]
    Car(CarCommands),

    /// Register a completed sale
    Sell {
        /// Employee id of the seller
        employee_id: u32,

        /// Car id (stock number)
        car_id: u32,

        /// Realized sale price (e.g., "7000" or "7000.00")
        price: String,

        /// Sale date (ISO 8601 format: YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate reports over the sale log
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV
    Export {
        /// What to export: sales, inventory, employees
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Add an employee (overwrites an existing record with the same id)
    Add {
        /// Employee id (must be unique)
        id: u32,

        /// Full name
        full_name: String,

        /// Position (e.g., "Seller")
        #[arg(short, long, default_value = "Seller")]
        position: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,
    },

    /// Remove an employee
    Remove {
        /// Employee id
        id: u32,
    },

    /// List all employees
    List,
}

#[derive(Subcommand)]
pub enum CarCommands {
    /// Add a car to the inventory (overwrites an existing record with the same id)
    Add {
        /// Car id / stock number (must be unique)
        id: u32,

        /// Producer (e.g., "Ford")
        producer: String,

        /// Model (e.g., "Mustang")
        model: String,

        /// Release year
        #[arg(short, long)]
        year: i32,

        /// Acquisition cost (e.g., "5000.00")
        #[arg(short, long)]
        cost: String,

        /// Asking price (e.g., "10000.00")
        #[arg(short, long)]
        price: String,
    },

    /// Remove a car from the inventory
    Remove {
        /// Car id
        id: u32,
    },

    /// List the current inventory
    List,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Full sale log, in registration order
    Sales {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Sales registered on an exact date
    OnDate {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Sales in an inclusive date range
    Period {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Sales closed by one employee
    ByEmployee {
        /// Employee id
        id: u32,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Most sold car model in a period
    BestModel {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Employee with the most sales in a period
    TopSeller {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Total realized profit in a period
    Profit {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    fn open_service(&self) -> Result<SalonService> {
        let service = SalonService::open(&self.file)
            .with_context(|| format!("Failed to open ledger file: {}", self.file))?;
        if self.verbose {
            let ledger = service.ledger();
            eprintln!(
                "[Ledger] {} employee(s), {} car(s), {} sale(s)",
                ledger.employees().len(),
                ledger.cars().len(),
                ledger.sales().len()
            );
        }
        Ok(service)
    }

    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Init => {
                SalonService::init(&self.file)?;
                println!("Ledger initialized: {}", self.file);
            }

            Commands::Employee(employee_cmd) => {
                let mut service = self.open_service()?;
                run_employee_command(&mut service, employee_cmd)?;
            }

            Commands::Car(car_cmd) => {
                let mut service = self.open_service()?;
                run_car_command(&mut service, car_cmd)?;
            }

            Commands::Sell {
                employee_id,
                car_id,
                price,
                date,
            } => {
                let mut service = self.open_service()?;
                let price_cents =
                    parse_cents(price).context("Invalid price format. Use '7000.00' or '7000'")?;

                let sale_date = match date {
                    Some(date_str) => parse_date(date_str).with_context(|| {
                        format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                    })?,
                    None => chrono::Utc::now().date_naive(),
                };

                let sale = service.register_sale(*employee_id, *car_id, sale_date, price_cents)?;

                println!(
                    "Registered sale: {} {} sold by {} on {} for {} (profit {})",
                    sale.car.producer,
                    sale.car.model,
                    sale.employee.full_name,
                    sale.sale_date,
                    format_cents(sale.real_sale_price),
                    format_cents(sale.profit())
                );
            }

            Commands::Report(report_cmd) => {
                let service = self.open_service()?;
                run_report_command(&service, report_cmd)?;
            }

            Commands::Export {
                export_type,
                output,
            } => {
                let service = self.open_service()?;
                run_export_command(&service, export_type, output.as_deref())?;
            }
        }

        Ok(())
    }
}

fn run_employee_command(service: &mut SalonService, cmd: &EmployeeCommands) -> Result<()> {
    match cmd {
        EmployeeCommands::Add {
            id,
            full_name,
            position,
            phone,
            email,
        } => {
            let employee = Employee::new(*id, full_name, position, phone, email);
            service.add_employee(employee)?;
            println!("Added employee: {} ({})", full_name, id);
        }

        EmployeeCommands::Remove { id } => {
            if service.remove_employee(*id)? {
                println!("Removed employee: {}", id);
            } else {
                println!("No employee with id {} - nothing removed.", id);
            }
        }

        EmployeeCommands::List => {
            let employees = service.list_employees();
            print_employees(&employees);
        }
    }
    Ok(())
}

fn run_car_command(service: &mut SalonService, cmd: &CarCommands) -> Result<()> {
    match cmd {
        CarCommands::Add {
            id,
            producer,
            model,
            year,
            cost,
            price,
        } => {
            let cost_cents =
                parse_cents(cost).context("Invalid cost format. Use '5000.00' or '5000'")?;
            let price_cents =
                parse_cents(price).context("Invalid price format. Use '10000.00' or '10000'")?;

            let car = Car::new(*id, producer, model, *year, cost_cents, price_cents);
            service.add_car(car)?;
            println!("Added car: {} {} ({})", producer, model, id);
        }

        CarCommands::Remove { id } => {
            if service.remove_car(*id)? {
                println!("Removed car: {}", id);
            } else {
                println!("No car with id {} - nothing removed.", id);
            }
        }

        CarCommands::List => {
            let cars = service.list_cars();
            print_cars(&cars);
        }
    }
    Ok(())
}

fn run_report_command(service: &SalonService, cmd: &ReportCommands) -> Result<()> {
    let (kind, format) = match cmd {
        ReportCommands::Sales { format } => (ReportKind::AllSales, format),
        ReportCommands::OnDate { date, format } => {
            (ReportKind::SalesOnDate(parse_date(date)?), format)
        }
        ReportCommands::Period { from, to, format } => {
            (ReportKind::SalesInPeriod(parse_period(from, to)?), format)
        }
        ReportCommands::ByEmployee { id, format } => (ReportKind::SalesByEmployee(*id), format),
        ReportCommands::BestModel { from, to, format } => {
            (ReportKind::BestModel(parse_period(from, to)?), format)
        }
        ReportCommands::TopSeller { from, to, format } => {
            (ReportKind::TopSeller(parse_period(from, to)?), format)
        }
        ReportCommands::Profit { from, to, format } => {
            (ReportKind::Profit(parse_period(from, to)?), format)
        }
    };

    let outcome = service.run_report(kind);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        ReportOutcome::Sales(sales) => print_sales(&sales),
        ReportOutcome::Employees(employees) => print_employees(&employees),
        ReportOutcome::Cars(cars) => print_cars(&cars),
        ReportOutcome::BestModel(best) => {
            println!(
                "Best-selling model: {} ({} sale{})",
                best.model,
                best.count,
                plural(best.count)
            );
        }
        ReportOutcome::TopSeller(top) => {
            println!(
                "Top seller: {} (id {}, {} sale{})",
                top.full_name,
                top.employee_id,
                top.count,
                plural(top.count)
            );
        }
        ReportOutcome::Profit(profit) => {
            println!("Total profit: {}", format_cents(profit));
        }
        ReportOutcome::NoSales => {
            println!("No sales in the given period.");
        }
    }

    Ok(())
}

fn run_export_command(
    service: &SalonService,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = match export_type {
        "sales" => exporter.export_sales_csv(writer)?,
        "inventory" => exporter.export_inventory_csv(writer)?,
        "employees" => exporter.export_employees_csv(writer)?,
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: sales, inventory, employees",
                export_type
            );
        }
    };

    if output.is_some() {
        eprintln!("Exported {} record(s)", count);
    }

    Ok(())
}

fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }
    println!(
        "{:<6} {:<22} {:<12} {:<14} EMAIL",
        "ID", "NAME", "POSITION", "PHONE"
    );
    println!("{}", "-".repeat(70));
    for employee in employees {
        println!(
            "{:<6} {:<22} {:<12} {:<14} {}",
            employee.id,
            truncate(&employee.full_name, 22),
            truncate(&employee.position, 12),
            truncate(&employee.phone_number, 14),
            employee.email
        );
    }
}

fn print_cars(cars: &[Car]) {
    if cars.is_empty() {
        println!("No cars in inventory.");
        return;
    }
    println!(
        "{:<6} {:<14} {:<14} {:<6} {:>12} {:>12}",
        "ID", "PRODUCER", "MODEL", "YEAR", "COST", "ASKING"
    );
    println!("{}", "-".repeat(70));
    for car in cars {
        println!(
            "{:<6} {:<14} {:<14} {:<6} {:>12} {:>12}",
            car.id,
            truncate(&car.producer, 14),
            truncate(&car.model, 14),
            car.release_year,
            format_cents(car.cost),
            format_cents(car.potential_sale_price)
        );
    }
}

fn print_sales(sales: &[Sale]) {
    if sales.is_empty() {
        println!("No sales found.");
        return;
    }
    println!(
        "{:<12} {:<20} {:<20} {:>12} {:>12}",
        "DATE", "EMPLOYEE", "CAR", "PRICE", "PROFIT"
    );
    println!("{}", "-".repeat(80));
    for sale in sales {
        let car_label = format!("{} {}", sale.car.producer, sale.car.model);
        println!(
            "{:<12} {:<20} {:<20} {:>12} {:>12}",
            sale.sale_date.to_string(),
            truncate(&sale.employee.full_name, 20),
            truncate(&car_label, 20),
            format_cents(sale.real_sale_price),
            format_cents(sale.profit())
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

// Counts chars, not bytes, so a multibyte name never splits mid-character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").context("Date must be in YYYY-MM-DD format")
}

fn parse_period(from: &str, to: &str) -> Result<Period> {
    let start = parse_date(from).context("Invalid from-date")?;
    let end = parse_date(to).context("Invalid to-date")?;
    Ok(Period::new(start, end))
}
