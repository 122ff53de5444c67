use std::io::Write;

use anyhow::Result;

use crate::application::SalonService;

/// Exporter for converting ledger data to CSV.
pub struct Exporter<'a> {
    service: &'a SalonService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a SalonService) -> Self {
        Self { service }
    }

    /// Export the sale log to CSV. Returns the number of rows written.
    pub fn export_sales_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let sales = self.service.list_sales();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "sale_date",
            "employee_id",
            "employee_name",
            "car_id",
            "producer",
            "model",
            "cost_cents",
            "real_sale_price_cents",
            "profit_cents",
        ])?;

        let mut count = 0;
        for sale in &sales {
            csv_writer.write_record([
                sale.sale_date.to_string(),
                sale.employee.id.to_string(),
                sale.employee.full_name.clone(),
                sale.car.id.to_string(),
                sale.car.producer.clone(),
                sale.car.model.clone(),
                sale.car.cost.to_string(),
                sale.real_sale_price.to_string(),
                sale.profit().to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the current inventory to CSV.
    pub fn export_inventory_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let cars = self.service.list_cars();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "producer",
            "model",
            "release_year",
            "cost_cents",
            "potential_sale_price_cents",
        ])?;

        let mut count = 0;
        for car in &cars {
            csv_writer.write_record([
                car.id.to_string(),
                car.producer.clone(),
                car.model.clone(),
                car.release_year.to_string(),
                car.cost.to_string(),
                car.potential_sale_price.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the employee roster to CSV.
    pub fn export_employees_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let employees = self.service.list_employees();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "full_name", "position", "phone_number", "email"])?;

        let mut count = 0;
        for employee in &employees {
            csv_writer.write_record([
                employee.id.to_string(),
                employee.full_name.clone(),
                employee.position.clone(),
                employee.phone_number.clone(),
                employee.email.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }
}
