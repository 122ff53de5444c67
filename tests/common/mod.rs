// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use autosalon::application::SalonService;
use autosalon::domain::{Car, Employee};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary snapshot file
pub fn test_service() -> Result<(SalonService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("test.json");
    let service = SalonService::init(&path)?;
    Ok((service, temp_dir))
}

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Test fixture: standard dealership setup
pub struct StandardSalon;

impl StandardSalon {
    /// One seller, one car: the John Connor / Mustang scenario records.
    pub fn create_basic(service: &mut SalonService) -> Result<()> {
        service.add_employee(Employee::new(
            1,
            "John Connor",
            "Seller",
            "123456789",
            "judgmentday@gmail.com",
        ))?;
        service.add_car(Car::new(1, "Ford", "Mustang", 2024, 5000, 10000))?;
        Ok(())
    }

    /// Two sellers and a small mixed inventory.
    pub fn create_full(service: &mut SalonService) -> Result<()> {
        Self::create_basic(service)?;
        service.add_employee(Employee::new(
            2,
            "Kyle Reese",
            "Seller",
            "987654321",
            "kreese@example.com",
        ))?;
        service.add_car(Car::new(2, "Ford", "Focus", 2022, 3000, 6000))?;
        service.add_car(Car::new(3, "Ford", "Focus", 2023, 3500, 6500))?;
        service.add_car(Car::new(4, "Toyota", "Corolla", 2021, 4000, 7000))?;
        Ok(())
    }
}
