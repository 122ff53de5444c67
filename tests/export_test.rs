mod common;

use anyhow::Result;
use autosalon::io::Exporter;
use common::{parse_date, test_service, StandardSalon};

#[test]
fn test_export_sales_csv() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    StandardSalon::create_full(&mut service)?;
    service.register_sale(1, 1, parse_date("2024-08-01"), 7000)?;
    service.register_sale(2, 2, parse_date("2024-08-02"), 5500)?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_sales_csv(&mut buffer)?;
    let output = String::from_utf8(buffer)?;

    assert_eq!(count, 2);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3); // header + 2 rows
    assert!(lines[0].starts_with("sale_date,employee_id,employee_name"));
    assert!(lines[1].contains("John Connor"));
    assert!(lines[1].ends_with("7000,2000"), "price and profit columns");
    Ok(())
}

#[test]
fn test_export_inventory_csv_skips_sold_cars() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    StandardSalon::create_full(&mut service)?;
    service.register_sale(1, 1, parse_date("2024-08-01"), 7000)?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_inventory_csv(&mut buffer)?;
    let output = String::from_utf8(buffer)?;

    assert_eq!(count, 3);
    assert!(!output.contains("Mustang"), "sold car is gone");
    assert!(output.contains("Corolla"));
    Ok(())
}

#[test]
fn test_export_employees_csv() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    StandardSalon::create_full(&mut service)?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_employees_csv(&mut buffer)?;
    let output = String::from_utf8(buffer)?;

    assert_eq!(count, 2);
    assert!(output.starts_with("id,full_name,position,phone_number,email"));
    assert!(output.contains("Kyle Reese"));
    Ok(())
}
