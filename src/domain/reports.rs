use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Cents, EmployeeId, Sale};

/// Inclusive date range used to filter sales for aggregate reports.
/// Callers are responsible for `start <= end`; no reordering is applied, an
/// inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Sale count for one car model within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCount {
    pub model: String,
    pub count: usize,
}

/// Sale count for one employee within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerCount {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub count: usize,
}

/// Sales registered on exactly the given date.
pub fn sales_on_date(sales: &[Sale], date: NaiveDate) -> Vec<&Sale> {
    sales.iter().filter(|s| s.sale_date == date).collect()
}

/// Sales with a sale date inside the period, inclusive both ends.
/// Registration order is preserved.
pub fn sales_in_period(sales: &[Sale], period: Period) -> Vec<&Sale> {
    sales
        .iter()
        .filter(|s| period.contains(s.sale_date))
        .collect()
}

/// Sales closed by the given employee, in registration order.
pub fn sales_by_employee(sales: &[Sale], employee_id: EmployeeId) -> Vec<&Sale> {
    sales
        .iter()
        .filter(|s| s.employee.id == employee_id)
        .collect()
}

/// The car model with the most sales inside the period.
///
/// Ties are broken deterministically: among models with the same count, the
/// one whose first in-period sale was registered earliest wins. Returns
/// `None` when the period has no sales at all.
pub fn best_selling_model(sales: &[Sale], period: Period) -> Option<ModelCount> {
    let (model, count) =
        most_common_by(sales_in_period(sales, period), |sale| sale.car.model.clone())?;
    Some(ModelCount { model, count })
}

/// The employee with the most sales inside the period.
///
/// Grouping is by employee id, so two sellers who happen to share a full
/// name are never conflated; the name is carried along for display only.
/// Same tie-break and empty-period behavior as [`best_selling_model`].
pub fn top_employee(sales: &[Sale], period: Period) -> Option<SellerCount> {
    let in_period = sales_in_period(sales, period);
    let ((employee_id, full_name), count) = most_common_by(in_period, |sale| {
        (sale.employee.id, sale.employee.full_name.clone())
    })?;
    Some(SellerCount {
        employee_id,
        full_name,
        count,
    })
}

/// Total realized profit (sale price minus car cost) over the period.
/// A period with no sales yields exactly zero; the empty case is not special.
pub fn period_profit(sales: &[Sale], period: Period) -> Cents {
    sales_in_period(sales, period)
        .iter()
        .map(|sale| sale.profit())
        .sum()
}

/// Count occurrences of a key over the filtered sales and pick the most
/// frequent one, breaking ties by first occurrence.
fn most_common_by<K, F>(sales: Vec<&Sale>, key_of: F) -> Option<(K, usize)>
where
    K: std::hash::Hash + Eq + Clone,
    F: Fn(&Sale) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut first_seen: Vec<K> = Vec::new();

    for sale in sales {
        let key = key_of(sale);
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(key);
        }
        *count += 1;
    }

    // Strict comparison keeps the earliest-seen key on ties.
    first_seen
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .fold(None, |best, candidate| match best {
            Some((_, best_count)) if best_count >= candidate.1 => best,
            _ => Some(candidate),
        })
}
