//! Derived queries over one fetched employee snapshot.
//!
//! All functions are pure; callers fetch the collection once per operation.

use crate::employee::types::Employee;

/// Number of names returned by [`top_ten_names`].
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `fragment` (case-sensitive), in fetch order.
pub fn search(all: &[Employee], fragment: &str) -> Vec<Employee> {
    all.iter()
        .filter(|e| e.name.contains(fragment))
        .cloned()
        .collect()
}

/// Highest salary in the collection, 0 when it is empty.
pub fn highest_salary(all: &[Employee]) -> i64 {
    all.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best-paid employees, highest first.
///
/// Equal salaries keep their fetch order.
pub fn top_earner_names(all: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = all.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}

pub fn top_ten_names(all: &[Employee]) -> Vec<String> {
    top_earner_names(all, TOP_EARNERS_LIMIT)
}
