//! The dataset provider contract.

use crate::model::{Department, Employee, SalaryGrade};

/// Source of the fixed record collections a query session runs against.
///
/// Implementations must hand out the same rows, in the same order, on every
/// call for the lifetime of the provider.
pub trait DatasetProvider {
    /// All employees.
    fn all_employees(&self) -> &[Employee];

    /// All departments.
    fn all_departments(&self) -> &[Department];

    /// All salary bands. Providers without a grade table return nothing.
    fn all_salary_grades(&self) -> &[SalaryGrade] {
        &[]
    }
}
