//! Record model for the EMP/DEPT/SALGRADE schema.
//!
//! Records are plain immutable values. Nothing here enforces dataset
//! invariants; providers are trusted to hand out well-formed rows.

mod records;
mod types;

pub use records::{Department, Employee, SalaryGrade};
pub use types::{DeptNo, EmpNo};
