//! Employee, department and salary grade records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{DeptNo, EmpNo};

/// A row of the employee collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_no: EmpNo,
    pub ename: String,
    pub job: String,
    /// Manager's employee number; absent for the top of the hierarchy.
    #[serde(default)]
    pub mgr: Option<EmpNo>,
    pub hire_date: NaiveDate,
    /// Salary in whole currency units.
    pub sal: u32,
    /// Commission. `None` means "not applicable", which is not the same as zero.
    #[serde(default)]
    pub comm: Option<u32>,
    pub dept_no: DeptNo,
}

/// A row of the department collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub dept_no: DeptNo,
    pub dname: String,
    pub loc: String,
}

/// A salary band. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryGrade {
    pub grade: u32,
    pub lo_sal: u32,
    pub hi_sal: u32,
}

impl SalaryGrade {
    /// Check if a salary falls inside this band.
    pub fn contains(&self, sal: u32) -> bool {
        (self.lo_sal..=self.hi_sal).contains(&sal)
    }
}
