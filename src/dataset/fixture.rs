//! The reference EMP/DEPT/SALGRADE fixture.

use chrono::NaiveDate;

use super::provider::DatasetProvider;
use crate::model::{Department, DeptNo, EmpNo, Employee, SalaryGrade};

type EmployeeRow = (u32, &'static str, &'static str, Option<u32>, NaiveDate, u32, Option<u32>, u32);

// emp_no, ename, job, mgr, hire_date, sal, comm, dept_no
const EMPLOYEES: [EmployeeRow; 14] = [
    (7369, "SMITH", "CLERK", Some(7902), ymd(1980, 12, 17), 800, None, 20),
    (7499, "ALLEN", "SALESMAN", Some(7698), ymd(1981, 2, 20), 1500, Some(400), 30),
    (7521, "WARD", "SALESMAN", Some(7698), ymd(1981, 2, 22), 1250, Some(500), 30),
    (7566, "JONES", "MANAGER", Some(7839), ymd(1981, 4, 2), 5000, None, 10),
    (7654, "MARTIN", "SALESMAN", Some(7698), ymd(1981, 9, 28), 5000, Some(300), 10),
    (7698, "BLAKE", "MANAGER", Some(7839), ymd(1981, 5, 1), 5000, None, 10),
    (7782, "CLARK", "MANAGER", Some(7839), ymd(1981, 6, 9), 5000, None, 10),
    (7788, "SCOTT", "ANALYST", Some(7566), ymd(1987, 4, 19), 5000, None, 10),
    (7839, "KING", "PRESIDENT", None, ymd(1981, 11, 17), 5000, None, 10),
    (7844, "TURNER", "SALESMAN", Some(7698), ymd(1981, 9, 8), 5000, Some(0), 10),
    (7876, "ADAMS", "ANALYST", Some(7788), ymd(1987, 5, 23), 5000, None, 10),
    (7900, "JAMES", "ANALYST", Some(7698), ymd(1981, 12, 3), 5000, None, 10),
    (7902, "FORD", "ANALYST", Some(7566), ymd(1981, 12, 3), 5000, None, 10),
    (7934, "MILLER", "CLERK", Some(7782), ymd(1982, 1, 23), 5000, None, 10),
];

/// Calendar date checked while the table above is const-evaluated.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

/// Hard-coded reference dataset: 14 employees, 4 departments, 5 salary bands.
///
/// Department 10 (ACCOUNTING) holds eleven employees all paid 5000; the
/// three remaining employees work in RESEARCH and SALES. Nobody works in
/// department 40.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    salary_grades: Vec<SalaryGrade>,
}

impl ReferenceDataset {
    /// Build the fixture.
    pub fn new() -> Self {
        let employees = EMPLOYEES.iter().map(emp).collect();

        let departments = vec![
            dept(10, "ACCOUNTING", "NEW YORK"),
            dept(20, "RESEARCH", "DALLAS"),
            dept(30, "SALES", "CHICAGO"),
            dept(40, "OPERATIONS", "BOSTON"),
        ];

        let salary_grades = vec![
            SalaryGrade { grade: 1, lo_sal: 700, hi_sal: 1200 },
            SalaryGrade { grade: 2, lo_sal: 1201, hi_sal: 1400 },
            SalaryGrade { grade: 3, lo_sal: 1401, hi_sal: 2000 },
            SalaryGrade { grade: 4, lo_sal: 2001, hi_sal: 3000 },
            SalaryGrade { grade: 5, lo_sal: 3001, hi_sal: 9999 },
        ];

        Self { employees, departments, salary_grades }
    }
}

impl Default for ReferenceDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetProvider for ReferenceDataset {
    fn all_employees(&self) -> &[Employee] {
        &self.employees
    }

    fn all_departments(&self) -> &[Department] {
        &self.departments
    }

    fn all_salary_grades(&self) -> &[SalaryGrade] {
        &self.salary_grades
    }
}

fn emp(&(emp_no, ename, job, mgr, hire_date, sal, comm, dept_no): &EmployeeRow) -> Employee {
    Employee {
        emp_no: EmpNo(emp_no),
        ename: ename.to_string(),
        job: job.to_string(),
        mgr: mgr.map(EmpNo),
        hire_date,
        sal,
        comm,
        dept_no: DeptNo(dept_no),
    }
}

fn dept(dept_no: u32, dname: &str, loc: &str) -> Department {
    Department {
        dept_no: DeptNo(dept_no),
        dname: dname.to_string(),
        loc: loc.to_string(),
    }
}
