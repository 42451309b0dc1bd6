//! The catalogue of named reports.
//!
//! Each report binds one query pipeline to the parameters of the reference
//! questions (salary range 1000-3000, department 10, threshold 5000, ...)
//! and renders the answer as a [`ReportOutput`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{ReportError, ReportResult};
use super::queries;
use super::result::{ReportOutput, ResultSet};
use crate::dataset::DatasetProvider;
use crate::model::{DeptNo, Employee};

/// A named report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    SalaryBetween,
    NamesDescending,
    MaxSalaryByJob,
    AverageSalaryDept10,
    AverageSalaryByDepartment,
    OutsideAccounting,
    NamesAndJobs,
    DepartmentPerEmployee,
    AnyInDept40,
    AllEarnAtLeast800,
    ContainsKing,
    AllEmployees,
    FirstPresident,
    UniqueFord,
    CommissionDescending,
    HeadcountByJob,
    TotalCompensation,
    NamesReversed,
    DistinctJobs,
    SkipWhileAtMost5000,
    TakeWhileBelow5000,
    SalaryGrades,
}

#[derive(Serialize)]
struct JobSalary<'a> {
    job: &'a str,
    max_sal: u32,
}

#[derive(Serialize)]
struct JobCount<'a> {
    job: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct DeptAverage {
    dept_no: DeptNo,
    avg_sal: f64,
}

impl Report {
    /// Every report, in catalogue order.
    pub const ALL: &'static [Report] = &[
        Report::SalaryBetween,
        Report::NamesDescending,
        Report::MaxSalaryByJob,
        Report::AverageSalaryDept10,
        Report::AverageSalaryByDepartment,
        Report::OutsideAccounting,
        Report::NamesAndJobs,
        Report::DepartmentPerEmployee,
        Report::AnyInDept40,
        Report::AllEarnAtLeast800,
        Report::ContainsKing,
        Report::AllEmployees,
        Report::FirstPresident,
        Report::UniqueFord,
        Report::CommissionDescending,
        Report::HeadcountByJob,
        Report::TotalCompensation,
        Report::NamesReversed,
        Report::DistinctJobs,
        Report::SkipWhileAtMost5000,
        Report::TakeWhileBelow5000,
        Report::SalaryGrades,
    ];

    /// Stable command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Report::SalaryBetween => "salary-between",
            Report::NamesDescending => "names-descending",
            Report::MaxSalaryByJob => "max-salary-by-job",
            Report::AverageSalaryDept10 => "average-salary-dept-10",
            Report::AverageSalaryByDepartment => "average-salary-by-department",
            Report::OutsideAccounting => "outside-accounting",
            Report::NamesAndJobs => "names-and-jobs",
            Report::DepartmentPerEmployee => "department-per-employee",
            Report::AnyInDept40 => "any-in-dept-40",
            Report::AllEarnAtLeast800 => "all-earn-at-least-800",
            Report::ContainsKing => "contains-king",
            Report::AllEmployees => "all-employees",
            Report::FirstPresident => "first-president",
            Report::UniqueFord => "unique-ford",
            Report::CommissionDescending => "commission-descending",
            Report::HeadcountByJob => "headcount-by-job",
            Report::TotalCompensation => "total-compensation",
            Report::NamesReversed => "names-reversed",
            Report::DistinctJobs => "distinct-jobs",
            Report::SkipWhileAtMost5000 => "skip-while-at-most-5000",
            Report::TakeWhileBelow5000 => "take-while-below-5000",
            Report::SalaryGrades => "salary-grades",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Report::SalaryBetween => "employees earning 1000 to 3000",
            Report::NamesDescending => "employees ordered by name, Z to A",
            Report::MaxSalaryByJob => "highest salary per job",
            Report::AverageSalaryDept10 => "average salary in department 10",
            Report::AverageSalaryByDepartment => "average salary per department",
            Report::OutsideAccounting => "employees joined to departments, excluding ACCOUNTING",
            Report::NamesAndJobs => "name and job of every employee",
            Report::DepartmentPerEmployee => "department name repeated for each employee",
            Report::AnyInDept40 => "does anybody work in department 40",
            Report::AllEarnAtLeast800 => "does everybody earn at least 800",
            Report::ContainsKing => "is there an employee named KING",
            Report::AllEmployees => "every employee record",
            Report::FirstPresident => "first employee with job PRESIDENT",
            Report::UniqueFord => "the single employee named FORD",
            Report::CommissionDescending => "employees by commission, absent as zero, highest first",
            Report::HeadcountByJob => "number of employees per job",
            Report::TotalCompensation => "salary plus commission per employee",
            Report::NamesReversed => "names sorted alphabetically, then reversed",
            Report::DistinctJobs => "distinct jobs joined with '-'",
            Report::SkipWhileAtMost5000 => "by salary, skipping while salary <= 5000",
            Report::TakeWhileBelow5000 => "by salary, taking while salary < 5000",
            Report::SalaryGrades => "salary grade of every employee",
        }
    }

    /// Run the report against a provider.
    pub fn run(&self, p: &dyn DatasetProvider) -> ReportResult<ReportOutput> {
        let output = match self {
            Report::SalaryBetween => employees(queries::salary_between(p, 1000, 3000))?,
            Report::NamesDescending => employees(queries::by_name_descending(p))?,
            Report::MaxSalaryByJob => {
                let groups = queries::max_salary_by_job(p)?;
                rows(groups.iter().map(|(&job, &max_sal)| JobSalary { job, max_sal }))?
            }
            Report::AverageSalaryDept10 => {
                ReportOutput::scalar(queries::average_salary_in_department(p, DeptNo(10))?)
            }
            Report::AverageSalaryByDepartment => {
                let groups = queries::average_salary_by_department(p)?;
                rows(groups.iter().map(|(&dept_no, &avg_sal)| DeptAverage { dept_no, avg_sal }))?
            }
            Report::OutsideAccounting => rows(queries::employees_outside_department(p, "ACCOUNTING"))?,
            Report::NamesAndJobs => rows(queries::names_and_jobs(p))?,
            Report::DepartmentPerEmployee => rows(queries::department_name_per_employee(p))?,
            Report::AnyInDept40 => ReportOutput::scalar(queries::any_in_department(p, DeptNo(40))),
            Report::AllEarnAtLeast800 => ReportOutput::scalar(queries::all_earn_at_least(p, 800)),
            Report::ContainsKing => ReportOutput::scalar(queries::has_employee_named(p, "KING")),
            Report::AllEmployees => rows(queries::materialize(p))?,
            Report::FirstPresident => employees(queries::first_with_job(p, "PRESIDENT"))?,
            Report::UniqueFord => employees(queries::unique_by_name(p, "FORD")?)?,
            Report::CommissionDescending => employees(queries::by_commission_descending(p))?,
            Report::HeadcountByJob => {
                let groups = queries::headcount_by_job(p);
                rows(groups.iter().map(|(&job, &count)| JobCount { job, count }))?
            }
            Report::TotalCompensation => rows(queries::total_compensation(p))?,
            Report::NamesReversed => rows(queries::names_reverse_alphabetical(p))?,
            Report::DistinctJobs => ReportOutput::scalar(queries::distinct_jobs_joined(p, "-")?),
            Report::SkipWhileAtMost5000 => employees(queries::skip_while_salary_at_most(p, 5000))?,
            Report::TakeWhileBelow5000 => employees(queries::take_while_salary_below(p, 5000))?,
            Report::SalaryGrades => rows(queries::salary_grades(p))?,
        };
        Ok(output)
    }
}

fn rows<T, I>(records: I) -> ReportResult<ReportOutput>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    Ok(ReportOutput::Rows(ResultSet::from_records(records)?))
}

fn employees<'a, I>(records: I) -> ReportResult<ReportOutput>
where
    I: IntoIterator<Item = &'a Employee>,
{
    rows(records)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Report {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::ALL
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ReportError::UnknownReport(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{JsonDataset, ReferenceDataset};
    use serde_json::json;

    #[test]
    fn test_names_round_trip() {
        for report in Report::ALL {
            assert_eq!(report.name().parse::<Report>().unwrap(), *report);
        }
    }

    #[test]
    fn test_unknown_report() {
        let err = "no-such-report".parse::<Report>().unwrap_err();
        assert!(matches!(err, ReportError::UnknownReport(name) if name == "no-such-report"));
    }

    #[test]
    fn test_every_report_runs_on_reference() {
        let data = ReferenceDataset::new();
        for report in Report::ALL {
            assert!(report.run(&data).is_ok(), "{} failed", report);
        }
    }

    #[test]
    fn test_scalar_reports() {
        let data = ReferenceDataset::new();
        assert_eq!(Report::AnyInDept40.run(&data).unwrap(), ReportOutput::scalar(false));
        assert_eq!(Report::AllEarnAtLeast800.run(&data).unwrap(), ReportOutput::scalar(true));
        assert_eq!(Report::ContainsKing.run(&data).unwrap(), ReportOutput::scalar(true));
        assert_eq!(Report::AverageSalaryDept10.run(&data).unwrap(), ReportOutput::scalar(5000.0));
    }

    #[test]
    fn test_row_reports() {
        let data = ReferenceDataset::new();
        assert_eq!(Report::SalaryBetween.run(&data).unwrap().row_count(), 2);
        assert_eq!(Report::OutsideAccounting.run(&data).unwrap().row_count(), 3);
        assert_eq!(Report::TakeWhileBelow5000.run(&data).unwrap().row_count(), 3);
        assert_eq!(Report::SkipWhileAtMost5000.run(&data).unwrap().row_count(), 0);
        assert_eq!(Report::AllEmployees.run(&data).unwrap().row_count(), 14);
    }

    #[test]
    fn test_unique_ford_row() {
        let data = ReferenceDataset::new();
        let ReportOutput::Rows(rs) = Report::UniqueFord.run(&data).unwrap() else {
            panic!("Expected rows");
        };
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.rows[0]["ename"], json!("FORD"));
        assert_eq!(rs.rows[0]["comm"], json!(null));
        assert_eq!(rs.rows[0]["hire_date"], json!("1981-12-03"));
    }

    #[test]
    fn test_total_compensation_large_salary() {
        let json = r#"{
            "employees": [
                {"emp_no": 1, "ename": "RICH", "job": "CLERK", "hire_date": "2020-01-02", "sal": 4000000000, "comm": 400000000, "dept_no": 10}
            ],
            "departments": []
        }"#;
        let data = JsonDataset::from_json(json).unwrap();
        let ReportOutput::Rows(rs) = Report::TotalCompensation.run(&data).unwrap() else {
            panic!("Expected rows");
        };
        assert_eq!(rs.rows[0]["total"], json!(4_400_000_000u64));
    }

    #[test]
    fn test_max_salary_by_job_rows() {
        let data = ReferenceDataset::new();
        let ReportOutput::Rows(rs) = Report::MaxSalaryByJob.run(&data).unwrap() else {
            panic!("Expected rows");
        };
        assert_eq!(rs.columns, vec!["job", "max_sal"]);
        let clerk = rs.iter().find(|r| r["job"] == json!("CLERK")).unwrap();
        assert_eq!(clerk["max_sal"], json!(5000));
    }
}
