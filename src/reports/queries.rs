//! Named one-shot query pipelines over a dataset provider.

use serde::Serialize;

use crate::dataset::DatasetProvider;
use crate::model::{DeptNo, Employee};
use crate::query::{
    aggregate, all, any, average, contains, distinct, filter, first_match, group_by_aggregate,
    join, max, order_by, project, project_many, reverse, single_match, skip_while, take_while,
    try_group_by_aggregate, Direction, Groups, QueryResult,
};

/// Employee name paired with its department name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDepartment<'a> {
    pub ename: &'a str,
    pub dname: &'a str,
}

/// Name and job projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAndJob<'a> {
    pub ename: &'a str,
    pub job: &'a str,
}

/// Salary plus commission, with absent commission counted as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compensation<'a> {
    pub ename: &'a str,
    pub sal: u32,
    pub comm: Option<u32>,
    pub total: u64,
}

/// Employee placed in a salary band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradedEmployee<'a> {
    pub ename: &'a str,
    pub sal: u32,
    pub grade: u32,
}

/// Employees whose salary lies in `lo..=hi`.
pub fn salary_between(p: &dyn DatasetProvider, lo: u32, hi: u32) -> Vec<&Employee> {
    filter(p.all_employees(), |e| (lo..=hi).contains(&e.sal)).collect()
}

/// Employees ordered by name, Z to A.
pub fn by_name_descending(p: &dyn DatasetProvider) -> Vec<&Employee> {
    order_by(p.all_employees(), |&e| e.ename.as_str(), Direction::Descending)
}

/// Highest salary per job title.
pub fn max_salary_by_job(p: &dyn DatasetProvider) -> QueryResult<Groups<&str, u32>> {
    try_group_by_aggregate(p.all_employees(), |&e| e.job.as_str(), |group| max(group, |e| e.sal))
}

/// Mean salary per department.
pub fn average_salary_by_department(p: &dyn DatasetProvider) -> QueryResult<Groups<DeptNo, f64>> {
    try_group_by_aggregate(
        p.all_employees(),
        |e| e.dept_no,
        |group| average(group, |e| f64::from(e.sal)),
    )
}

/// Mean salary of one department. Fails if the department has no staff.
pub fn average_salary_in_department(p: &dyn DatasetProvider, dept_no: DeptNo) -> QueryResult<f64> {
    average(filter(p.all_employees(), |e| e.dept_no == dept_no), |e| f64::from(e.sal))
}

/// Employees joined to their department, minus those in `excluded`.
///
/// The department name is tested after the join, so employees whose
/// department does not exist drop out of the join itself.
pub fn employees_outside_department<'a>(
    p: &'a dyn DatasetProvider,
    excluded: &str,
) -> Vec<EmployeeDepartment<'a>> {
    let joined = join(
        p.all_employees(),
        p.all_departments(),
        |e| e.dept_no,
        |d| d.dept_no,
        |&e, &d| EmployeeDepartment { ename: &e.ename, dname: &d.dname },
    );
    filter(joined, |row| row.dname != excluded).collect()
}

/// Name and job of every employee.
pub fn names_and_jobs(p: &dyn DatasetProvider) -> Vec<NameAndJob<'_>> {
    project(p.all_employees(), |e| NameAndJob { ename: &e.ename, job: &e.job }).collect()
}

/// One department name per employee, expanded department by department.
pub fn department_name_per_employee(p: &dyn DatasetProvider) -> Vec<&str> {
    project_many(p.all_departments(), move |d| {
        filter(p.all_employees(), move |e| e.dept_no == d.dept_no).map(move |_| d.dname.as_str())
    })
    .collect()
}

/// Whether anybody works in `dept_no`.
pub fn any_in_department(p: &dyn DatasetProvider, dept_no: DeptNo) -> bool {
    any(p.all_employees(), |e| e.dept_no == dept_no)
}

/// Whether every employee earns at least `floor`.
pub fn all_earn_at_least(p: &dyn DatasetProvider, floor: u32) -> bool {
    all(p.all_employees(), |e| e.sal >= floor)
}

/// Whether an employee called `name` exists.
pub fn has_employee_named(p: &dyn DatasetProvider, name: &str) -> bool {
    contains(project(p.all_employees(), |e| e.ename.as_str()), name)
}

/// Owned copy of every employee.
pub fn materialize(p: &dyn DatasetProvider) -> Vec<Employee> {
    project(p.all_employees(), Employee::clone).collect()
}

/// First employee holding `job`.
pub fn first_with_job<'a>(p: &'a dyn DatasetProvider, job: &str) -> Option<&'a Employee> {
    first_match(p.all_employees(), |e| e.job == job)
}

/// The employee called `name`. Fails if the name is not unique.
pub fn unique_by_name<'a>(p: &'a dyn DatasetProvider, name: &str) -> QueryResult<Option<&'a Employee>> {
    single_match(p.all_employees(), |e| e.ename == name)
}

/// Employees by commission, highest first, absent commission counted as zero.
pub fn by_commission_descending(p: &dyn DatasetProvider) -> Vec<&Employee> {
    order_by(p.all_employees(), |e| e.comm.unwrap_or(0), Direction::Descending)
}

/// Number of employees per job title.
pub fn headcount_by_job(p: &dyn DatasetProvider) -> Groups<&str, usize> {
    group_by_aggregate(p.all_employees(), |&e| e.job.as_str(), |group| group.len())
}

/// Salary plus commission for every employee.
pub fn total_compensation(p: &dyn DatasetProvider) -> Vec<Compensation<'_>> {
    project(p.all_employees(), |e| Compensation {
        ename: &e.ename,
        sal: e.sal,
        comm: e.comm,
        total: u64::from(e.sal) + u64::from(e.comm.unwrap_or(0)),
    })
    .collect()
}

/// Employee names sorted A to Z and then reversed.
pub fn names_reverse_alphabetical(p: &dyn DatasetProvider) -> Vec<&str> {
    let names = project(p.all_employees(), |e| e.ename.as_str());
    reverse(order_by(names, |&name| name, Direction::Ascending))
}

/// Distinct job titles in first-seen order, joined with `separator`.
pub fn distinct_jobs_joined(p: &dyn DatasetProvider, separator: &str) -> QueryResult<String> {
    let jobs = distinct(project(p.all_employees(), |e| e.job.clone()));
    aggregate(jobs, |acc, job| format!("{}{}{}", acc, separator, job))
}

/// Employees by ascending salary after dropping the prefix earning at most
/// `threshold`.
pub fn skip_while_salary_at_most(p: &dyn DatasetProvider, threshold: u32) -> Vec<&Employee> {
    let sorted = order_by(p.all_employees(), |e| e.sal, Direction::Ascending);
    skip_while(sorted, |e| e.sal <= threshold).collect()
}

/// Employees by ascending salary up to the first one earning `threshold` or
/// more.
pub fn take_while_salary_below(p: &dyn DatasetProvider, threshold: u32) -> Vec<&Employee> {
    let sorted = order_by(p.all_employees(), |e| e.sal, Direction::Ascending);
    take_while(sorted, |e| e.sal < threshold).collect()
}

/// Employees matched to the salary band containing their salary.
///
/// A non-equi join: employees outside every band are dropped.
pub fn salary_grades(p: &dyn DatasetProvider) -> Vec<GradedEmployee<'_>> {
    project_many(p.all_employees(), move |e| {
        filter(p.all_salary_grades(), move |g| g.contains(e.sal)).map(move |g| GradedEmployee {
            ename: &e.ename,
            sal: e.sal,
            grade: g.grade,
        })
    })
    .collect()
}
