//! JSON dataset documents.
//!
//! A document has the shape
//!
//! ```json
//! { "employees": [...], "departments": [...], "salary_grades": [...] }
//! ```
//!
//! where `salary_grades` may be omitted. Records use the field names of the
//! model types and hire dates are ISO `YYYY-MM-DD` strings.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{DatasetError, DatasetResult};
use super::provider::DatasetProvider;
use crate::model::{Department, DeptNo, Employee, SalaryGrade};

#[derive(Debug, Deserialize)]
struct Document {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    #[serde(default)]
    salary_grades: Vec<SalaryGrade>,
}

#[derive(Debug, Serialize)]
struct DocumentRef<'a> {
    employees: &'a [Employee],
    departments: &'a [Department],
    salary_grades: &'a [SalaryGrade],
}

/// A dataset loaded from a JSON document.
#[derive(Debug, Clone)]
pub struct JsonDataset {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    salary_grades: Vec<SalaryGrade>,
    source: Option<PathBuf>,
}

impl JsonDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let doc: Document = serde_json::from_str(json)?;
        Self::from_document(doc, None)
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: Document = serde_json::from_str(&json)?;
        Self::from_document(doc, Some(path.to_path_buf()))
    }

    fn from_document(doc: Document, source: Option<PathBuf>) -> DatasetResult<Self> {
        validate(&doc)?;
        warn_orphans(&doc);
        debug!(
            employees = doc.employees.len(),
            departments = doc.departments.len(),
            salary_grades = doc.salary_grades.len(),
            "loaded dataset document"
        );
        Ok(Self {
            employees: doc.employees,
            departments: doc.departments,
            salary_grades: doc.salary_grades,
            source,
        })
    }

    /// File this dataset was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl DatasetProvider for JsonDataset {
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

/// Export any provider as a pretty-printed JSON document.
pub fn to_json(provider: &dyn DatasetProvider) -> DatasetResult<String> {
    let doc = DocumentRef {
        employees: provider.all_employees(),
        departments: provider.all_departments(),
        salary_grades: provider.all_salary_grades(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Check primary key uniqueness and required text fields.
fn validate(doc: &Document) -> DatasetResult<()> {
    let mut emp_nos = HashSet::new();
    for e in &doc.employees {
        if !emp_nos.insert(e.emp_no) {
            return Err(DatasetError::DuplicateEmployee(e.emp_no));
        }
        for (field, value) in [("ename", &e.ename), ("job", &e.job)] {
            if value.trim().is_empty() {
                return Err(DatasetError::EmptyField { record: "employee", key: e.emp_no.get(), field });
            }
        }
    }

    let mut dept_nos = HashSet::new();
    for d in &doc.departments {
        if !dept_nos.insert(d.dept_no) {
            return Err(DatasetError::DuplicateDepartment(d.dept_no));
        }
        if d.dname.trim().is_empty() {
            return Err(DatasetError::EmptyField {
                record: "department",
                key: d.dept_no.get(),
                field: "dname",
            });
        }
    }

    let mut grades = HashSet::new();
    for g in &doc.salary_grades {
        if !grades.insert(g.grade) {
            return Err(DatasetError::DuplicateGrade(g.grade));
        }
    }

    Ok(())
}

/// Orphaned employees are legal; joins simply drop them.
fn warn_orphans(doc: &Document) {
    let known: HashSet<DeptNo> = doc.departments.iter().map(|d| d.dept_no).collect();
    for e in doc.employees.iter().filter(|e| !known.contains(&e.dept_no)) {
        warn!(emp_no = %e.emp_no, dept_no = %e.dept_no, "employee references unknown department");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ReferenceDataset;
    use crate::model::EmpNo;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL: &str = r#"{
        "employees": [
            {"emp_no": 1, "ename": "ANNA", "job": "CLERK", "hire_date": "2020-01-02",
             "sal": 900, "dept_no": 10},
            {"emp_no": 2, "ename": "BORIS", "job": "ANALYST", "mgr": 1,
             "hire_date": "2021-03-04", "sal": 2000, "comm": 150, "dept_no": 99}
        ],
        "departments": [
            {"dept_no": 10, "dname": "ACCOUNTING", "loc": "NEW YORK"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let data = JsonDataset::from_json(SMALL).unwrap();
        assert_eq!(data.all_employees().len(), 2);
        assert_eq!(data.all_departments().len(), 1);
        assert!(data.all_salary_grades().is_empty());
        assert_eq!(data.all_employees()[1].comm, Some(150));
        assert!(data.source().is_none());
    }

    #[test]
    fn test_orphan_is_not_an_error() {
        let data = JsonDataset::from_json(SMALL).unwrap();
        assert_eq!(data.all_employees()[1].dept_no, DeptNo(99));
    }

    #[test]
    fn test_duplicate_employee_rejected() {
        let json = r#"{
            "employees": [
                {"emp_no": 1, "ename": "A", "job": "CLERK", "hire_date": "2020-01-02", "sal": 1, "dept_no": 10},
                {"emp_no": 1, "ename": "B", "job": "CLERK", "hire_date": "2020-01-02", "sal": 1, "dept_no": 10}
            ],
            "departments": []
        }"#;
        let err = JsonDataset::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateEmployee(EmpNo(1))));
    }

    #[test]
    fn test_duplicate_department_rejected() {
        let json = r#"{
            "employees": [],
            "departments": [
                {"dept_no": 10, "dname": "A", "loc": "X"},
                {"dept_no": 10, "dname": "B", "loc": "Y"}
            ]
        }"#;
        let err = JsonDataset::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateDepartment(DeptNo(10))));
    }

    #[test]
    fn test_duplicate_grade_rejected() {
        let json = r#"{
            "employees": [],
            "departments": [],
            "salary_grades": [
                {"grade": 1, "lo_sal": 700, "hi_sal": 1200},
                {"grade": 1, "lo_sal": 1201, "hi_sal": 1400}
            ]
        }"#;
        let err = JsonDataset::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateGrade(1)));
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{
            "employees": [
                {"emp_no": 5, "ename": " ", "job": "CLERK", "hire_date": "2020-01-02", "sal": 1, "dept_no": 10}
            ],
            "departments": []
        }"#;
        let err = JsonDataset::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::EmptyField { record: "employee", key: 5, field: "ename" }
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonDataset::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
        assert!(!err.is_integrity_violation());
    }

    #[test]
    fn test_reference_export_reloads() {
        let reference = ReferenceDataset::new();
        let json = to_json(&reference).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = JsonDataset::from_path(file.path()).unwrap();
        assert_eq!(loaded.all_employees(), reference.all_employees());
        assert_eq!(loaded.all_departments(), reference.all_departments());
        assert_eq!(loaded.all_salary_grades(), reference.all_salary_grades());
        assert_eq!(loaded.source(), Some(file.path()));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonDataset::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
