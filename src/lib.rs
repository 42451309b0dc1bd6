//! EmpDept - an in-memory query surface over the EMP/DEPT sample schema.
//!
//! This crate answers ad-hoc analytical questions (filtering, joining,
//! grouping, ordering, quantifiers, reductions) over two fixed collections,
//! employees and departments, plus the classic salary grade table. There is
//! no storage engine and no SQL: queries are pipelines of plain functions
//! over iterators.
//!
//! # Example
//!
//! ```
//! use empdept::dataset::{DatasetProvider, ReferenceDataset};
//! use empdept::query::{filter, order_by, Direction};
//!
//! let data = ReferenceDataset::new();
//! let clerks = filter(data.all_employees(), |e| e.job == "CLERK");
//! let by_salary = order_by(clerks, |e| e.sal, Direction::Descending);
//! assert_eq!(by_salary[0].ename, "MILLER");
//! ```

pub mod dataset;
pub mod model;
pub mod query;
pub mod reports;
pub mod session;
