//! Query compositions.
//!
//! [`queries`] holds one function per question, each built from the
//! operators in [`crate::query`]. [`Report`] names those questions with fixed
//! parameters so they can be run and printed from the command line.

mod catalog;
mod error;
pub mod queries;
mod result;

pub use catalog::Report;
pub use error::{ReportError, ReportResult};
pub use result::{ReportOutput, ResultSet, Row};
