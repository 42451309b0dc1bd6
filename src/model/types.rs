//! Type-safe identifiers for the record model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Employee number (primary key of the employee collection).
///
/// This makes sure we don't accidentally pass a department number where an
/// employee number is expected, e.g. when resolving `mgr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmpNo(pub u32);

impl EmpNo {
    /// raw integer value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EmpNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmpNo {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Department number (primary key of the department collection, foreign key
/// on employees).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeptNo(pub u32);

impl DeptNo {
    /// raw integer value
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeptNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeptNo {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
