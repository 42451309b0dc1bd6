//! Rendered report output.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// A rendered row: column name to value.
pub type Row = BTreeMap<String, Value>;

/// Output of a report run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutput {
    /// Tabular result.
    Rows(ResultSet),
    /// A single value such as a boolean, an average or a joined string.
    Scalar(Value),
}

impl ReportOutput {
    /// Create a scalar output.
    pub fn scalar(value: impl Into<Value>) -> Self {
        ReportOutput::Scalar(value.into())
    }

    /// Number of rows, counting a scalar as one.
    pub fn row_count(&self) -> usize {
        match self {
            ReportOutput::Rows(rs) => rs.len(),
            ReportOutput::Scalar(_) => 1,
        }
    }

    /// Convert to a JSON value: an array of row objects or the bare scalar.
    pub fn to_json(&self) -> Value {
        match self {
            ReportOutput::Rows(rs) => Value::Array(
                rs.iter()
                    .map(|row| Value::Object(row.iter().map(|(k, v)| (k.clone(), v.clone())).collect()))
                    .collect(),
            ),
            ReportOutput::Scalar(value) => value.clone(),
        }
    }
}

/// A set of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Column names in order.
    pub columns: Vec<String>,
    /// Rows as maps of column name to value.
    pub rows: Vec<Row>,
}

impl ResultSet {
    /// Render serializable records into rows.
    ///
    /// Structs become one column per field; any other value lands in a
    /// single `value` column. Columns come from the first row.
    pub fn from_records<T, I>(records: I) -> serde_json::Result<Self>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let rows = records
            .into_iter()
            .map(|record| -> serde_json::Result<Row> {
                Ok(match serde_json::to_value(record)? {
                    Value::Object(fields) => fields.into_iter().collect(),
                    other => Row::from([("value".to_string(), other)]),
                })
            })
            .collect::<serde_json::Result<Vec<Row>>>()?;
        let columns = rows.first().map(|r| r.keys().cloned().collect()).unwrap_or_default();
        Ok(Self { columns, rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}
