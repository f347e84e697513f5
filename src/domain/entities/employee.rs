//! Employee records and the column layout they are read from.

use serde::{Deserialize, Serialize};

use super::ImageReference;
use crate::domain::errors::LoadError;
use crate::domain::ports::RawRow;

/// One row of the staff directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Display name.
    pub name: String,
    /// Department (first categorical field).
    pub department: String,
    /// Skill (second categorical field).
    pub skill: String,
    /// Photo link.
    pub photo: ImageReference,
}

impl EmployeeRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        skill: impl Into<String>,
        photo: impl Into<ImageReference>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            skill: skill.into(),
            photo: photo.into(),
        }
    }

    /// Normalizes a raw source row using the column mapping.
    ///
    /// # Errors
    /// Returns [`LoadError::MissingColumn`] if a mapped column is absent.
    pub fn from_row(row: &RawRow, columns: &ColumnMapping) -> Result<Self, LoadError> {
        let cell = |column: &str| {
            row.get(column)
                .ok_or_else(|| LoadError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            name: cell_text(cell(&columns.name)?),
            department: cell_text(cell(&columns.department)?),
            skill: cell_text(cell(&columns.skill)?),
            photo: ImageReference::from_cell(cell(&columns.photo)?),
        })
    }
}

/// Renders a spreadsheet cell as display text.
#[must_use]
pub fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Ordered, immutable snapshot of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeTable {
    records: Vec<EmployeeRecord>,
}

impl EmployeeTable {
    /// Wraps loaded records, keeping source order.
    #[must_use]
    pub const fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    /// Normalizes raw rows.
    ///
    /// # Errors
    /// Returns an error on the first row missing a mapped column.
    pub fn from_rows(rows: &[RawRow], columns: &ColumnMapping) -> Result<Self, LoadError> {
        rows.iter()
            .map(|row| EmployeeRecord::from_row(row, columns))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Source column names for each record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Name column.
    #[serde(default = "default_name_column")]
    pub name: String,
    /// Photo link column.
    #[serde(default = "default_photo_column")]
    pub photo: String,
    /// Department column.
    #[serde(default = "default_department_column")]
    pub department: String,
    /// Skill column.
    #[serde(default = "default_skill_column")]
    pub skill: String,
}

fn default_name_column() -> String {
    "名前".to_string()
}

fn default_photo_column() -> String {
    "顔写真".to_string()
}

fn default_department_column() -> String {
    "質問1".to_string()
}

fn default_skill_column() -> String {
    "質問2".to_string()
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: default_name_column(),
            photo: default_photo_column(),
            department: default_department_column(),
            skill: default_skill_column(),
        }
    }
}
