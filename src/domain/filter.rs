//! Department/skill filtering of directory records.

use std::collections::HashSet;

use crate::domain::entities::EmployeeRecord;

/// Distinct values offered by the two filter controls, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct departments.
    pub departments: Vec<String>,
    /// Distinct skills.
    pub skills: Vec<String>,
}

impl FilterOptions {
    /// Collects distinct values from the records.
    #[must_use]
    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let mut options = Self::default();
        for record in records {
            if !options.departments.contains(&record.department) {
                options.departments.push(record.department.clone());
            }
            if !options.skills.contains(&record.skill) {
                options.skills.push(record.skill.clone());
            }
        }
        options
    }
}

/// Selected values of the two filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    departments: HashSet<String>,
    skills: HashSet<String>,
}

impl FilterSelection {
    /// Creates a selection from explicit values.
    #[must_use]
    pub fn new<D, S>(departments: D, skills: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            departments: departments.into_iter().map(Into::into).collect(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Selects every offered value, the initial state of the controls.
    #[must_use]
    pub fn all(options: &FilterOptions) -> Self {
        Self::new(options.departments.iter().cloned(), options.skills.iter().cloned())
    }

    /// Returns true if the department is selected.
    #[must_use]
    pub fn has_department(&self, department: &str) -> bool {
        self.departments.contains(department)
    }

    /// Returns true if the skill is selected.
    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// A record matches iff both its department and its skill are selected.
    #[must_use]
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.has_department(&record.department) && self.has_skill(&record.skill)
    }

    /// Returns matching records in source order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [EmployeeRecord]) -> Vec<&'a EmployeeRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
