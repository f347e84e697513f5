//! Directory page DTOs.

use crate::domain::entities::{EmployeeRecord, ImageBytes};
use crate::domain::errors::LoadError;
use crate::domain::filter::{FilterOptions, FilterSelection};

/// Filter values submitted by the viewer.
///
/// A control left as `None` selects every offered value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    /// Selected departments, or `None` for all.
    pub departments: Option<Vec<String>>,
    /// Selected skills, or `None` for all.
    pub skills: Option<Vec<String>>,
}

impl DirectoryQuery {
    /// Initial page load: every option selected.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Submitted form; an empty control selects nothing.
    #[must_use]
    pub fn submitted(departments: Vec<String>, skills: Vec<String>) -> Self {
        Self {
            departments: Some(departments),
            skills: Some(skills),
        }
    }

    /// Turns the query into a selection over the available options.
    #[must_use]
    pub fn selection(&self, options: &FilterOptions) -> FilterSelection {
        let departments = self.departments.as_ref().unwrap_or(&options.departments);
        let skills = self.skills.as_ref().unwrap_or(&options.skills);
        FilterSelection::new(departments.iter().cloned(), skills.iter().cloned())
    }
}

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Display name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Skill.
    pub skill: String,
    /// Photo, or `None` for the textual fallback.
    pub image: Option<ImageBytes>,
}

impl CardView {
    /// Builds a card from a record and its fetched photo.
    #[must_use]
    pub fn new(record: &EmployeeRecord, image: Option<ImageBytes>) -> Self {
        Self {
            name: record.name.clone(),
            department: record.department.clone(),
            skill: record.skill.clone(),
            image,
        }
    }
}

/// Filtered directory laid out in rows.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    /// Values offered by the filter controls.
    pub options: FilterOptions,
    /// Values currently selected.
    pub selection: FilterSelection,
    /// Number of matching records.
    pub total: usize,
    /// Cards grouped into fixed-width rows.
    pub rows: Vec<Vec<CardView>>,
}

/// Outcome of a render pass.
#[derive(Debug, Clone)]
pub enum DirectoryPage {
    /// Records loaded and filtered.
    Ready(DirectoryView),
    /// The source holds no records.
    Empty,
    /// The source could not be read; nothing else is rendered.
    Unavailable(LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_query_selects_all() {
        let options = FilterOptions {
            departments: vec!["A".into(), "B".into()],
            skills: vec!["X".into()],
        };

        let selection = DirectoryQuery::initial().selection(&options);

        assert!(selection.has_department("A"));
        assert!(selection.has_department("B"));
        assert!(selection.has_skill("X"));
    }

    #[test]
    fn test_submitted_query_uses_values() {
        let options = FilterOptions {
            departments: vec!["A".into(), "B".into()],
            skills: vec!["X".into()],
        };

        let selection =
            DirectoryQuery::submitted(vec!["B".into()], Vec::new()).selection(&options);

        assert!(!selection.has_department("A"));
        assert!(selection.has_department("B"));
        assert!(!selection.has_skill("X"));
    }

    #[test]
    fn test_unset_control_selects_all() {
        let options = FilterOptions {
            departments: vec!["A".into(), "B".into()],
            skills: vec!["X".into(), "Y".into()],
        };
        let query = DirectoryQuery {
            departments: Some(vec!["A".into()]),
            skills: None,
        };

        let selection = query.selection(&options);

        assert!(selection.has_department("A"));
        assert!(!selection.has_department("B"));
        assert!(selection.has_skill("X"));
        assert!(selection.has_skill("Y"));
    }
}
