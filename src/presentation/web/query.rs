//! Filter query decoding.

use crate::application::dto::DirectoryQuery;

/// Decodes `department=`, `skill=` and `applied=` pairs from a raw query string.
///
/// Keys may repeat. Unknown keys are ignored. With the `applied` marker
/// the form was submitted and an absent control selects nothing. Without
/// it, only the controls named in the query are narrowed.
#[must_use]
pub fn parse_directory_query(raw: Option<&str>) -> DirectoryQuery {
    let Some(raw) = raw else {
        return DirectoryQuery::initial();
    };

    let mut applied = false;
    let mut departments = Vec::new();
    let mut skills = Vec::new();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "applied" => applied = true,
            "department" => departments.push(value.into_owned()),
            "skill" => skills.push(value.into_owned()),
            _ => {}
        }
    }

    if applied {
        return DirectoryQuery::submitted(departments, skills);
    }

    DirectoryQuery {
        departments: (!departments.is_empty()).then_some(departments),
        skills: (!skills.is_empty()).then_some(skills),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::FilterOptions;

    #[test]
    fn test_missing_query_is_initial() {
        assert_eq!(parse_directory_query(None), DirectoryQuery::initial());
        assert_eq!(parse_directory_query(Some("")), DirectoryQuery::initial());
    }

    #[test]
    fn test_repeated_keys() {
        let query = parse_directory_query(Some("applied=1&department=A&department=B&skill=X"));

        assert_eq!(
            query,
            DirectoryQuery::submitted(vec!["A".into(), "B".into()], vec!["X".into()])
        );
    }

    #[test]
    fn test_applied_with_nothing_selected() {
        let query = parse_directory_query(Some("applied=1"));

        assert_eq!(query, DirectoryQuery::submitted(Vec::new(), Vec::new()));
    }

    #[test]
    fn test_percent_encoded_values() {
        let query = parse_directory_query(Some(
            "applied=1&department=%E5%96%B6%E6%A5%AD&skill=C%2B%2B+and+Rust",
        ));

        assert_eq!(query.departments, Some(vec!["営業".to_string()]));
        assert_eq!(query.skills, Some(vec!["C++ and Rust".to_string()]));
    }

    #[test]
    fn test_single_control_without_marker_keeps_other_fully_selected() {
        let options = FilterOptions {
            departments: vec!["A".into(), "B".into()],
            skills: vec!["X".into(), "Y".into()],
        };

        let selection = parse_directory_query(Some("department=A")).selection(&options);

        assert!(selection.has_department("A"));
        assert!(!selection.has_department("B"));
        assert!(selection.has_skill("X"));
        assert!(selection.has_skill("Y"));
    }
}
