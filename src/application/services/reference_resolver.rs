//! Share-link to direct-thumbnail URL rewriting.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::ImageReference;

/// Base of the canonical thumbnail URL.
pub const THUMBNAIL_BASE: &str = "https://drive.google.com/thumbnail";

/// Requested thumbnail width.
pub const THUMBNAIL_SIZE: &str = "w1000";

/// `...?id=<id>` or `...&id=<id>`, id running to the next `&`.
static ID_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([^&]+)").expect("valid id parameter pattern"));

/// `.../file/d/<id>/...`
static FILE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/file/d/([^/]+)").expect("valid file path pattern"));

/// Returns the canonical thumbnail URL for a file identifier.
#[must_use]
pub fn thumbnail_url(file_id: &str) -> String {
    format!("{THUMBNAIL_BASE}?id={file_id}&sz={THUMBNAIL_SIZE}")
}

/// Extracts the file identifier from a share link.
///
/// The `id` query parameter is checked before the `/file/d/` path segment.
#[must_use]
pub fn extract_file_id(link: &str) -> Option<&str> {
    [&*ID_PARAM_RE, &*FILE_PATH_RE]
        .into_iter()
        .find_map(|re| re.captures(link).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
}

/// Rewrites a share link to its thumbnail URL.
/// Unrecognized text is returned unchanged.
#[must_use]
pub fn resolve_link(link: &str) -> String {
    extract_file_id(link).map_or_else(|| link.to_string(), thumbnail_url)
}

/// Resolves a photo reference. A missing reference resolves to "".
#[must_use]
pub fn resolve(reference: &ImageReference) -> String {
    reference.as_link().map(resolve_link).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const FILE_ID: &str = "1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh";
    const EXPECTED: &str =
        "https://drive.google.com/thumbnail?id=1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh&sz=w1000";

    #[test_case("https://drive.google.com/open?id=1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh" ; "open_link")]
    #[test_case("https://drive.google.com/file/d/1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh/view" ; "file_view")]
    #[test_case("https://drive.google.com/file/d/1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh/view?usp=sharing" ; "file_view_sharing")]
    #[test_case("https://drive.google.com/uc?id=1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh" ; "uc_link")]
    #[test_case("https://drive.google.com/uc?export=view&id=1l3eAEAhRQjCjM40HS9IPi-fzxGxKnbhh" ; "ampersand_id")]
    fn test_known_share_links(link: &str) {
        assert_eq!(resolve_link(link), EXPECTED);
        assert_eq!(extract_file_id(link), Some(FILE_ID));
    }

    #[test_case("Not a url" ; "plain_text")]
    #[test_case("https://example.com/photo.png" ; "other_host")]
    #[test_case("" ; "empty")]
    #[test_case("https://example.com/?ids=3" ; "similar_param")]
    fn test_unrecognized_passes_through(link: &str) {
        assert_eq!(resolve_link(link), link);
    }

    #[test]
    fn test_missing_reference_resolves_empty() {
        assert_eq!(resolve(&ImageReference::Missing), "");
    }

    #[test]
    fn test_id_stops_at_ampersand() {
        assert_eq!(
            resolve_link("https://drive.google.com/open?id=ABC&usp=drive_fs"),
            "https://drive.google.com/thumbnail?id=ABC&sz=w1000"
        );
    }

    #[test]
    fn test_id_parameter_wins_over_path() {
        assert_eq!(
            resolve_link("https://drive.google.com/file/d/PATHID/view?id=QUERYID"),
            "https://drive.google.com/thumbnail?id=QUERYID&sz=w1000"
        );
    }

    #[test]
    fn test_canonical_url_is_fixed_point() {
        let once = resolve_link("https://drive.google.com/open?id=ABC123");
        assert_eq!(once, "https://drive.google.com/thumbnail?id=ABC123&sz=w1000");
        assert_eq!(resolve_link(&once), once);
    }

    #[test]
    fn test_deterministic() {
        let reference = ImageReference::link("https://drive.google.com/open?id=XYZ");
        assert_eq!(resolve(&reference), resolve(&reference));
    }
}
