//! Classification of photo responses for the image diagnostics command.

use std::fmt;

/// Verdict on a single photo URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeVerdict {
    /// 2xx with an `image/*` content type.
    Image,
    /// 2xx but an HTML page, usually a viewer or virus-scan interstitial.
    Html,
    /// 2xx with some other content type.
    NotAnImage(Option<String>),
    /// Non-2xx status.
    HttpError(u16),
    /// Request never produced a response.
    Failed(String),
}

impl ProbeVerdict {
    /// Returns true if the photo can be displayed.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Image)
    }
}

impl fmt::Display for ProbeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "OK (image accessible)"),
            Self::Html => write!(
                f,
                "WARNING (returned HTML instead of an image, likely a viewer or virus-scan page)"
            ),
            Self::NotAnImage(ct) => write!(
                f,
                "ERROR (not an image: {})",
                ct.as_deref().unwrap_or("no content type")
            ),
            Self::HttpError(status) => write!(f, "ERROR (HTTP {status})"),
            Self::Failed(reason) => write!(f, "ERROR ({reason})"),
        }
    }
}

/// Classifies a response by status and content type.
#[must_use]
pub fn classify_response(status: u16, content_type: Option<&str>) -> ProbeVerdict {
    if !(200..300).contains(&status) {
        return ProbeVerdict::HttpError(status);
    }

    match content_type {
        Some(ct) if ct.starts_with("image/") => ProbeVerdict::Image,
        Some(ct) if ct.starts_with("text/html") => ProbeVerdict::Html,
        other => ProbeVerdict::NotAnImage(other.map(String::from)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(200, Some("image/jpeg"), ProbeVerdict::Image ; "jpeg")]
    #[test_case(204, Some("image/png"), ProbeVerdict::Image ; "png_no_content")]
    #[test_case(200, Some("text/html; charset=utf-8"), ProbeVerdict::Html ; "html")]
    #[test_case(200, Some("application/json"), ProbeVerdict::NotAnImage(Some("application/json".into())) ; "json")]
    #[test_case(200, None, ProbeVerdict::NotAnImage(None) ; "no_content_type")]
    #[test_case(404, Some("text/html"), ProbeVerdict::HttpError(404) ; "not_found")]
    #[test_case(500, None, ProbeVerdict::HttpError(500) ; "server_error")]
    fn test_classify(status: u16, content_type: Option<&str>, expected: ProbeVerdict) {
        assert_eq!(classify_response(status, content_type), expected);
    }

    #[test]
    fn test_only_images_are_ok() {
        assert!(ProbeVerdict::Image.is_ok());
        assert!(!ProbeVerdict::Html.is_ok());
        assert!(!ProbeVerdict::HttpError(403).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(ProbeVerdict::HttpError(403).to_string(), "ERROR (HTTP 403)");
        assert!(ProbeVerdict::Html.to_string().starts_with("WARNING"));
    }
}
