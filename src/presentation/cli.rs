//! Command-line diagnostics.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::application::services::{ImageFetcher, ProbeVerdict, classify_response, resolve};
use crate::application::use_cases::{LoadDirectoryUseCase, LoadOutcome};
use crate::domain::entities::{ImageBytes, ImageReference};
use crate::domain::errors::LoadError;
use crate::domain::ports::{DiagnosticsPort, ImageTransportPort};

/// Result of probing one record's photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Record name.
    pub name: String,
    /// Photo reference as written in the source.
    pub original: String,
    /// Resolved photo URL.
    pub url: String,
    /// Outcome of the probe.
    pub verdict: ProbeVerdict,
}

/// Summary of a probe run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    /// Per-record results in directory order.
    pub reports: Vec<ProbeReport>,
    /// Records without a photo reference.
    pub without_photo: usize,
}

impl ProbeSummary {
    /// Number of photos that cannot be displayed.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|r| !r.verdict.is_ok()).count()
    }
}

/// Requests every photo in the directory and classifies the responses.
///
/// Bypasses the image cache so every link is checked against the network.
///
/// # Errors
/// Returns error if the directory cannot be loaded.
pub async fn check_images(
    loader: &LoadDirectoryUseCase,
    transport: &dyn ImageTransportPort,
) -> Result<ProbeSummary, LoadError> {
    let table = match loader.execute().await {
        LoadOutcome::Loaded(table) => table,
        LoadOutcome::Empty => return Ok(ProbeSummary::default()),
        LoadOutcome::Failed(e) => return Err(e),
    };

    let mut summary = ProbeSummary::default();
    for record in table.records() {
        if record.photo.is_blank() {
            summary.without_photo += 1;
            continue;
        }

        let url = resolve(&record.photo);
        let verdict = match transport.get(&url).await {
            Ok(response) => {
                classify_response(response.status, response.content_type.as_deref())
            }
            Err(e) => ProbeVerdict::Failed(e.to_string()),
        };
        debug!(name = %record.name, url = %url, verdict = %verdict, "Photo probed");

        summary.reports.push(ProbeReport {
            name: record.name.clone(),
            original: record.photo.to_string(),
            url,
            verdict,
        });
    }

    info!(
        probed = summary.reports.len(),
        failures = summary.failures(),
        without_photo = summary.without_photo,
        "Photo check finished"
    );
    Ok(summary)
}

/// Writes a probe summary as plain text.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_probe_summary(summary: &ProbeSummary, out: &mut impl Write) -> io::Result<()> {
    for report in &summary.reports {
        writeln!(out, "{}", report.name)?;
        writeln!(out, "  original:  {}", report.original)?;
        writeln!(out, "  resolved:  {}", report.url)?;
        writeln!(out, "  {}", report.verdict)?;
    }
    writeln!(
        out,
        "{} checked, {} failed, {} without photo",
        summary.reports.len(),
        summary.failures(),
        summary.without_photo
    )
}

/// Result of fetching a single reference.
#[derive(Debug, Clone)]
pub struct FetchReport {
    /// URL the reference resolved to.
    pub url: String,
    /// Downloaded photo.
    pub image: ImageBytes,
}

/// Resolves and downloads one photo reference.
///
/// Returns `None` for a blank reference or a failed download; failures are
/// reported on `diagnostics`.
pub async fn fetch_reference(
    fetcher: &ImageFetcher,
    reference: &str,
    diagnostics: &dyn DiagnosticsPort,
) -> Option<FetchReport> {
    let reference = ImageReference::link(reference.trim());
    let url = resolve(&reference);
    let image = fetcher.fetch(&reference, diagnostics).await?;

    Some(FetchReport { url, image })
}

/// Writes a fetch report as plain text.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_fetch_report(report: &FetchReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "url:     {}", report.url)?;
    writeln!(out, "type:    {}", report.image.mime_type())?;
    writeln!(out, "bytes:   {}", report.image.len())?;
    if report.image.looks_like_html() {
        writeln!(out, "warning: body looks like an HTML page, not an image")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::DEFAULT_REFRESH_INTERVAL;
    use crate::domain::entities::ColumnMapping;
    use crate::domain::ports::mocks::{
        MockDiagnostics, MockRecordSource, MockTransport, employee_row,
    };
    use crate::infrastructure::image::MemoryImageCache;
    use std::sync::Arc;

    const THUMB_A: &str = "https://drive.google.com/thumbnail?id=A&sz=w1000";
    const THUMB_B: &str = "https://drive.google.com/thumbnail?id=B&sz=w1000";

    fn loader(source: MockRecordSource) -> LoadDirectoryUseCase {
        LoadDirectoryUseCase::new(Arc::new(source), ColumnMapping::default(), DEFAULT_REFRESH_INTERVAL)
    }

    #[tokio::test]
    async fn test_check_images_classifies_each_photo() {
        let source = MockRecordSource::with_rows(vec![
            employee_row("Sato", "A", "X", "https://drive.google.com/open?id=A"),
            employee_row("Suzuki", "A", "Y", "https://drive.google.com/file/d/B/view"),
            employee_row("Tanaka", "B", "X", ""),
        ]);
        let transport = MockTransport::new()
            .respond(THUMB_A, 200, b"PNGDATA")
            .respond(THUMB_B, 403, b"");

        let summary = check_images(&loader(source), &transport).await.unwrap();

        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.reports[0].original, "https://drive.google.com/open?id=A");
        assert_eq!(summary.reports[0].verdict, ProbeVerdict::Image);
        assert_eq!(summary.reports[1].original, "https://drive.google.com/file/d/B/view");
        assert_eq!(summary.reports[1].url, THUMB_B);
        assert_eq!(summary.reports[1].verdict, ProbeVerdict::HttpError(403));
        assert_eq!(summary.without_photo, 1);
        assert_eq!(summary.failures(), 1);
    }

    #[tokio::test]
    async fn test_check_images_propagates_load_failure() {
        let source = MockRecordSource::failing(LoadError::MissingCredentials);

        let result = check_images(&loader(source), &MockTransport::new()).await;

        assert_eq!(result, Err(LoadError::MissingCredentials));
    }

    #[test]
    fn test_write_probe_summary() {
        let summary = ProbeSummary {
            reports: vec![ProbeReport {
                name: "Sato".into(),
                original: "https://drive.google.com/open?id=A".into(),
                url: THUMB_A.into(),
                verdict: ProbeVerdict::HttpError(404),
            }],
            without_photo: 2,
        };
        let mut out = Vec::new();

        write_probe_summary(&summary, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Sato\n"));
        assert!(text.contains("  original:  https://drive.google.com/open?id=A\n"));
        assert!(text.contains("  resolved:  https://drive.google.com/thumbnail?id=A&sz=w1000\n"));
        assert!(text.contains("ERROR (HTTP 404)"));
        assert!(text.ends_with("1 checked, 1 failed, 2 without photo\n"));
    }

    #[tokio::test]
    async fn test_fetch_reference() {
        let transport = MockTransport::new().respond(THUMB_A, 200, b"PNGDATA");
        let fetcher = ImageFetcher::new(Arc::new(transport), Arc::new(MemoryImageCache::unbounded()));

        let diagnostics = MockDiagnostics::new();

        let report = fetch_reference(&fetcher, " https://drive.google.com/open?id=A ", &diagnostics)
            .await
            .unwrap();

        assert_eq!(report.url, THUMB_A);
        assert_eq!(report.image.as_bytes(), b"PNGDATA");
        assert_eq!(diagnostics.count(), 0);

        let mut out = Vec::new();
        write_fetch_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("type:    image/png"));
        assert!(text.contains("bytes:   7"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let transport = MockTransport::new().respond(THUMB_A, 404, b"");
        let fetcher = ImageFetcher::new(Arc::new(transport), Arc::new(MemoryImageCache::unbounded()));
        let diagnostics = MockDiagnostics::new();

        let report = fetch_reference(&fetcher, "https://drive.google.com/open?id=A", &diagnostics).await;

        assert!(report.is_none());
        assert_eq!(diagnostics.count(), 1);
        assert!(diagnostics.messages()[0].contains("Failed to load image: HTTP 404"));
    }

    #[tokio::test]
    async fn test_fetch_blank_reference() {
        let fetcher = ImageFetcher::new(
            Arc::new(MockTransport::new()),
            Arc::new(MemoryImageCache::unbounded()),
        );

        let diagnostics = MockDiagnostics::new();

        let result = fetch_reference(&fetcher, "   ", &diagnostics).await;

        assert!(result.is_none());
        assert_eq!(diagnostics.count(), 0);
    }
}
