//! Directory render pass.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::{CardView, DirectoryPage, DirectoryQuery, DirectoryView};
use crate::application::services::ImageFetcher;
use crate::domain::filter::FilterOptions;
use crate::domain::ports::DiagnosticsPort;
use crate::domain::Diagnostic;

use super::load_directory_use_case::{LoadDirectoryUseCase, LoadOutcome};

/// Default number of cards per row.
pub const DEFAULT_COLUMNS_PER_ROW: usize = 3;

/// Filters the directory and fetches the photo of every visible record.
///
/// Photos are fetched one after another within a pass.
#[derive(Clone)]
pub struct RenderDirectoryUseCase {
    loader: Arc<LoadDirectoryUseCase>,
    fetcher: ImageFetcher,
    columns_per_row: usize,
}

impl RenderDirectoryUseCase {
    /// Creates the render use case.
    #[must_use]
    pub fn new(loader: Arc<LoadDirectoryUseCase>, fetcher: ImageFetcher, columns_per_row: usize) -> Self {
        Self {
            loader,
            fetcher,
            columns_per_row: columns_per_row.max(1),
        }
    }

    /// Runs one render pass for the given filter query.
    pub async fn execute(
        &self,
        query: &DirectoryQuery,
        diagnostics: &dyn DiagnosticsPort,
    ) -> DirectoryPage {
        let table = match self.loader.execute().await {
            LoadOutcome::Loaded(table) => table,
            LoadOutcome::Empty => {
                diagnostics.report(Diagnostic::warn("Directory", "The directory is empty."));
                return DirectoryPage::Empty;
            }
            LoadOutcome::Failed(e) => {
                diagnostics.report(Diagnostic::error(
                    "Directory",
                    format!("Failed to load data: {e}"),
                ));
                diagnostics.report(Diagnostic::info(
                    "Directory",
                    "Check the data source settings and credentials.",
                ));
                return DirectoryPage::Unavailable(e);
            }
        };

        let options = FilterOptions::from_records(table.records());
        let selection = query.selection(&options);
        let visible = selection.apply(table.records());

        debug!(
            total = table.len(),
            visible = visible.len(),
            "Directory filtered"
        );

        let mut cards = Vec::with_capacity(visible.len());
        for record in &visible {
            let image = self.fetcher.fetch(&record.photo, diagnostics).await;
            cards.push(CardView::new(record, image));
        }

        let missing = cards.iter().filter(|c| c.image.is_none()).count();
        info!(cards = cards.len(), without_photo = missing, "Directory rendered");

        let total = cards.len();
        let mut rows = Vec::with_capacity(total.div_ceil(self.columns_per_row));
        let mut cards = cards.into_iter().peekable();
        while cards.peek().is_some() {
            rows.push(cards.by_ref().take(self.columns_per_row).collect());
        }

        DirectoryPage::Ready(DirectoryView {
            options,
            selection,
            total,
            rows,
        })
    }

    /// Drops cached records and photos.
    pub async fn clear_caches(&self) {
        self.loader.invalidate().await;
        self.fetcher.clear_cache().await;
        info!("Directory and image caches cleared");
    }
}
