//! HTML rendering of the directory page.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tera::{Context, Tera};

use crate::application::dto::{CardView, DirectoryPage};
use crate::domain::Diagnostic;
use crate::domain::entities::ImageBytes;

const TEMPLATE_NAME: &str = "directory.html";
const TEMPLATE: &str = include_str!("templates/directory.html");

#[derive(Debug, Serialize)]
struct OptionContext<'a> {
    value: &'a str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct CardContext<'a> {
    name: &'a str,
    department: &'a str,
    skill: &'a str,
    image_src: Option<String>,
}

impl<'a> CardContext<'a> {
    fn new(card: &'a CardView) -> Self {
        Self {
            name: &card.name,
            department: &card.department,
            skill: &card.skill,
            image_src: card.image.as_ref().map(data_uri),
        }
    }
}

/// Encodes a photo as a `data:` URI.
#[must_use]
pub fn data_uri(image: &ImageBytes) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type(),
        STANDARD.encode(image.as_bytes())
    )
}

/// Renders the directory page template.
pub struct PageRenderer {
    tera: Tera,
    title: String,
    columns_per_row: usize,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("title", &self.title)
            .field("columns_per_row", &self.columns_per_row)
            .finish_non_exhaustive()
    }
}

impl PageRenderer {
    /// Compiles the page template.
    ///
    /// # Errors
    /// Returns error if the template fails to parse.
    pub fn new(title: impl Into<String>, columns_per_row: usize) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

        Ok(Self {
            tera,
            title: title.into(),
            columns_per_row: columns_per_row.max(1),
        })
    }

    /// Renders one page with the diagnostics raised while building it.
    ///
    /// # Errors
    /// Returns error if rendering fails.
    pub fn render(
        &self,
        page: &DirectoryPage,
        diagnostics: &[Diagnostic],
    ) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("columns_per_row", &self.columns_per_row);
        context.insert("diagnostics", diagnostics);

        match page {
            DirectoryPage::Ready(view) => {
                let rows: Vec<Vec<CardContext<'_>>> = view
                    .rows
                    .iter()
                    .map(|row| row.iter().map(CardContext::new).collect())
                    .collect();

                context.insert("state", "ready");
                context.insert("total", &view.total);
                context.insert("rows", &rows);
                context.insert(
                    "departments",
                    &options(&view.options.departments, |v| {
                        view.selection.has_department(v)
                    }),
                );
                context.insert(
                    "skills",
                    &options(&view.options.skills, |v| view.selection.has_skill(v)),
                );
            }
            DirectoryPage::Empty => {
                context.insert("state", "empty");
                insert_no_options(&mut context);
            }
            DirectoryPage::Unavailable(_) => {
                context.insert("state", "unavailable");
                insert_no_options(&mut context);
            }
        }

        self.tera.render(TEMPLATE_NAME, &context)
    }
}

fn options<'a>(values: &'a [String], selected: impl Fn(&str) -> bool) -> Vec<OptionContext<'a>> {
    values
        .iter()
        .map(|value| OptionContext {
            value,
            selected: selected(value),
        })
        .collect()
}

fn insert_no_options(context: &mut Context) {
    let none: &[OptionContext<'_>] = &[];
    context.insert("departments", none);
    context.insert("skills", none);
    context.insert("rows", none);
    context.insert("total", &0usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::DirectoryView;
    use crate::domain::entities::EmployeeRecord;
    use crate::domain::errors::LoadError;
    use crate::domain::filter::{FilterOptions, FilterSelection};

    fn renderer() -> PageRenderer {
        PageRenderer::new("Staff", 3).unwrap()
    }

    fn ready_page() -> DirectoryPage {
        let with_photo = EmployeeRecord::new("Sato", "Sales", "Excel", "");
        let without_photo = EmployeeRecord::new("<Suzuki>", "Dev", "Rust", "");
        let options = FilterOptions {
            departments: vec!["Sales".into(), "Dev".into()],
            skills: vec!["Excel".into(), "Rust".into()],
        };
        DirectoryPage::Ready(DirectoryView {
            selection: FilterSelection::new(["Sales".to_string()], ["Excel".to_string(), "Rust".to_string()]),
            options,
            total: 2,
            rows: vec![vec![
                CardView::new(&with_photo, Some(ImageBytes::new(&b"PNGDATA"[..], Some("image/png".into())))),
                CardView::new(&without_photo, None),
            ]],
        })
    }

    #[test]
    fn test_data_uri() {
        let image = ImageBytes::new(&b"PNGDATA"[..], Some("image/png".into()));

        assert_eq!(data_uri(&image), "data:image/png;base64,UE5HREFUQQ==");
    }

    #[test]
    fn test_renders_cards_and_count() {
        let html = renderer().render(&ready_page(), &[]).unwrap();

        assert!(html.contains("<title>Staff</title>"));
        assert!(html.contains("2 results"));
        assert!(html.contains("UE5HREFUQQ=="));
        assert!(html.contains("Could not load image"));
        assert!(html.contains("&lt;Suzuki&gt;"));
        assert!(html.contains(r#"<option value="Sales" selected>"#));
        assert!(html.contains(r#"<option value="Dev">"#));
    }

    #[test]
    fn test_unavailable_renders_no_grid() {
        let diagnostics = vec![
            Diagnostic::error("Directory", "Failed to load data: no credentials"),
            Diagnostic::info("Directory", "Check the data source settings and credentials."),
        ];

        let html = renderer()
            .render(&DirectoryPage::Unavailable(LoadError::MissingCredentials), &diagnostics)
            .unwrap();

        assert!(html.contains("Failed to load data"));
        assert!(html.contains(r#"class="diagnostic error""#));
        assert!(!html.contains("results"));
    }

    #[test]
    fn test_empty_renders_warning_only() {
        let diagnostics = vec![Diagnostic::warn("Directory", "The directory is empty.")];

        let html = renderer().render(&DirectoryPage::Empty, &diagnostics).unwrap();

        assert!(html.contains("The directory is empty."));
        assert!(!html.contains(r#"class="card""#));
    }
}
