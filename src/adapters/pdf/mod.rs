//! PDF report rendering
//!
//! Wraps the `genpdf` backend behind the domain error type. The renderer
//! receives the report title, the summary lines and the table grid, and
//! stages the rendered file at the configured output path.

use crate::config::ReportConfig;
use crate::domain::errors::ShowroomError;
use crate::domain::result::Result;
use chrono::Local;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::Style;
use genpdf::{fonts, Element, SimplePageDecorator};
use std::path::{Path, PathBuf};

// Relative column weights for ID / Car / Price / Total Sales.
const COLUMN_WEIGHTS: [usize; 4] = [1, 4, 2, 2];

/// Renders the sales report as a PDF document
pub struct ReportRenderer {
    font_dir: PathBuf,
    font_family: String,
}

impl ReportRenderer {
    /// Creates a renderer from the report configuration
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            font_dir: PathBuf::from(&config.font_dir),
            font_family: config.font_family.clone(),
        }
    }

    /// Renders the report and writes it to `output`
    ///
    /// The document carries the title, the summary lines as body paragraphs,
    /// a framed table with a bold header row, and a generation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Render`] if the fonts cannot be loaded or the
    /// backend fails to lay out or write the document.
    pub fn render(
        &self,
        title: &str,
        summary: &[String],
        table: &[Vec<String>],
        output: &Path,
    ) -> Result<()> {
        let font_family = self.load_fonts()?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(title);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        doc.push(Paragraph::new(title).styled(Style::new().bold().with_font_size(16)));
        doc.push(Break::new(1));

        for line in summary {
            doc.push(Paragraph::new(line.as_str()));
        }
        doc.push(Break::new(1));

        if !table.is_empty() {
            doc.push(self.build_table(table)?);
            doc.push(Break::new(1));
        }

        doc.push(
            Paragraph::new(format!("Generated {}", Local::now().format("%Y-%m-%d %H:%M")))
                .styled(Style::new().italic().with_font_size(8)),
        );

        doc.render_to_file(output).map_err(|e| {
            ShowroomError::Render(format!(
                "Failed to write report to {}: {}",
                output.display(),
                e
            ))
        })?;

        Ok(())
    }

    fn load_fonts(&self) -> Result<fonts::FontFamily<fonts::FontData>> {
        if !self.font_dir.is_dir() {
            return Err(ShowroomError::Render(format!(
                "Font directory not found: {}. Place the {} font files there or set report.font_dir",
                self.font_dir.display(),
                self.font_family
            )));
        }

        fonts::from_files(&self.font_dir, &self.font_family, None).map_err(|e| {
            ShowroomError::Render(format!(
                "Failed to load font family '{}' from {}: {}",
                self.font_family,
                self.font_dir.display(),
                e
            ))
        })
    }

    fn build_table(&self, table: &[Vec<String>]) -> Result<TableLayout> {
        let mut layout = TableLayout::new(COLUMN_WEIGHTS.to_vec());
        layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        let mut rows = table.iter();

        if let Some(header) = rows.next() {
            let mut row = layout.row();
            for cell in header {
                row.push_element(
                    Paragraph::new(cell.as_str())
                        .styled(Style::new().bold())
                        .padded(1),
                );
            }
            row.push()
                .map_err(|e| ShowroomError::Render(format!("Invalid table header row: {e}")))?;
        }

        for cells in rows {
            let mut row = layout.row();
            for cell in cells {
                row.push_element(Paragraph::new(cell.as_str()).padded(1));
            }
            row.push()
                .map_err(|e| ShowroomError::Render(format!("Invalid table row: {e}")))?;
        }

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fails_without_font_directory() {
        let config = ReportConfig {
            font_dir: "definitely/not/a/real/dir".to_string(),
            ..ReportConfig::default()
        };
        let renderer = ReportRenderer::new(&config);

        let err = renderer
            .render(
                "Sales summary",
                &["line".to_string()],
                &[],
                Path::new("/tmp/out.pdf"),
            )
            .unwrap_err();

        assert!(matches!(err, ShowroomError::Render(_)));
        assert!(err.to_string().contains("Font directory not found"));
    }

    #[test]
    fn test_renderer_takes_paths_from_config() {
        let config = ReportConfig {
            font_dir: "assets/fonts".to_string(),
            font_family: "Roboto".to_string(),
            ..ReportConfig::default()
        };
        let renderer = ReportRenderer::new(&config);

        assert_eq!(renderer.font_dir, PathBuf::from("assets/fonts"));
        assert_eq!(renderer.font_family, "Roboto");
    }
}
