//! Report pipeline orchestration
//!
//! Sequences the full run: load → aggregate → format → render → deliver.
//! Every stage is invoked at most once; any failure propagates up via `?`
//! and aborts the run with no partial report. A re-run repeats the whole
//! pipeline from scratch and overwrites the staged PDF.

use crate::adapters::email::Notifier;
use crate::adapters::pdf::ReportRenderer;
use crate::config::ShowroomConfig;
use crate::core::aggregate::aggregate;
use crate::core::format::{summary_lines, tabulate};
use crate::core::load::load_records;
use crate::domain::result::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of sale records processed
    pub record_count: usize,

    /// The three summary lines of the report
    pub summary_lines: Vec<String>,

    /// Where the rendered PDF was staged (not written in dry-run mode)
    pub report_path: PathBuf,

    /// Whether the report email went out
    pub email_sent: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            record_count = self.record_count,
            report_path = %self.report_path.display(),
            email_sent = self.email_sent,
            duration_ms = self.duration.as_millis(),
            "Report run completed"
        );
    }
}

/// Coordinates one report run over a fixed configuration
pub struct ReportPipeline {
    config: ShowroomConfig,
}

impl ReportPipeline {
    /// Creates a pipeline for the given configuration
    pub fn new(config: ShowroomConfig) -> Self {
        Self { config }
    }

    /// Executes the pipeline once
    ///
    /// In dry-run mode the report is neither rendered nor emailed; the
    /// summary is still computed so the run can be inspected. Email delivery
    /// is also skipped when `email.enabled` is false.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of any stage; no stage is retried.
    pub async fn execute(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let dry_run = self.config.application.dry_run;
        let report_path = PathBuf::from(&self.config.report.output_path);

        tracing::info!(input = %self.config.report.input_path, "Loading sales data");
        let records = load_records(&self.config.report.input_path)?;
        tracing::info!(count = records.len(), "Loaded sale records");

        let summary = aggregate(&records)?;
        tracing::debug!(
            top_revenue = %summary.top_revenue.car.display_name(),
            top_sales = %summary.top_sales.car.display_name(),
            popular_year = summary.popular_year,
            "Aggregation complete"
        );

        let lines = summary_lines(&summary);
        let table = tabulate(&records);
        let body = lines.join("\n");

        if dry_run {
            tracing::info!("Dry-run mode - skipping report rendering");
        } else {
            let renderer = ReportRenderer::new(&self.config.report);
            renderer.render(&self.config.report.title, &lines, &table, &report_path)?;
            tracing::info!(path = %report_path.display(), "Report rendered");
        }

        let email_sent = if !self.config.email.enabled {
            tracing::info!("Email delivery disabled - skipping");
            false
        } else if dry_run {
            tracing::info!("Dry-run mode - skipping email delivery");
            false
        } else {
            let subject = self
                .config
                .email
                .subject
                .clone()
                .unwrap_or_else(|| self.config.report.title.clone());
            let notifier = Notifier::new(&self.config.email)?;
            notifier.send_report(&subject, &body, &report_path).await?;
            true
        };

        Ok(RunSummary {
            record_count: records.len(),
            summary_lines: lines,
            report_path,
            email_sent,
            duration: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{
        ApplicationConfig, EmailConfig, LoggingConfig, ReportConfig,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn test_config(input_path: &str, dry_run: bool) -> ShowroomConfig {
        ShowroomConfig {
            application: ApplicationConfig {
                log_level: "info".to_string(),
                dry_run,
            },
            report: ReportConfig {
                input_path: input_path.to_string(),
                ..ReportConfig::default()
            },
            email: EmailConfig {
                enabled: false,
                ..EmailConfig::default()
            },
            logging: LoggingConfig::default(),
        }
    }

    fn write_input() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"id": 1, "car": {"car_make": "Tesla", "car_model": "Model 3", "car_year": 2020},
                 "price": "$40000.00", "total_sales": 5},
                {"id": 2, "car": {"car_make": "Toyota", "car_model": "Corolla", "car_year": 2020},
                 "price": "$20000.00", "total_sales": 10}
            ]"#,
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_dry_run_computes_summary_without_side_effects() {
        let input = write_input();
        let output_dir = tempfile::TempDir::new().unwrap();
        let output_path = output_dir.path().join("cars.pdf");

        let mut config = test_config(input.path().to_str().unwrap(), true);
        config.report.output_path = output_path.to_str().unwrap().to_string();
        let pipeline = ReportPipeline::new(config);

        let summary = pipeline.execute().await.unwrap();

        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.summary_lines.len(), 3);
        assert!(!summary.email_sent);
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_missing_input_aborts_run() {
        let config = test_config("does-not-exist.json", true);
        let pipeline = ReportPipeline::new(config);

        assert!(pipeline.execute().await.is_err());
    }

    #[tokio::test]
    async fn test_two_runs_produce_identical_summaries() {
        let input = write_input();
        let config = test_config(input.path().to_str().unwrap(), true);
        let pipeline = ReportPipeline::new(config);

        let first = pipeline.execute().await.unwrap();
        let second = pipeline.execute().await.unwrap();

        assert_eq!(first.summary_lines, second.summary_lines);
        assert_eq!(first.record_count, second.record_count);
    }
}
