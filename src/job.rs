use crate::{
    backends::{HeuristicBackend, HostedBackend, LlmBackend},
    config::JobConfig,
    label::RelevanceLabel,
    table::{ArticleRecord, ArticleTable},
};
use futures::StreamExt;

/// The classification batch job.
///
/// Reads the input table, classifies every row against the configured
/// backend, and writes the augmented table in one pass. A failed remote call
/// marks its row `ERROR` and the job continues; only configuration errors
/// abort the run.
pub struct ClassificationJob {
    pub config: JobConfig,
    backend: LlmBackend,
}

impl ClassificationJob {
    /// Builds a job against the hosted inference endpoint. Fails up front if
    /// no credential can be resolved.
    pub fn hosted(config: JobConfig) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        let backend = HostedBackend::new(config.api_config.clone())?;
        Ok(Self {
            config,
            backend: LlmBackend::Hosted(backend),
        })
    }

    /// Builds a job against the offline keyword heuristic. No credential or
    /// network access required.
    pub fn offline(config: JobConfig) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        Ok(Self {
            config,
            backend: LlmBackend::Heuristic(HeuristicBackend::new()),
        })
    }

    /// Runs the job to completion. Every input row produces exactly one
    /// output row, in input order.
    pub async fn run(&self) -> crate::Result<JobSummary> {
        let start = std::time::Instant::now();
        self.config.validate()?;

        let table = ArticleTable::read_from_path(&self.config.input_path, &self.config.text_column)?;
        crate::info!(
            "classifying {} rows from {}",
            table.len(),
            self.config.input_path.display()
        );

        let labels: Vec<RelevanceLabel> =
            futures::stream::iter(table.records().iter().enumerate())
                .map(|(index, record)| self.classify_record(index, record))
                .buffered(self.config.concurrency.max(1))
                .collect()
                .await;

        table.write_labeled(&self.config.output_path, &self.config.output_column, &labels)?;
        crate::info!(
            "classification completed. Output saved to {}",
            self.config.output_path.display()
        );

        Ok(JobSummary::tally(&labels, start.elapsed()))
    }

    async fn classify_record(&self, index: usize, record: &ArticleRecord) -> RelevanceLabel {
        let prompt = self.config.prompt_template.render(record.text());
        match self
            .backend
            .completion_request(&self.config.model_id, &prompt)
            .await
        {
            Ok(content) => {
                let label = RelevanceLabel::from_response(&content);
                crate::debug!("row {}: {} ({:?})", index + 1, label, content);
                if label == RelevanceLabel::Unknown {
                    crate::warn!("row {}: ambiguous response, marked for review", index + 1);
                }
                label
            }
            Err(e) => {
                crate::warn!("row {}: completion request failed: {}", index + 1, e);
                RelevanceLabel::Error
            }
        }
    }
}

/// Per-label tallies for one completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSummary {
    pub rows: usize,
    pub yes: usize,
    pub no: usize,
    pub unknown: usize,
    pub errors: usize,
    pub duration: std::time::Duration,
}

impl JobSummary {
    fn tally(labels: &[RelevanceLabel], duration: std::time::Duration) -> Self {
        let mut summary = Self {
            rows: labels.len(),
            duration,
            ..Default::default()
        };
        for label in labels {
            match label {
                RelevanceLabel::Yes => summary.yes += 1,
                RelevanceLabel::No => summary.no += 1,
                RelevanceLabel::Unknown => summary.unknown += 1,
                RelevanceLabel::Error => summary.errors += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for JobSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "JobSummary:")?;
        writeln!(f, "    rows: {}", self.rows)?;
        writeln!(f, "    yes: {}", self.yes)?;
        writeln!(f, "    no: {}", self.no)?;
        writeln!(f, "    unknown: {}", self.unknown)?;
        writeln!(f, "    errors: {}", self.errors)?;
        write!(f, "    duration: {:?}", self.duration)
    }
}
