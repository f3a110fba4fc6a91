use crate::{backends::ApiConfig, logging::LoggingConfig, prompt::PromptTemplate};
use std::path::PathBuf;

pub const DEFAULT_TEXT_COLUMN: &str = "question_text";
pub const DEFAULT_OUTPUT_COLUMN: &str = "classification";
pub const DEFAULT_MODEL_ID: &str = "deepseek-ai/DeepSeek-V3.2";

/// Everything a classification run needs, resolved before the first row is
/// processed.
#[derive(Clone, Debug)]
pub struct JobConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub text_column: String,
    pub output_column: String,
    pub prompt_template: PromptTemplate,
    pub model_id: String,
    /// Number of in-flight completion requests. `1` reproduces the strictly
    /// sequential behavior; higher values dispatch a bounded pool while the
    /// output order stays tied to the input order.
    pub concurrency: usize,
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
}

impl JobConfig {
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_path: I, output_path: O) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            output_column: DEFAULT_OUTPUT_COLUMN.to_string(),
            prompt_template: PromptTemplate::default(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            concurrency: 1,
            api_config: ApiConfig::default(),
            logging_config: LoggingConfig::default(),
        }
    }

    pub fn with_text_column<S: Into<String>>(mut self, text_column: S) -> Self {
        self.text_column = text_column.into();
        self
    }

    pub fn with_output_column<S: Into<String>>(mut self, output_column: S) -> Self {
        self.output_column = output_column.into();
        self
    }

    pub fn with_prompt_template(mut self, prompt_template: PromptTemplate) -> Self {
        self.prompt_template = prompt_template;
        self
    }

    pub fn with_model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_api_config(mut self, api_config: ApiConfig) -> Self {
        self.api_config = api_config;
        self
    }

    pub fn with_logging_config(mut self, logging_config: LoggingConfig) -> Self {
        self.logging_config = logging_config;
        self
    }

    /// Configuration-level checks that must fail before any row is
    /// processed.
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if !self.input_path.exists() {
            crate::bail!("input file {} not found", self.input_path.display());
        }
        if self.text_column.is_empty() {
            crate::bail!("text column name must not be empty");
        }
        Ok(())
    }
}
