#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod backends;
pub mod config;
pub mod job;
pub mod label;
pub mod logging;
pub mod prompt;
pub mod table;

pub use backends::LlmBackend;
pub use config::JobConfig;
pub use job::{ClassificationJob, JobSummary};
pub use label::RelevanceLabel;
pub use prompt::PromptTemplate;
