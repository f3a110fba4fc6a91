// Public modules
pub mod api;
pub mod heuristic;
pub mod hosted;

// Public exports
pub use api::{ApiConfig, ClientError};
pub use heuristic::HeuristicBackend;
pub use hosted::HostedBackend;

/// The completion source a job dispatches to.
pub enum LlmBackend {
    Hosted(HostedBackend),
    Heuristic(HeuristicBackend),
}

impl LlmBackend {
    pub(crate) async fn completion_request(
        &self,
        model_id: &str,
        prompt: &str,
    ) -> Result<String, ClientError> {
        match self {
            LlmBackend::Hosted(backend) => backend.completion_request(model_id, prompt).await,
            LlmBackend::Heuristic(backend) => Ok(backend.completion(prompt)),
        }
    }
}
