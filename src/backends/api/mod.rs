// Internal modules
mod client;
mod config;
mod error;

// Internal exports
pub(crate) use client::ApiClient;

// Public exports
pub use config::{
    ApiConfig, DEFAULT_API_KEY_ENV_VAR, DEFAULT_BASE_URL, DEFAULT_COMPLETION_PATH,
};
pub use error::{ApiError, ClientError};
