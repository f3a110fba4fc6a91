use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_COMPLETION_PATH: &str = "/chat/completions";
pub const DEFAULT_API_KEY_ENV_VAR: &str = "HF_API_TOKEN";

/// Connection settings for the hosted inference endpoint. The bearer
/// credential is either set directly or resolved from the environment at
/// backend construction, before any row is processed.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub completion_path: String,
    pub api_key: Option<Secret<String>>,
    pub api_key_env_var: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            completion_path: DEFAULT_COMPLETION_PATH.to_string(),
            api_key: None,
            api_key_env_var: DEFAULT_API_KEY_ENV_VAR.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_completion_path<S: Into<String>>(mut self, path: S) -> Self {
        self.completion_path = path.into();
        self
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(Secret::from(api_key.into()));
        self
    }

    /// Set the environment variable name the API key is loaded from.
    pub fn with_api_key_env_var<S: Into<String>>(mut self, api_key_env_var: S) -> Self {
        self.api_key_env_var = api_key_env_var.into();
        self
    }

    pub(crate) fn load_api_key(&mut self) -> crate::Result<()> {
        if self.api_key.is_some() {
            crate::trace!("Using api_key from parameter");
            return Ok(());
        }
        crate::trace!("api_key not set. Attempting to load from .env");
        dotenvy::dotenv().ok();

        match dotenvy::var(&self.api_key_env_var) {
            Ok(api_key) => {
                crate::trace!("Successfully loaded api_key from .env");
                self.api_key = Some(api_key.into());
                Ok(())
            }
            Err(_) => {
                crate::bail!(
                    "api credential not set and {} was not found in the environment or .env",
                    self.api_key_env_var
                )
            }
        }
    }

    pub(crate) fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            if let Ok(header_value) =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            {
                headers.insert(AUTHORIZATION, header_value);
            } else {
                crate::error!("Failed to create header value from authorization value");
            }
        }
        headers
    }

    pub(crate) fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.completion_path
        )
    }
}
