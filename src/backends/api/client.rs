use super::{
    config::ApiConfig,
    error::{map_deserialization_error, map_serialization_error, ClientError, WrappedError},
};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http_client: reqwest::Client,
    pub config: ApiConfig,
    pub backoff: backoff::ExponentialBackoff,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
            backoff: backoff::ExponentialBackoffBuilder::new()
                .with_max_elapsed_time(Some(std::time::Duration::from_secs(60)))
                .build(),
        }
    }

    /// Make a POST request to the completion path and deserialize the
    /// response body.
    pub(crate) async fn post<I, O>(&self, request: I) -> Result<O, ClientError>
    where
        I: Serialize + std::fmt::Debug,
        O: DeserializeOwned,
    {
        let request_maker = || async {
            let serialized_request =
                serde_json::to_string(&request).map_err(map_serialization_error)?;
            crate::trace!("Serialized request: {}", serialized_request);
            let request_builder = self
                .http_client
                .post(self.config.url())
                .headers(self.config.headers())
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(serialized_request);
            Ok(request_builder.build()?)
        };
        self.execute(request_maker).await
    }

    /// Execute a HTTP request and retry on rate limit.
    ///
    /// request_maker exists so the request can be rebuilt for each retry
    /// after the API rate-limits the call.
    async fn execute_raw<M, Fut>(&self, request_maker: M) -> Result<bytes::Bytes, ClientError>
    where
        M: Fn() -> Fut,
        Fut: core::future::Future<Output = Result<reqwest::Request, ClientError>>,
    {
        let client = self.http_client.clone();

        backoff::future::retry(self.backoff.clone(), || async {
            let request = request_maker().await.map_err(backoff::Error::Permanent)?;
            let response = client
                .execute(request)
                .await
                .map_err(ClientError::Reqwest)
                .map_err(backoff::Error::Permanent)?;

            let status = response.status();
            let bytes = response
                .bytes()
                .await
                .map_err(ClientError::Reqwest)
                .map_err(backoff::Error::Permanent)?;

            if !status.is_success() {
                // Providers wrap failure details in an "error" JSON object,
                // but not every gateway does.
                let Ok(wrapped_error) = serde_json::from_slice::<WrappedError>(bytes.as_ref())
                else {
                    return Err(backoff::Error::Permanent(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        body: String::from_utf8_lossy(bytes.as_ref()).into_owned(),
                    }));
                };

                if status.as_u16() == 429
                    // The API returns 429 also when the account is out of
                    // quota, which a retry will not fix.
                    && wrapped_error.error.r#type != Some("insufficient_quota".to_string())
                {
                    tracing::warn!("Rate limited: {}", wrapped_error.error.message);
                    return Err(backoff::Error::Transient {
                        err: ClientError::ApiError(wrapped_error.error),
                        retry_after: None,
                    });
                } else {
                    return Err(backoff::Error::Permanent(ClientError::ApiError(
                        wrapped_error.error,
                    )));
                }
            }

            Ok(bytes)
        })
        .await
    }

    async fn execute<O, M, Fut>(&self, request_maker: M) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut,
        Fut: core::future::Future<Output = Result<reqwest::Request, ClientError>>,
    {
        let bytes = self.execute_raw(request_maker).await?;

        let response: O =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;

        Ok(response)
    }
}
