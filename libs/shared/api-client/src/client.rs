use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::ClinicError;

const BODY_PREVIEW_CHARS: usize = 100;

/// Bearer-authenticated transport to the clinic backend.
///
/// Any non-2xx status is a [`ClinicError::Transport`] whatever the body holds. A 2xx body that
/// does not parse as `T` is a [`ClinicError::MalformedResponse`].
#[derive(Debug, Clone)]
pub struct ClinicApiClient {
    client: Client,
    base_url: String,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.clinic_api_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> Result<HeaderMap, ClinicError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ClinicError::Unauthenticated("Access token contains invalid characters".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    fn build(&self, method: Method, path: &str, auth_token: Option<&str>) -> Result<RequestBuilder, ClinicError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        Ok(self.client.request(method, &url).headers(self.get_headers(auth_token)?))
    }

    pub async fn get<T>(&self, path: &str, auth_token: &str) -> Result<T, ClinicError>
    where
        T: DeserializeOwned,
    {
        let req = self.build(Method::GET, path, Some(auth_token))?;
        self.execute(req).await
    }

    pub async fn post_json<B, T>(&self, path: &str, auth_token: &str, body: &B) -> Result<T, ClinicError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.build(Method::POST, path, Some(auth_token))?.json(body);
        self.execute(req).await
    }

    /// Form-encoded POST without a bearer token, used by the login endpoint.
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T, ClinicError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.build(Method::POST, path, None)?.form(form);
        self.execute(req).await
    }

    async fn execute<T>(&self, req: RequestBuilder) -> Result<T, ClinicError>
    where
        T: DeserializeOwned,
    {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("API error ({}): {}", status, preview(&body));
            return Err(ClinicError::transport(
                Some(status.as_u16()),
                format!("{} {}", status, preview(&body)).trim_end().to_string(),
            ));
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            error!("Unparseable response body: {}", e);
            ClinicError::MalformedResponse(format!(
                "Response is not valid JSON for the expected shape ({}). Got: {}",
                e,
                preview(&body)
            ))
        })
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
