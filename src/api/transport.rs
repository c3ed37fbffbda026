use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, Url};

use super::FetchError;

/// The three kinds of request the dashboard makes. Paths are relative to the
/// site the dashboard is attached to.
pub trait Transport: Send + Sync + 'static {
    fn get_text(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;

    fn get_bytes(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;

    fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// [`Transport`] over HTTP, resolving every path against one base URL.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid base url '{base_url}'"))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|err| FetchError::transport(path, err))
    }

    async fn send(&self, url: &Url, request: RequestBuilder) -> Result<Response, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|err| FetchError::transport(url.as_str(), err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Transport for HttpTransport {
    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        let response = self.send(&url, self.client.get(url.clone())).await?;
        response
            .text()
            .await
            .map_err(|err| FetchError::transport(url.as_str(), err))
    }

    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.resolve(path)?;
        let response = self.send(&url, self.client.get(url.clone())).await?;
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| FetchError::transport(url.as_str(), err))
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        let response = self
            .send(&url, self.client.post(url.clone()).form(form))
            .await?;
        response
            .text()
            .await
            .map_err(|err| FetchError::transport(url.as_str(), err))
    }
}
