use async_trait::async_trait;

/// Minimal HTTP capability used by the remote tier: GET a URL, parse JSON.
/// The deadline is applied by the caller.
#[async_trait]
pub trait RemoteFetch: Send + Sync {
    async fn fetch_json(&self, url: &str) -> anyhow::Result<serde_json::Value>;
}

#[cfg(feature = "remote")]
pub use http::HttpFetcher;

#[cfg(feature = "remote")]
mod http {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use async_trait::async_trait;
    use reqwest::{redirect::Policy, Client};

    use super::RemoteFetch;

    /// `reqwest`-backed fetcher.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        pub fn new(timeout: Duration) -> Result<Self> {
            let client = Client::builder()
                .user_agent(concat!("farmreg/", env!("CARGO_PKG_VERSION")))
                .redirect(Policy::limited(5))
                .timeout(timeout)
                .build()
                .context("Failed to build HTTP client")?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl RemoteFetch for HttpFetcher {
        async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
            let resp = self.client.get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send().await
                .with_context(|| format!("GET {url}"))?
                .error_for_status()
                .with_context(|| format!("GET {url} returned error status"))?;
            resp.json().await.with_context(|| format!("GET {url} returned invalid JSON"))
        }
    }
}
