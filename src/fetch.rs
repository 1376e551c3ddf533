use crate::date_range::DateRange;
use crate::error::FetchError;
use crate::record::ExchangeRateRecord;
use log::debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type ResponseFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, FetchError>> + Send + 'a>>;

/// Raw answer of the data endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[cfg(test)]
    pub fn ok_json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport used to issue `GET` requests.
pub trait HttpClient: Send + Sync {
    fn get<'a>(&'a self, url: String, timeout: Duration) -> ResponseFuture<'a>;
}

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rates-chart/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get<'a>(&'a self, url: String, timeout: Duration) -> ResponseFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .get(&url)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        FetchError::Transport(format!("timeout: {}", e))
                    } else if e.is_connect() {
                        FetchError::Transport(format!("connection failed: {}", e))
                    } else {
                        FetchError::Transport(e.to_string())
                    }
                })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Transport(format!("reading body: {}", e)))?;

            Ok(HttpResponse { status, body })
        })
    }
}

/// Reads exchange-rate records from the `/data` endpoint of a server.
pub struct DataFetcher {
    base_url: String,
    timeout: Duration,
    client: Arc<dyn HttpClient>,
}

impl DataFetcher {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        client: Arc<dyn HttpClient>,
    ) -> Self {
        DataFetcher {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        }
    }

    /// Query values are inserted as they are, without encoding.
    pub fn data_url(&self, range: &DateRange) -> String {
        format!(
            "{}/data?start_date={}&end_date={}",
            self.base_url, range.start, range.end
        )
    }

    /// An empty `Vec` means the server answered with `[]`.
    pub async fn fetch(&self, range: &DateRange) -> Result<Vec<ExchangeRateRecord>, FetchError> {
        let url = self.data_url(range);
        debug!("GET {}", url);
        let response = self.client.get(url, self.timeout).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }
        let records: Vec<ExchangeRateRecord> = serde_json::from_str(&response.body)?;
        debug!("received {} records", records.len());
        Ok(records)
    }
}
