//! HTTP implementation of `NumeralConverterClient`.
//!
//! Talks to the numeral conversion service:
//! - `GET {base_url}{to_number_path}?value=<text>` → `{"value": <integer>}`
//! - `GET {base_url}{to_roman_path}?value=<integer>` → `{"value": "<numeral>"}`
//!
//! `400` maps to `ConverterError::InvalidInput`; every other failure
//! (transport, timeout, non-2xx, unexpected body) maps to `ConverterError::Upstream`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, StatusCode, Uri, header};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use roman_calculator_sdk::{ConverterError, NumeralConverterClient};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ConverterConfig;

/// Maximum number of body characters carried into error messages.
const ERROR_BODY_PREVIEW_LIMIT: usize = 256;

type HttpsClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Errors raised while constructing the converter client.
#[derive(thiserror::Error, Debug)]
pub enum ConverterClientBuildError {
    #[error("invalid converter URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("TLS setup failed: {0}")]
    Tls(#[from] rustls::Error),
}

/// Converter response envelope.
#[derive(Deserialize)]
struct ValueResponse<T> {
    value: T,
}

/// HTTP client for the numeral conversion service.
///
/// Cheap to share: the underlying hyper client pools connections and is
/// safe for concurrent use.
pub struct HttpNumeralConverter {
    client: HttpsClient,
    to_number_url: Url,
    to_roman_url: Url,
    timeout: Duration,
}

impl HttpNumeralConverter {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns [`ConverterClientBuildError::InvalidUrl`] if the base URL or an
    /// endpoint path does not form an absolute `http`/`https` URL, or
    /// [`ConverterClientBuildError::Tls`] if the TLS connector cannot be set up.
    pub fn new(config: &ConverterConfig) -> Result<Self, ConverterClientBuildError> {
        let base = parse_base_url(&config.base_url)?;
        let to_number_url = join_endpoint(&base, &config.to_number_path)?;
        let to_roman_url = join_endpoint(&base, &config.to_roman_path)?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(crypto_provider())?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .build::<_, Full<Bytes>>(connector);

        debug!(
            to_number = %to_number_url,
            to_roman = %to_roman_url,
            timeout_ms = config.request_timeout_ms,
            "numeral converter client configured"
        );

        Ok(Self {
            client,
            to_number_url,
            to_roman_url,
            timeout: config.request_timeout(),
        })
    }

    /// Endpoint URL with the `value` query parameter appended (URL-encoded).
    fn endpoint(base: &Url, value: &str) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().append_pair("value", value);
        url
    }

    async fn get_value<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ConverterError> {
        let uri: Uri = url
            .as_str()
            .parse()
            .map_err(|e| ConverterError::Upstream(format!("invalid request URI: {e}")))?;

        let request = Request::get(uri)
            .header(header::ACCEPT, "application/json")
            .body(Full::new(Bytes::new()))
            .map_err(|e| ConverterError::Upstream(format!("failed to build request: {e}")))?;

        let exchange = async {
            let response = self
                .client
                .request(request)
                .await
                .map_err(|e| ConverterError::Upstream(format!("transport error: {e}")))?;
            let status = response.status();
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| ConverterError::Upstream(format!("failed to read body: {e}")))?
                .to_bytes();
            Ok::<_, ConverterError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| {
                ConverterError::Upstream(format!(
                    "request timed out after {}ms",
                    self.timeout.as_millis()
                ))
            })??;

        if status == StatusCode::BAD_REQUEST {
            return Err(ConverterError::InvalidInput(body_preview(&body)));
        }
        if !status.is_success() {
            warn!(%status, "numeral converter returned an error status");
            return Err(ConverterError::Upstream(format!(
                "HTTP {status}: {}",
                body_preview(&body)
            )));
        }

        serde_json::from_slice::<ValueResponse<T>>(&body)
            .map(|envelope| envelope.value)
            .map_err(|e| ConverterError::Upstream(format!("unexpected response body: {e}")))
    }
}

#[async_trait]
impl NumeralConverterClient for HttpNumeralConverter {
    #[instrument(skip(self))]
    async fn to_number(&self, text: &str) -> Result<i64, ConverterError> {
        let url = Self::endpoint(&self.to_number_url, text);
        self.get_value(&url).await
    }

    #[instrument(skip(self))]
    async fn to_roman(&self, value: i64) -> Result<String, ConverterError> {
        let url = Self::endpoint(&self.to_roman_url, &value.to_string());
        self.get_value(&url).await
    }
}

/// Use the process-wide crypto provider if one is installed, aws-lc-rs otherwise.
fn crypto_provider() -> Arc<rustls::crypto::CryptoProvider> {
    rustls::crypto::CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

fn parse_base_url(raw: &str) -> Result<Url, ConverterClientBuildError> {
    let invalid = |reason: String| ConverterClientBuildError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };

    // Endpoint paths are appended to the base, so it must end with '/'
    let normalized = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if !url.has_host() {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(url)
}

fn join_endpoint(base: &Url, path: &str) -> Result<Url, ConverterClientBuildError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| ConverterClientBuildError::InvalidUrl {
            url: format!("{base}{path}"),
            reason: e.to_string(),
        })
}

fn body_preview(body: &Bytes) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(ERROR_BODY_PREVIEW_LIMIT)
        .collect()
}
