use crate::config::Config;
use crate::model::{DecodeError, Item, decode_items};

use http::uri::Scheme;
use http::{Method, Request, StatusCode, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use std::fmt;
use thiserror::Error;

type HttpsClient = Client<hyper_rustls::HttpsConnector<HttpConnector>, String>;

/// Everything that can go wrong between issuing the GET and holding a decoded
/// item list. The view treats all of them alike; callers may not.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("no valid system certificates found")]
    NoCertificates,
    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),
    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Accepts only absolute `http`/`https` URLs with a host.
fn parse_endpoint(url: &str) -> Result<Uri, FetchError> {
    let invalid = |reason: &str| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let uri: Uri = url.parse().map_err(|e: http::uri::InvalidUri| invalid(&e.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        Some(_) => return Err(invalid("scheme must be http or https")),
        None => return Err(invalid("missing scheme")),
    }
    if uri.authority().is_none() {
        return Err(invalid("missing host"));
    }
    Ok(uri)
}

#[derive(Clone)]
pub struct ItemClient {
    http: HttpsClient,
    uri: Uri,
}

impl fmt::Debug for ItemClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemClient").field("uri", &self.uri).finish()
    }
}

impl ItemClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let uri = parse_endpoint(&config.url)?;

        let mut root_store = rustls::RootCertStore::empty();
        if uri.scheme() == Some(&Scheme::HTTPS) {
            let result = rustls_native_certs::load_native_certs();
            for err in &result.errors {
                tracing::debug!(%err, "Skipping unreadable system certificate");
            }
            root_store.add_parsable_certificates(result.certs);

            if root_store.is_empty() {
                return Err(FetchError::NoCertificates);
            }
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let http = Client::builder(TokioExecutor::new()).build(https_connector);

        Ok(Self { http, uri })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Issues a single unauthenticated GET and decodes the body.
    ///
    /// Any 2xx counts as success. No retry, no timeout: cancelling is the
    /// caller's business.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(self.uri.clone())
            .body(String::new())?;

        tracing::debug!(uri = %self.uri, "GET");
        let resp = self.http.request(req).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.into_body().collect().await?.to_bytes();
        let items = decode_items(&body)?;
        tracing::debug!(count = items.len(), "Decoded items");
        Ok(items)
    }
}
