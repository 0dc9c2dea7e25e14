use crate::core::config::MirrorConfig;
use crate::error::{MirrorError, Result};
use std::time::Duration;
use url::Url;

/// The parts of an HTTP response the mirror cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Raw `Content-Type` header value, if the server sent one
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// Any `text/html` response is treated as a directory listing.
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
            .unwrap_or(false)
    }

    /// Body decoded for HTML parsing; invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Fetches a single URL. Implementations must treat non-2xx statuses as errors.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Page>;
}

/// HTTP transport backed by reqwest, driven on a private current-thread runtime.
///
/// `timeout` bounds connecting and each idle gap while reading, not the whole
/// download: a slow body that keeps arriving is not cut off.
pub struct HttpTransport {
    client: reqwest::Client,
    rt: tokio::runtime::Runtime,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { client, rt })
    }

    pub fn from_config(config: &MirrorConfig) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent)
    }

    async fn get_async(&self, url: &Url) -> Result<Page> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        log::debug!(
            "GET {} -> {} ({} bytes, content-type {:?})",
            url,
            status,
            body.len(),
            content_type
        );

        Ok(Page { content_type, body })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Page> {
        self.rt.block_on(self.get_async(url))
    }
}
