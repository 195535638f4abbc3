use std::time::Instant;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE},
    Client,
};
use tracing::{instrument, Level};

use crate::{config::Config, error::Error};

#[cfg(test)]
pub mod testing;

/// Charset assumed when the server does not declare one.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// A fetched listing page, already decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    body: String,
    encoding: String,
}

impl Page {
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }
}

pub fn make_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Ok(lang) = HeaderValue::from_str(&config.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, lang);
    } else {
        log::warn!(
            "Accept-Language {:?} is not a valid header value, sending none",
            config.accept_language
        );
    }
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(config.timeout)
        .gzip(true)
        .build()
}

/// Single GET of the listing page. No retries: any failure ends the run.
#[instrument(skip(client, config), fields(url = %config.url), level = Level::DEBUG)]
pub async fn listing_page(client: &Client, config: &Config) -> Result<Page, Error> {
    let start = Instant::now();
    log::info!("Fetching {}", config.url);
    let response = client.get(config.url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(status));
    }

    let encoding = declared_charset(response.headers());
    let body = response.text().await?;
    log::info!(
        "Got {} bytes ({encoding}) in {:?}",
        body.len(),
        start.elapsed()
    );
    Ok(Page { body, encoding })
}

fn declared_charset(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|content_type| {
            content_type.split(';').skip(1).find_map(|param| {
                let (key, value) = param.split_once('=')?;
                key.trim()
                    .eq_ignore_ascii_case("charset")
                    .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
            })
        })
        .filter(|charset| !charset.is_empty())
        .unwrap_or_else(|| DEFAULT_CHARSET.to_owned())
}
