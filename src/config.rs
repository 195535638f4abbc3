use std::{path::PathBuf, time::Duration};

use url::Url;

pub const LISTING_URL: &str = "https://www.unirank.org/in/a-z/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/124.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const OUTPUT_FILE: &str = "indian_universities_unirank.json";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// The listing had ~894 entries when this was written. Anything far below
/// that usually means the selector broke or a WAF served a challenge page.
pub const MIN_EXPECTED_INSTITUTIONS: usize = 600;

/// Everything a single run needs. `main` only ever uses [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
    pub output_path: PathBuf,
    pub min_expected: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: Url::parse(LISTING_URL).expect("listing url should be valid"),
            user_agent: USER_AGENT.to_owned(),
            accept_language: ACCEPT_LANGUAGE.to_owned(),
            timeout: REQUEST_TIMEOUT,
            output_path: PathBuf::from(OUTPUT_FILE),
            min_expected: MIN_EXPECTED_INSTITUTIONS,
        }
    }
}
