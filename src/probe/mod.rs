//! Profile probing
//!
//! A probe turns a handle into the HTTP status code of its profile page.
//! Classification of that code lives in [`crate::types::Classification`].

pub mod http;

pub use http::HttpProber;

use async_trait::async_trait;

use crate::error::{Result, SweepError};

/// Profile page every handle is probed on
pub const DEFAULT_URL_TEMPLATE: &str = "https://twitter.com/{name}";

const PLACEHOLDER: &str = "{name}";

/// Source of status codes for handles
#[async_trait]
pub trait Prober: Send + Sync {
    /// Fetch the status code for `name`; transport failures are errors
    async fn probe(&self, name: &str) -> Result<u16>;
}

/// URL with a single `{name}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    template: String,
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }
}

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        match template.matches(PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(SweepError::config(format!(
                    "URL template '{}' has no {} placeholder",
                    template, PLACEHOLDER
                )))
            }
            _ => {
                return Err(SweepError::config(format!(
                    "URL template '{}' has more than one {} placeholder",
                    template, PLACEHOLDER
                )))
            }
        }

        let sample = template.replace(PLACEHOLDER, "probe");
        reqwest::Url::parse(&sample).map_err(|e| {
            SweepError::config(format!("URL template '{}' is not a valid URL: {}", template, e))
        })?;

        Ok(Self { template })
    }

    /// Profile URL for a handle
    pub fn render(&self, name: &str) -> String {
        self.template.replace(PLACEHOLDER, name)
    }
}
