use anyhow::{bail, Result};
use async_trait::async_trait;
use derive_builder::Builder;
use reqwest::header::COOKIE;

use crate::identity::PuzzleIdentity;

/// The two fetches a workspace needs. The description page is best-effort:
/// a non-2xx status is reported and yields `None`. The input is essential:
/// a non-2xx status fails the call.
#[async_trait]
pub trait Fetch {
    async fn fetch_description(&self, identity: &PuzzleIdentity) -> Result<Option<String>>;
    async fn fetch_input(&self, identity: &PuzzleIdentity) -> Result<String>;
}

/// Authenticated adventofcode.com client. The session token rides on every
/// request as the `session` cookie. Single attempt per call, no retries.
#[derive(Debug, Builder)]
pub struct HttpFetcher {
    session: String,
    #[builder(default = "reqwest::Client::new()")]
    client: reqwest::Client,
}

impl HttpFetcher {
    fn cookie(&self) -> String {
        format!("session={}", self.session)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_description(&self, identity: &PuzzleIdentity) -> Result<Option<String>> {
        let response = self
            .client
            .get(identity.puzzle_url())
            .header(COOKIE, self.cookie())
            .send()
            .await?;

        if !response.status().is_success() {
            println!("Failed to fetch puzzle page: {}", response.status().as_u16());
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    async fn fetch_input(&self, identity: &PuzzleIdentity) -> Result<String> {
        let response = self
            .client
            .get(identity.input_url())
            .header(COOKIE, self.cookie())
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Failed to fetch input: {}", response.status().as_u16());
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_session() {
        assert!(HttpFetcherBuilder::default().build().is_err());

        let fetcher = HttpFetcherBuilder::default()
            .session("deadbeef".to_string())
            .build()
            .unwrap();
        assert_eq!(fetcher.cookie(), "session=deadbeef");
    }
}
