use std::time::Duration;

use log::info;
use url::Url;

use crate::Result;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Something that can turn a URL into the markup it serves.
#[allow(async_fn_in_trait)]
pub trait HtmlSource {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct ReqwestSource {
    reqwest: reqwest::Client,
}

impl ReqwestSource {
    /// Without `timeout` the request waits until the server answers or the connection fails.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            reqwest: builder.build()?,
        })
    }
}

impl HtmlSource for ReqwestSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        info!("Fetching {url}");
        let text = self
            .reqwest
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        info!("Received {} bytes from {url}", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ReqwestSource;

    #[test]
    fn build_client_with_and_without_timeout() {
        assert!(ReqwestSource::new(None).is_ok());
        assert!(ReqwestSource::new(Some(Duration::from_secs(30))).is_ok());
    }
}
