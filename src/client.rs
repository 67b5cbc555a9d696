use std::time::Duration;

use crate::config::Config;
use crate::email::Email;
use crate::error::Error;
use crate::request;

// Request timeout, in seconds
pub(crate) const REQUEST_TIMEOUT: u64 = 30;

/// Result of a successful send: the provider's status code and raw
/// response body, passed through unparsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

/// Mailjet send client. Stateless apart from the connection pool inside
/// the underlying HTTP client; safe to share across tasks.
pub struct Client {
    config: Config,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .build()
            .unwrap();
        Self { config, client }
    }

    /// Deliver a single message: build the request, POST it, classify the
    /// response. One attempt, no retries; every non-2xx status becomes an
    /// `Error::Api` carrying the provider's body verbatim.
    pub async fn deliver(&self, email: &Email) -> Result<Delivery, Error> {
        let req = request::build(email, &self.config)?;

        log::debug!("Sending mail from {} via {}", req.body.from_email, req.url);

        let mut builder = self
            .client
            .post(reqwest::Url::parse(&req.url)?)
            .json(&req.body);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            Ok(Delivery {
                status: status.as_u16(),
                body,
            })
        } else {
            log::error!("Provider rejected send: status = {}", status);
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}
