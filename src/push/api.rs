//! The client for the backend push endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::{Error, endpoints, push::PushSubscriptionRecord};

/// The response to a request for a test notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TestPushResponse {
    /// The number of subscriptions the test notification was delivered to.
    #[serde(default)]
    pub sent: u32,
}

/// The backend endpoints that keep the server-side mirror of push subscriptions.
#[async_trait]
pub trait PushApi: Send + Sync {
    /// Store `record` for the logged in user.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or the response is not a success.
    async fn subscribe(&self, record: &PushSubscriptionRecord) -> Result<(), Error>;

    /// Forget `record`. The response status is not checked.
    async fn unsubscribe(&self, record: &PushSubscriptionRecord) -> Result<(), Error>;

    /// Ask the backend to send a test notification to every subscription of the user.
    async fn send_test(&self) -> Result<TestPushResponse, Error>;
}

/// A [PushApi] that talks to the backend over HTTP.
///
/// Cookies set by the backend are kept and sent with later requests, so the
/// session travels with each call like same-origin credentials in a browser.
#[derive(Debug, Clone)]
pub struct HttpPushApi {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpPushApi {
    /// Create a client for the backend at `base_url`, e.g. "https://finlife.example.com".
    ///
    /// # Errors
    ///
    /// Returns [Error::Backend] if `base_url` is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Self::with_client(base_url, http)
    }

    /// Create a client for the backend at `base_url` using an existing HTTP client.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)
            .map_err(|error| Error::Backend(format!("invalid base URL {base_url:?}: {error}")))?;

        Ok(Self { base_url, http })
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|error| Error::Backend(format!("invalid path {path:?}: {error}")))
    }
}

#[async_trait]
impl PushApi for HttpPushApi {
    async fn subscribe(&self, record: &PushSubscriptionRecord) -> Result<(), Error> {
        self.http
            .post(self.url(endpoints::PUSH_SUBSCRIBE)?)
            .json(record)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn unsubscribe(&self, record: &PushSubscriptionRecord) -> Result<(), Error> {
        self.http
            .delete(self.url(endpoints::PUSH_UNSUBSCRIBE)?)
            .json(record)
            .send()
            .await?;

        Ok(())
    }

    async fn send_test(&self) -> Result<TestPushResponse, Error> {
        let response = self
            .http
            .post(self.url(endpoints::PUSH_TEST)?)
            .send()
            .await?
            .error_for_status()?
            .json::<TestPushResponse>()
            .await?;

        Ok(response)
    }
}
