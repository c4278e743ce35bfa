//! The notification service worker: shows push messages as notifications and
//! routes notification clicks to an open tab or a new one.
//!
//! Each handler returns a future that covers all of the event's work. The
//! host must keep the worker alive until that future completes (in a browser,
//! by passing it to `event.waitUntil`), otherwise the platform may stop the
//! worker before the notification is shown or the window is focused.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::{Error, config::NotificationDefaults};

/// A notification to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The notification title.
    pub title: String,
    /// The notification body.
    pub body: String,
    /// The icon URL.
    pub icon: String,
    /// The badge URL.
    pub badge: String,
    /// The page to open when the notification is clicked, relative to the
    /// worker's origin or absolute.
    pub url: String,
}

/// A page controlled by, or visible to, the service worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowClient {
    /// The platform's identifier for the client.
    pub id: String,
    /// The URL currently shown in the client.
    pub url: String,
}

/// What a notification click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An open client already showed the target and was focused.
    Focused(String),
    /// A new window was opened at the target URL.
    Opened(String),
}

/// The capabilities of the worker's global scope.
#[async_trait]
pub trait WorkerHost: Send + Sync {
    /// Activate this worker without waiting for older workers to stop.
    async fn skip_waiting(&self) -> Result<(), Error>;

    /// Take control of every open page in scope.
    async fn claim_clients(&self) -> Result<(), Error>;

    /// Display `notification`.
    async fn show_notification(&self, notification: &Notification) -> Result<(), Error>;

    /// Dismiss `notification`.
    async fn close_notification(&self, notification: &Notification) -> Result<(), Error>;

    /// Every window client in scope, including ones not yet controlled.
    async fn window_clients(&self) -> Result<Vec<WindowClient>, Error>;

    /// Bring `client` to the front.
    async fn focus(&self, client: &WindowClient) -> Result<(), Error>;

    /// Open a new window at `url`.
    async fn open_window(&self, url: &str) -> Result<(), Error>;
}

#[derive(Debug, Default, Deserialize)]
struct PushPayload {
    title: Option<String>,
    body: Option<String>,
    icon: Option<String>,
    badge: Option<String>,
    url: Option<String>,
}

/// Build the notification for a push message.
///
/// `data` is normally a JSON object such as
/// `{"title": "...", "body": "...", "url": "/tasks/1"}`. Anything that does
/// not parse as one is shown as the body of a notification with the default
/// title. Missing fields fall back to `defaults`.
pub fn notification_from_push(data: Option<&[u8]>, defaults: &NotificationDefaults) -> Notification {
    let payload = match data {
        Some(bytes) => serde_json::from_slice::<PushPayload>(bytes).unwrap_or_else(|error| {
            tracing::debug!("Push payload is not JSON ({error}), showing it as text");
            PushPayload {
                body: Some(String::from_utf8_lossy(bytes).into_owned()),
                ..Default::default()
            }
        }),
        None => PushPayload::default(),
    };

    Notification {
        title: payload.title.unwrap_or_else(|| defaults.title.clone()),
        body: payload.body.unwrap_or_else(|| defaults.body.clone()),
        icon: payload.icon.unwrap_or_else(|| defaults.icon.clone()),
        badge: payload.badge.unwrap_or_else(|| defaults.badge.clone()),
        url: payload.url.unwrap_or_else(|| defaults.url.clone()),
    }
}

/// Handles the lifecycle, push and notification click events of the worker.
pub struct NotificationServiceWorker<H> {
    host: H,
    origin: Url,
    defaults: NotificationDefaults,
}

impl<H: WorkerHost> NotificationServiceWorker<H> {
    /// Create a worker for the site at `origin`, e.g. "https://finlife.example.com".
    pub fn new(host: H, origin: Url, defaults: NotificationDefaults) -> Self {
        Self {
            host,
            origin,
            defaults,
        }
    }

    /// Handle the install event by activating immediately.
    pub async fn on_install(&self) -> Result<(), Error> {
        tracing::debug!("Service worker installed");
        self.host.skip_waiting().await
    }

    /// Handle the activate event by taking control of already open pages.
    pub async fn on_activate(&self) -> Result<(), Error> {
        tracing::debug!("Service worker activated");
        self.host.claim_clients().await
    }

    /// Handle a push event carrying `data`, returning the notification shown.
    pub async fn on_push(&self, data: Option<&[u8]>) -> Result<Notification, Error> {
        let notification = notification_from_push(data, &self.defaults);
        self.host.show_notification(&notification).await?;

        Ok(notification)
    }

    /// Handle a click on `notification`.
    ///
    /// Focuses an open client already showing the target page, otherwise
    /// opens a new window there.
    pub async fn on_notification_click(
        &self,
        notification: &Notification,
    ) -> Result<ClickOutcome, Error> {
        self.host.close_notification(notification).await?;

        let target = self.resolve(&notification.url)?;
        let clients = self.host.window_clients().await?;

        if let Some(client) = clients
            .iter()
            .find(|client| same_page(&client.url, &target))
        {
            self.host.focus(client).await?;
            return Ok(ClickOutcome::Focused(client.id.clone()));
        }

        self.host.open_window(target.as_str()).await?;
        Ok(ClickOutcome::Opened(target.into()))
    }

    fn resolve(&self, url: &str) -> Result<Url, Error> {
        let mut target = self
            .origin
            .join(url)
            .map_err(|error| Error::Worker(format!("invalid notification URL {url:?}: {error}")))?;
        target.set_fragment(None);

        Ok(target)
    }
}

fn same_page(client_url: &str, target: &Url) -> bool {
    match Url::parse(client_url) {
        Ok(mut client_url) => {
            client_url.set_fragment(None);
            client_url == *target
        }
        Err(_) => false,
    }
}
