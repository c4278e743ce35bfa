//! The browser capabilities the push subscription manager depends on.

use async_trait::async_trait;

use crate::{
    Error,
    push::{ApplicationServerKey, ButtonView, PushSubscriptionRecord},
};

/// The notification permission granted to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// The user allowed notifications.
    Granted,
    /// The user blocked notifications.
    Denied,
    /// The user has not been asked yet.
    Default,
}

/// Push messaging and service worker registration, as provided by the browser.
#[async_trait]
pub trait PushPlatform: Send + Sync {
    /// Whether the platform supports both service workers and push messaging.
    fn is_supported(&self) -> bool;

    /// The current notification permission.
    fn permission(&self) -> Permission;

    /// The number of service worker registrations for this origin.
    async fn registration_count(&self) -> Result<usize, Error>;

    /// Register the service worker at `script_url`.
    async fn register_worker(&self, script_url: &str) -> Result<(), Error>;

    /// Wait until a service worker registration is active.
    ///
    /// Some platforms never settle this, so callers should bound the wait.
    async fn ready(&self) -> Result<(), Error>;

    /// The live push subscription, if there is one.
    async fn current_subscription(&self) -> Result<Option<PushSubscriptionRecord>, Error>;

    /// Ask the push service for a new subscription tied to `key`.
    async fn subscribe(&self, key: &ApplicationServerKey) -> Result<PushSubscriptionRecord, Error>;

    /// Revoke the live push subscription.
    async fn unsubscribe(&self) -> Result<(), Error>;
}

/// The page elements reflecting the push notification status.
pub trait PushView: Send {
    /// Update the toggle button and status text.
    fn render(&mut self, view: &ButtonView);

    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);
}
