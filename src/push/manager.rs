//! The lifecycle of this browser's push subscription: discovering the current
//! status, subscribing, unsubscribing and sending a test notification.

use std::{
    future::Future,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    Error,
    config::PushConfig,
    push::{
        ApplicationServerKey, ButtonView, Permission, PushApi, PushPlatform, PushView, UiState,
    },
};

/// Manages the push subscription of this browser and the toggle reflecting it.
///
/// Only one of [subscribe](Self::subscribe), [unsubscribe](Self::unsubscribe),
/// [toggle](Self::toggle) and [send_test](Self::send_test) runs at a time. A
/// call made while another is running returns [Error::OperationInFlight]
/// without touching the platform, and the toggle is disabled in the meantime.
pub struct PushSubscriptionManager<P, A, V> {
    platform: P,
    api: A,
    view: Mutex<V>,
    config: PushConfig,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the running action finishes.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P, A, V> PushSubscriptionManager<P, A, V>
where
    P: PushPlatform,
    A: PushApi,
    V: PushView,
{
    /// Create a manager that renders to `view`.
    pub fn new(platform: P, api: A, view: V, config: PushConfig) -> Self {
        Self {
            platform,
            api,
            view: Mutex::new(view),
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Work out the current status and render it.
    pub async fn init(&self) -> UiState {
        let state = self.current_state().await;
        self.render(state);
        state
    }

    /// Subscribe this browser to push notifications and register the
    /// subscription with the backend.
    ///
    /// Returns the new UI state, which is [UiState::Denied] if the user blocks
    /// notifications when asked.
    ///
    /// # Errors
    ///
    /// On any other failure the user is alerted, the toggle is left as it
    /// was and the error is returned.
    pub async fn subscribe(&self) -> Result<UiState, Error> {
        let _in_flight = self.begin()?;

        let result = self.try_subscribe().await;
        self.finish(result).await
    }

    /// Revoke this browser's push subscription and tell the backend to forget it.
    ///
    /// Always ends in [UiState::Prompt]. Failing to reach the backend is
    /// logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Only fails with [Error::OperationInFlight].
    pub async fn unsubscribe(&self) -> Result<UiState, Error> {
        let _in_flight = self.begin()?;
        self.render_view(&ButtonView::busy());

        let subscription = self
            .platform
            .current_subscription()
            .await
            .inspect_err(|error| tracing::warn!("Could not look up push subscription: {error}"))
            .unwrap_or_default();

        let Some(record) = subscription else {
            tracing::debug!("No push subscription to remove");
            self.render(UiState::Prompt);
            return Ok(UiState::Prompt);
        };

        if let Err(error) = self.platform.unsubscribe().await {
            tracing::error!("Could not revoke push subscription: {error}");
        }

        if let Err(error) = self.api.unsubscribe(&record).await {
            tracing::warn!("Could not remove push subscription from the server: {error}");
        }

        tracing::info!("Push notifications disabled");
        self.render(UiState::Prompt);
        Ok(UiState::Prompt)
    }

    /// Subscribe if there is no live subscription, otherwise unsubscribe.
    pub async fn toggle(&self) -> Result<UiState, Error> {
        if self.in_flight.load(Ordering::Acquire) {
            return Err(Error::OperationInFlight);
        }

        let is_subscribed = matches!(self.platform.current_subscription().await, Ok(Some(_)));

        if is_subscribed {
            self.unsubscribe().await
        } else {
            self.subscribe().await
        }
    }

    /// Ask the backend to send a test notification and tell the user whether
    /// any device received it.
    ///
    /// Returns the number of subscriptions the notification was sent to.
    pub async fn send_test(&self) -> Result<u32, Error> {
        let _in_flight = self.begin()?;

        match self.api.send_test().await {
            Ok(response) => {
                let message = if response.sent > 0 {
                    format!("Test notification sent to {} device(s).", response.sent)
                } else {
                    "No devices are subscribed. Enable notifications first.".to_owned()
                };
                self.alert(&message);
                Ok(response.sent)
            }
            Err(error) => {
                tracing::error!("Could not send test notification: {error}");
                self.alert_for(&error);
                Err(error)
            }
        }
    }

    async fn try_subscribe(&self) -> Result<UiState, Error> {
        if !self.platform.is_supported() {
            return Err(Error::PushUnsupported);
        }

        let key = self
            .config
            .public_key
            .as_deref()
            .ok_or(Error::MissingPublicKey)
            .and_then(ApplicationServerKey::from_base64)?;

        self.render_view(&ButtonView::busy());
        self.ensure_registration().await?;

        let record = match self.platform.subscribe(&key).await {
            Ok(record) => record,
            Err(_) if self.platform.permission() == Permission::Denied => {
                tracing::info!("Notification permission denied");
                return Ok(UiState::Denied);
            }
            Err(error) => return Err(error),
        };

        if let Err(error) = self.api.subscribe(&record).await {
            // Keep the platform and the server in agreement.
            if let Err(revoke_error) = self.platform.unsubscribe().await {
                tracing::warn!("Could not revoke unregistered subscription: {revoke_error}");
            }
            return Err(error);
        }

        tracing::info!("Push notifications enabled");
        Ok(UiState::Subscribed)
    }

    /// Register the service worker if needed and wait for it to be ready.
    ///
    /// Every step can stall on iOS home screen apps, so the whole sequence
    /// shares the readiness timeout.
    async fn ensure_registration(&self) -> Result<(), Error> {
        let registration = async {
            if self.platform.registration_count().await? == 0 {
                tracing::debug!("Registering {}", self.config.worker_script_url);
                self.platform
                    .register_worker(&self.config.worker_script_url)
                    .await?;
            }

            self.platform.ready().await
        };

        self.bounded(registration).await.unwrap_or_else(|| {
            Err(Error::Platform(format!(
                "the service worker did not become ready within {:?}",
                self.config.readiness_timeout
            )))
        })
    }

    async fn finish(&self, result: Result<UiState, Error>) -> Result<UiState, Error> {
        match result {
            Ok(state) => {
                self.render(state);
                Ok(state)
            }
            Err(error) => {
                tracing::error!("Could not enable push notifications: {error}");
                let state = self.current_state().await;
                self.render(state);
                self.alert_for(&error);
                Err(error)
            }
        }
    }

    async fn current_state(&self) -> UiState {
        if !self.platform.is_supported() {
            return UiState::Unsupported;
        }

        if self.platform.permission() == Permission::Denied {
            return UiState::Denied;
        }

        let probe = async {
            self.platform.ready().await?;
            self.platform.current_subscription().await
        };

        match self.bounded(probe).await {
            Some(Ok(Some(_))) => UiState::Subscribed,
            Some(Ok(None)) => UiState::Prompt,
            Some(Err(error)) => {
                tracing::warn!("Could not check push subscription: {error}");
                UiState::Prompt
            }
            None => {
                tracing::warn!(
                    "Service worker was not ready after {:?}, assuming no subscription",
                    self.config.readiness_timeout
                );
                UiState::Prompt
            }
        }
    }

    /// Run `future`, giving up after the readiness timeout.
    async fn bounded<T>(&self, future: impl Future<Output = T>) -> Option<T> {
        tokio::time::timeout(self.config.readiness_timeout, future)
            .await
            .ok()
    }

    fn begin(&self) -> Result<InFlight<'_>, Error> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!("Ignoring push action while another is in progress");
            return Err(Error::OperationInFlight);
        }

        Ok(InFlight(&self.in_flight))
    }

    fn render(&self, state: UiState) {
        self.render_view(&ButtonView::for_state(state));
    }

    fn render_view(&self, view: &ButtonView) {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .render(view);
    }

    fn alert_for(&self, error: &Error) {
        if let Some(message) = error.alert_message() {
            self.alert(&message);
        }
    }

    fn alert(&self, message: &str) {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .alert(message);
    }
}
