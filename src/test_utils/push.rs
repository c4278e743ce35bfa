use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{
    Error,
    push::{
        ApplicationServerKey, ButtonView, Permission, PushApi, PushKeys, PushPlatform,
        PushSubscriptionRecord, PushView, TestPushResponse,
    },
};

/// How the fake platform answers a readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Readiness {
    Ready,
    Never,
}

#[derive(Debug)]
enum SubscribeOutcome {
    Succeed,
    Deny,
    Fail(String),
}

#[derive(Debug)]
struct PlatformState {
    supported: bool,
    permission: Permission,
    registration_count: usize,
    registration_hangs: bool,
    registered_scripts: Vec<String>,
    readiness: Readiness,
    subscription: Option<PushSubscriptionRecord>,
    subscribe_outcome: SubscribeOutcome,
    subscribe_gate: Option<Arc<Notify>>,
    subscribed_key: Option<Vec<u8>>,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
}

/// An in-memory browser push platform. Clones share the same state.
#[derive(Debug, Clone)]
pub(crate) struct FakePushPlatform {
    state: Arc<Mutex<PlatformState>>,
}

impl Default for FakePushPlatform {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(PlatformState {
                supported: true,
                permission: Permission::Default,
                registration_count: 0,
                registration_hangs: false,
                registered_scripts: Vec::new(),
                readiness: Readiness::Ready,
                subscription: None,
                subscribe_outcome: SubscribeOutcome::Succeed,
                subscribe_gate: None,
                subscribed_key: None,
                subscribe_calls: 0,
                unsubscribe_calls: 0,
            })),
        }
    }
}

impl FakePushPlatform {
    pub fn unsupported() -> Self {
        let platform = Self::default();
        platform.state().supported = false;
        platform
    }

    /// The subscription the fake push service hands out.
    pub fn record() -> PushSubscriptionRecord {
        PushSubscriptionRecord {
            endpoint: "https://push.example.com/send/device-1".to_owned(),
            keys: PushKeys {
                p256dh: "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u-Ts1XbjhazAkj7I99e8QcYP7DkM".to_owned(),
                auth: "tBHItJI5svbpez7KI4CCXg".to_owned(),
            },
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, PlatformState> {
        self.state.lock().unwrap()
    }

    pub fn set_permission(&self, permission: Permission) {
        self.state().permission = permission;
    }

    pub fn set_registration_count(&self, count: usize) {
        self.state().registration_count = count;
    }

    /// Make `register_worker` never settle.
    pub fn hang_registration(&self) {
        self.state().registration_hangs = true;
    }

    pub fn set_readiness(&self, readiness: Readiness) {
        self.state().readiness = readiness;
    }

    pub fn set_subscription(&self, subscription: Option<PushSubscriptionRecord>) {
        self.state().subscription = subscription;
    }

    /// The user blocks notifications when the permission prompt appears.
    pub fn deny_on_subscribe(&self) {
        self.state().subscribe_outcome = SubscribeOutcome::Deny;
    }

    pub fn fail_subscribe(&self, message: &str) {
        self.state().subscribe_outcome = SubscribeOutcome::Fail(message.to_owned());
    }

    /// Make `subscribe` wait until the returned gate is notified.
    pub fn gate_subscribe(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state().subscribe_gate = Some(gate.clone());
        gate
    }

    pub fn subscription(&self) -> Option<PushSubscriptionRecord> {
        self.state().subscription.clone()
    }

    pub fn registered_scripts(&self) -> Vec<String> {
        self.state().registered_scripts.clone()
    }

    pub fn subscribed_key(&self) -> Option<Vec<u8>> {
        self.state().subscribed_key.clone()
    }

    pub fn subscribe_calls(&self) -> usize {
        self.state().subscribe_calls
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.state().unsubscribe_calls
    }
}

#[async_trait]
impl PushPlatform for FakePushPlatform {
    fn is_supported(&self) -> bool {
        self.state().supported
    }

    fn permission(&self) -> Permission {
        self.state().permission
    }

    async fn registration_count(&self) -> Result<usize, Error> {
        Ok(self.state().registration_count)
    }

    async fn register_worker(&self, script_url: &str) -> Result<(), Error> {
        let hangs = self.state().registration_hangs;
        if hangs {
            return std::future::pending().await;
        }

        let mut state = self.state();
        state.registration_count += 1;
        state.registered_scripts.push(script_url.to_owned());
        Ok(())
    }

    async fn ready(&self) -> Result<(), Error> {
        let readiness = self.state().readiness;

        match readiness {
            Readiness::Ready => Ok(()),
            Readiness::Never => std::future::pending().await,
        }
    }

    async fn current_subscription(&self) -> Result<Option<PushSubscriptionRecord>, Error> {
        Ok(self.state().subscription.clone())
    }

    async fn subscribe(&self, key: &ApplicationServerKey) -> Result<PushSubscriptionRecord, Error> {
        let gate = {
            let mut state = self.state();
            state.subscribe_calls += 1;
            state.subscribed_key = Some(key.as_bytes().to_vec());
            state.subscribe_gate.clone()
        };

        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut state = self.state();
        match &state.subscribe_outcome {
            SubscribeOutcome::Succeed => {
                state.permission = Permission::Granted;
                state.subscription = Some(Self::record());
                Ok(Self::record())
            }
            SubscribeOutcome::Deny => {
                state.permission = Permission::Denied;
                Err(Error::Platform("NotAllowedError".to_owned()))
            }
            SubscribeOutcome::Fail(message) => Err(Error::Platform(message.clone())),
        }
    }

    async fn unsubscribe(&self) -> Result<(), Error> {
        let mut state = self.state();
        state.unsubscribe_calls += 1;
        state.subscription = None;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ApiState {
    subscribed: Vec<PushSubscriptionRecord>,
    unsubscribed: Vec<PushSubscriptionRecord>,
    fail_subscribe: bool,
    fail_unsubscribe: bool,
    sent: u32,
}

/// A backend that records the requests it receives. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingApi {
    state: Arc<Mutex<ApiState>>,
}

impl RecordingApi {
    pub fn fail_subscribe(&self) {
        self.state.lock().unwrap().fail_subscribe = true;
    }

    pub fn fail_unsubscribe(&self) {
        self.state.lock().unwrap().fail_unsubscribe = true;
    }

    pub fn set_sent(&self, sent: u32) {
        self.state.lock().unwrap().sent = sent;
    }

    pub fn subscribed(&self) -> Vec<PushSubscriptionRecord> {
        self.state.lock().unwrap().subscribed.clone()
    }

    pub fn unsubscribed(&self) -> Vec<PushSubscriptionRecord> {
        self.state.lock().unwrap().unsubscribed.clone()
    }
}

#[async_trait]
impl PushApi for RecordingApi {
    async fn subscribe(&self, record: &PushSubscriptionRecord) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        if state.fail_subscribe {
            return Err(Error::BackendStatus(500));
        }
        state.subscribed.push(record.clone());
        Ok(())
    }

    async fn unsubscribe(&self, record: &PushSubscriptionRecord) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        if state.fail_unsubscribe {
            return Err(Error::Backend("connection refused".to_owned()));
        }
        state.unsubscribed.push(record.clone());
        Ok(())
    }

    async fn send_test(&self) -> Result<TestPushResponse, Error> {
        Ok(TestPushResponse {
            sent: self.state.lock().unwrap().sent,
        })
    }
}

#[derive(Debug, Default)]
struct ViewState {
    renders: Vec<ButtonView>,
    alerts: Vec<String>,
}

/// A push toggle that records what it was asked to show. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingView {
    state: Arc<Mutex<ViewState>>,
}

impl RecordingView {
    pub fn renders(&self) -> Vec<ButtonView> {
        self.state.lock().unwrap().renders.clone()
    }

    pub fn last_render(&self) -> Option<ButtonView> {
        self.state.lock().unwrap().renders.last().cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.lock().unwrap().alerts.clone()
    }
}

impl PushView for RecordingView {
    fn render(&mut self, view: &ButtonView) {
        self.state.lock().unwrap().renders.push(view.clone());
    }

    fn alert(&mut self, message: &str) {
        self.state.lock().unwrap().alerts.push(message.to_owned());
    }
}
