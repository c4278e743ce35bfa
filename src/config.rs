//! Configuration for the push subscription manager and the service worker.

use std::{env, time::Duration};

/// The environment variable holding the public key for push encryption.
pub const PUBLIC_KEY_ENV_VAR: &str = "VAPID_PUBLIC_KEY";

/// Where the notification service worker script is served from.
pub const DEFAULT_WORKER_SCRIPT_URL: &str = "/sw.js";

/// How long to wait for the service worker to become ready before giving up.
///
/// iOS home screen apps can leave the readiness check pending forever.
pub const DEFAULT_READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for [PushSubscriptionManager](crate::PushSubscriptionManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConfig {
    /// The base64url encoded public key injected by the host page, if any.
    pub public_key: Option<String>,
    /// The URL of the service worker script to register.
    pub worker_script_url: String,
    /// The upper bound on waiting for service worker readiness.
    pub readiness_timeout: Duration,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            worker_script_url: DEFAULT_WORKER_SCRIPT_URL.to_owned(),
            readiness_timeout: DEFAULT_READINESS_TIMEOUT,
        }
    }
}

impl PushConfig {
    /// Create a config with `public_key`. A blank key counts as no key.
    pub fn from_public_key(public_key: &str) -> Self {
        let public_key = public_key.trim();

        Self {
            public_key: (!public_key.is_empty()).then(|| public_key.to_owned()),
            ..Default::default()
        }
    }

    /// Create a config with the public key from the [PUBLIC_KEY_ENV_VAR]
    /// environment variable, if it is set.
    pub fn from_env() -> Self {
        match env::var(PUBLIC_KEY_ENV_VAR) {
            Ok(public_key) => Self::from_public_key(&public_key),
            Err(_) => {
                tracing::warn!("{PUBLIC_KEY_ENV_VAR} is not set, push notifications are disabled");
                Self::default()
            }
        }
    }
}

/// The values the service worker uses for anything a push payload leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDefaults {
    /// The notification title.
    pub title: String,
    /// The notification body.
    pub body: String,
    /// The icon shown in the notification.
    pub icon: String,
    /// The monochrome badge shown in the status bar.
    pub badge: String,
    /// The page opened when the notification is clicked.
    pub url: String,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            title: "FinLife".to_owned(),
            body: String::new(),
            icon: "/static/icons/icon-192.png".to_owned(),
            badge: "/static/icons/badge-72.png".to_owned(),
            url: "/".to_owned(),
        }
    }
}
