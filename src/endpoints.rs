//! The URIs served by the host page server and consumed by the push client.

/// The page hosting the quick-operation modal and the push toggle.
pub const ROOT: &str = "/";
/// The readiness probe polled after a deployment.
pub const READY: &str = "/ready";
/// The route for static files.
pub const STATIC: &str = "/static";
/// The notification service worker script.
///
/// It is served from the root so that its scope covers the whole site.
pub const SERVICE_WORKER: &str = "/sw.js";

/// The backend route that stores a push subscription.
pub const PUSH_SUBSCRIBE: &str = "/api/push/subscribe";
/// The backend route that removes a push subscription.
pub const PUSH_UNSUBSCRIBE: &str = "/api/push/unsubscribe";
/// The backend route that sends a test notification.
pub const PUSH_TEST: &str = "/api/push/test";
/// The backend route that the quick-operation form is submitted to.
pub const CREATE_TRANSACTION: &str = "/transactions/create";
