//! FinLife web glue: the quick-operation modal controller, the push
//! subscription manager and the notification service worker, plus the small
//! server that renders the page hosting them.
//!
//! The three components are state machines over traits. [QuickOpController]
//! drives a [QuickOpSurface], [PushSubscriptionManager] drives a
//! [PushPlatform], a [PushApi] and a [PushView], and
//! [NotificationServiceWorker] drives a [WorkerHost]. The crate ships no
//! browser binding for these traits; an embedder supplies one.
//!
//! The host page server renders the elements the controllers expect. It links
//! `/static/app.js` and serves `/sw.js` only when the static directory
//! provides them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
pub mod config;
pub mod dom;
pub mod endpoints;
mod error;
mod logging;
mod operation;
pub mod push;
mod quick_op;
mod routing;
mod service_worker;
mod views;

#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, HostPageData};
pub use config::{NotificationDefaults, PushConfig};
pub use error::Error;
pub use logging::{DEFAULT_LOG_FILTER, add_tracing_layer, setup_logging};
pub use operation::{
    CategoryCatalog, CategoryKind, CategoryOption, FieldVisibility, OperationType, WalletOption,
};
pub use push::{
    ButtonView, HttpPushApi, Permission, PushApi, PushPlatform, PushSubscriptionManager,
    PushSubscriptionRecord, PushView, UiState,
};
pub use quick_op::{BalanceHints, ModalState, QuickOpController, QuickOpSurface};
pub use routing::build_router;
pub use service_worker::{
    ClickOutcome, Notification, NotificationServiceWorker, WindowClient, WorkerHost,
    notification_from_push,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
