//! Implements a struct that holds the state of the host page server.

use std::{fs, path::Path, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    config::PushConfig,
    endpoints,
    operation::{CategoryCatalog, WalletOption},
};

/// The script in the static directory that binds the page to the controllers.
pub const APP_SCRIPT_FILE: &str = "app.js";
/// The service worker script in the static directory.
pub const SERVICE_WORKER_FILE: &str = "sw.js";

/// The data the host page embeds for the quick-operation modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostPageData {
    /// Every category, in display order.
    #[serde(default)]
    pub categories: CategoryCatalog,
    /// The user's wallets, in display order.
    #[serde(default)]
    pub wallets: Vec<WalletOption>,
}

impl HostPageData {
    /// Parse host page data from JSON such as
    /// `{"categories": [{"value": "1", "label": "Salary", "type": "INCOME"}],
    /// "wallets": [{"value": "1", "label": "Cash"}]}`.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidHostPageData] if `json` is malformed.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load host page data from the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidHostPageData] if the file cannot be read or
    /// is malformed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|error| {
            Error::InvalidHostPageData(format!("could not read {}: {error}", path.display()))
        })?;

        Self::from_json(&json)
    }
}

/// The state of the host page server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The categories and wallets shown in the quick-operation modal.
    pub host_page: Arc<HostPageData>,

    /// The public key handed to the push subscription manager, if configured.
    pub vapid_public_key: Option<String>,

    /// The directory static files, including the service worker script, are
    /// served from.
    pub static_dir: PathBuf,

    /// The URL of the page script, if the static directory provides one.
    pub app_script: Option<String>,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// The page only links [APP_SCRIPT_FILE] if it exists in `static_dir`.
    pub fn new(host_page: HostPageData, push_config: &PushConfig, static_dir: PathBuf) -> Self {
        let app_script = static_dir
            .join(APP_SCRIPT_FILE)
            .is_file()
            .then(|| format!("{}/{APP_SCRIPT_FILE}", endpoints::STATIC));

        if app_script.is_none() {
            tracing::warn!(
                "{} has no {APP_SCRIPT_FILE}, the page will not be interactive",
                static_dir.display()
            );
        }

        Self {
            host_page: Arc::new(host_page),
            vapid_public_key: push_config.public_key.clone(),
            static_dir,
            app_script,
        }
    }

    /// The path of the service worker script, if the static directory provides one.
    pub fn service_worker_path(&self) -> Option<PathBuf> {
        Some(self.static_dir.join(SERVICE_WORKER_FILE)).filter(|path| path.is_file())
    }
}
