//! Web push subscription management for the browser.
//!
//! [PushSubscriptionManager] drives the subscription lifecycle against a
//! [PushPlatform] (the browser), a [PushApi] (the backend) and a [PushView]
//! (the toggle button and status text on the page).

mod api;
mod key;
mod manager;
mod platform;
mod subscription;
mod ui;

pub use api::{HttpPushApi, PushApi, TestPushResponse};
pub use key::{APPLICATION_SERVER_KEY_LEN, ApplicationServerKey};
pub use manager::PushSubscriptionManager;
pub use platform::{Permission, PushPlatform, PushView};
pub use subscription::{PushKeys, PushSubscriptionRecord};
pub use ui::{
    BUTTON_DANGER_STYLE, BUTTON_DISABLED_STYLE, BUTTON_ENABLE_STYLE, ButtonView, UiState,
};
