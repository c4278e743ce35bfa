//! Rendering of the push notification toggle.

/// The push notification status shown to the user.
///
/// It is derived from the platform every time it is needed and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    /// The browser cannot receive push notifications.
    Unsupported,
    /// The user blocked notifications in the browser settings.
    Denied,
    /// Notifications can be enabled.
    Prompt,
    /// This browser is subscribed.
    Subscribed,
}

/// The CSS classes of an enabled toggle offering to subscribe.
pub const BUTTON_ENABLE_STYLE: &str = "px-4 py-2 rounded text-white bg-blue-600 hover:bg-blue-700";
/// The CSS classes of a toggle offering to unsubscribe.
pub const BUTTON_DANGER_STYLE: &str = "px-4 py-2 rounded text-white bg-red-600 hover:bg-red-700";
/// The CSS classes of a toggle that cannot be used.
pub const BUTTON_DISABLED_STYLE: &str =
    "px-4 py-2 rounded text-gray-500 bg-gray-200 cursor-not-allowed";

/// Everything the page needs to draw the push toggle and its status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    /// The button label.
    pub label: &'static str,
    /// The button CSS classes.
    pub class: &'static str,
    /// Whether the button is disabled.
    pub disabled: bool,
    /// The text next to the button.
    pub status: &'static str,
}

impl ButtonView {
    /// The view for `state`.
    pub fn for_state(state: UiState) -> Self {
        match state {
            UiState::Subscribed => Self {
                label: "Disable notifications",
                class: BUTTON_DANGER_STYLE,
                disabled: false,
                status: "Notifications are enabled on this device.",
            },
            UiState::Prompt => Self {
                label: "Enable notifications",
                class: BUTTON_ENABLE_STYLE,
                disabled: false,
                status: "Notifications are disabled on this device.",
            },
            UiState::Denied => Self {
                label: "Notifications blocked",
                class: BUTTON_DISABLED_STYLE,
                disabled: true,
                status: "Notifications are blocked. Allow them in your browser settings \
                    and reload the page.",
            },
            UiState::Unsupported => Self {
                label: "Notifications unavailable",
                class: BUTTON_DISABLED_STYLE,
                disabled: true,
                status: "This browser does not support push notifications. On iOS, add \
                    the app to your home screen first.",
            },
        }
    }

    /// The view shown while a subscribe or unsubscribe request is running.
    pub fn busy() -> Self {
        Self {
            label: "Please wait…",
            class: BUTTON_DISABLED_STYLE,
            disabled: true,
            status: "",
        }
    }
}
