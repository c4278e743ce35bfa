//! Markup for the push notification toggle.

use maud::{Markup, html};

use crate::{
    dom,
    push::ButtonView,
    views::html::BUTTON_SECONDARY_STYLE,
};

/// The toggle as first sent to the browser.
///
/// The real state is only known after the subscription manager has asked the
/// platform, so the button starts out busy.
pub fn push_toggle() -> Markup {
    let view = ButtonView::busy();

    html! {
        section class="w-full max-w-md space-y-2"
        {
            h2 class="text-lg font-semibold" { "Notifications" }

            div class="flex items-center gap-4"
            {
                button
                    type="button"
                    id=(dom::PUSH_TOGGLE)
                    class=(view.class)
                    disabled[view.disabled]
                {
                    (view.label)
                }

                button
                    type="button"
                    id=(dom::PUSH_TEST)
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Send test"
                }
            }

            p id=(dom::PUSH_STATUS) class="text-sm text-gray-600 dark:text-gray-400"
            {
                (view.status)
            }
        }
    }
}
