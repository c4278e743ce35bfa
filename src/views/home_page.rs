//! The page that hosts the quick-operation modal and the push toggle.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    app_state::HostPageData,
    views::{
        html::{HeadElement, PAGE_CONTAINER_STYLE, base, json_global},
        push_toggle::push_toggle,
        quick_op::{quick_op_dropdown, quick_op_modal},
    },
};

/// The global holding the public key for push encryption, `null` if unset.
pub const PUBLIC_KEY_GLOBAL: &str = "VAPID_PUBLIC_KEY";
/// The global holding the category catalog.
pub const CATEGORIES_GLOBAL: &str = "QUICK_OP_CATEGORIES";

/// The state needed for the home page.
#[derive(Debug, Clone)]
pub struct HomePageState {
    /// The categories and wallets for the modal.
    pub host_page: Arc<HostPageData>,
    /// The public key for push encryption, if configured.
    pub vapid_public_key: Option<String>,
    /// The URL of the page script, if there is one.
    pub app_script: Option<String>,
}

impl FromRef<AppState> for HomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            host_page: state.host_page.clone(),
            vapid_public_key: state.vapid_public_key.clone(),
            app_script: state.app_script.clone(),
        }
    }
}

fn home_view(host_page: &HostPageData, head_elements: &[HeadElement]) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md space-y-8"
            {
                h1 class="text-2xl font-bold" { "FinLife" }

                (quick_op_dropdown())

                (push_toggle())
            }
        }

        (quick_op_modal(&host_page.categories, &host_page.wallets))
    );

    base("Home", head_elements, &content)
}

/// Display the home page.
pub async fn get_home_page(State(state): State<HomePageState>) -> Result<Response, Error> {
    let mut head_elements = vec![
        json_global(PUBLIC_KEY_GLOBAL, &state.vapid_public_key)
            .inspect_err(|error| tracing::error!("Could not serialize the public key: {error}"))?,
        json_global(CATEGORIES_GLOBAL, &state.host_page.categories)
            .inspect_err(|error| tracing::error!("Could not serialize the categories: {error}"))?,
    ];
    head_elements.extend(state.app_script.clone().map(HeadElement::ScriptLink));

    Ok(home_view(&state.host_page, &head_elements).into_response())
}
