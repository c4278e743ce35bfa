//! Shared page layout and styles.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;

use crate::Error;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2.5 px-5 mb-2 \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - FinLife" }
                link rel="manifest" href="/static/manifest.json";
                link rel="icon" type="image/png" href="/static/icons/icon-192.png" sizes="192x192";
                link href="/static/main.css" rel="stylesheet";

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) defer {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-sm text-center lg:py-16"
            {
                h1 class="mb-4 text-7xl font-extrabold text-blue-600 dark:text-blue-500"
                {
                    (header)
                }

                p class="mb-4 text-3xl font-bold text-gray-900 dark:text-white"
                {
                    (description)
                }

                a
                    href="/"
                    class="inline-flex text-white bg-blue-600 hover:bg-blue-800
                        font-medium rounded text-sm px-5 py-2.5 my-4"
                {
                    "Back to Homepage"
                }
            }
        }
    );

    base(title, &[], &content)
}

/// A script assigning `value` as JSON to the global `name`.
///
/// # Errors
///
/// Returns an [Error::InvalidHostPageData] if `value` cannot be serialized.
pub fn json_global(name: &str, value: &impl Serialize) -> Result<HeadElement, Error> {
    // "</" would end the script element early.
    let json = serde_json::to_string(value)?.replace("</", "<\\/");

    Ok(HeadElement::ScriptSource(PreEscaped(format!(
        "window.{name} = {json};"
    ))))
}
