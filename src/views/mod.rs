//! Server-rendered markup for the host page.

pub(crate) mod home_page;
pub(crate) mod html;
mod push_toggle;
mod quick_op;
