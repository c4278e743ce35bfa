#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod push;
pub(crate) mod quick_op;
pub(crate) mod worker;

pub(crate) use html::{assert_valid_html, must_get_element};
pub(crate) use push::{FakePushPlatform, Readiness, RecordingApi, RecordingView};
pub(crate) use quick_op::{FakeSurface, RecordingHints};
pub(crate) use worker::RecordingHost;
