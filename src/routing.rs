//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    AppState, endpoints,
    views::{home_page::get_home_page, html::error_view},
};

/// Return a router with all the app's routes.
///
/// The service worker script is only routed if the static directory has one,
/// otherwise it falls through to the 404 page.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    let router = Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::READY, get(get_ready));

    let router = match state.service_worker_path() {
        Some(path) => router.route_service(endpoints::SERVICE_WORKER, ServeFile::new(path)),
        None => {
            tracing::warn!(
                "{} has no service worker script, push notifications cannot be enabled",
                state.static_dir.display()
            );
            router
        }
    };

    router
        .nest_service(endpoints::STATIC, static_files)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Answer the deployment readiness probe.
async fn get_ready() -> &'static str {
    "ready"
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Sorry, we couldn't find the page you were looking for.",
        ),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        AppState, app_state::HostPageData, build_router, config::PushConfig, endpoints,
    };

    fn empty_static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("finlife-web-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("Could not create static directory");

        dir
    }

    fn static_dir(name: &str) -> PathBuf {
        let dir = empty_static_dir(name);
        fs::write(dir.join("sw.js"), "self.addEventListener('push', () => {});")
            .expect("Could not write service worker");
        fs::write(dir.join("app.js"), "console.log('app');").expect("Could not write script");

        dir
    }

    fn server_for(static_dir: PathBuf) -> TestServer {
        let state = AppState::new(
            HostPageData::default(),
            &PushConfig::from_public_key("BKey"),
            static_dir,
        );

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn new_server(name: &str) -> TestServer {
        server_for(static_dir(name))
    }

    #[tokio::test]
    async fn ready_answers_ok() {
        let server = new_server("ready");

        let response = server.get(endpoints::READY).await;

        response.assert_status_ok();
        response.assert_text("ready");
    }

    #[tokio::test]
    async fn root_serves_home_page() {
        let server = new_server("root");

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert!(response.text().contains("window.VAPID_PUBLIC_KEY"));
    }

    #[tokio::test]
    async fn service_worker_is_served_from_root() {
        let server = new_server("sw");

        let response = server.get(endpoints::SERVICE_WORKER).await;

        response.assert_status_ok();
        assert!(response.text().contains("addEventListener('push'"));
    }

    #[tokio::test]
    async fn root_links_app_script_when_present() {
        let server = new_server("script");

        let response = server.get(endpoints::ROOT).await;

        assert!(response.text().contains(r#"src="/static/app.js""#));
    }

    #[tokio::test]
    async fn missing_assets_are_not_linked_or_routed() {
        let server = server_for(empty_static_dir("empty"));

        let page = server.get(endpoints::ROOT).await;
        page.assert_status_ok();
        assert!(!page.text().contains("app.js"));

        server
            .get(endpoints::SERVICE_WORKER)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn static_files_are_served() {
        let server = new_server("static");

        let response = server.get("/static/app.js").await;

        response.assert_status_ok();
        response.assert_text("console.log('app');");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = new_server("missing");

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
