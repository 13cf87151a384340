#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use examtracker::app::*;
    use examtracker::core::config::ApiConfig;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Backend the browser bundle talks to
    let api = ApiConfig::from_env();
    tracing::info!("Exam backend: {}", api.base_url);
    probe_backend(&api).await;

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).expect("invalid Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) files when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

/// Check once that the backend answers; the app still starts if it does not
#[cfg(feature = "ssr")]
async fn probe_backend(api: &examtracker::core::config::ApiConfig) {
    use examtracker::core::api::transport::ReqwestTransport;
    use examtracker::core::api::{ApiRequest, Method, Transport};

    let request = ApiRequest::new(Method::Get, api.url("/docs"));
    match ReqwestTransport::default().send(request).await {
        Ok(response) if response.is_success() => {
            tracing::info!("Exam backend reachable at {}", api.base_url);
        }
        Ok(response) => {
            tracing::warn!(
                "Exam backend at {} answered with status {}",
                api.base_url,
                response.status
            );
        }
        Err(err) => {
            tracing::warn!("Exam backend at {} not reachable: {}", api.base_url, err);
        }
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
