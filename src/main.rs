#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use cheftable::app::{App, shell};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr: std::net::SocketAddr = match std::env::var("PORT") {
        Ok(port) => format!("0.0.0.0:{port}").parse().expect("invalid PORT"),
        Err(_) => leptos_options.site_addr,
    };
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!(%addr, api = %cheftable::config::api_base(), "cheftable listening");
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind");
    axum::serve(listener, app.into_make_service()).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Binary only exists for the ssr build; the hydrate build is a cdylib.
}
