#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(err) = serve().await {
        tracing::error!(error = %err, "server stopped");
        eprintln!("adastra: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), adastra::config::ServerError> {
    use adastra::config::{ServerConfig, ServerError};
    use adastra::App;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;

    // Load env vars
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_ansi(!config.production)
        .init();

    // Leptos config
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(production = config.production, "listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::IntoView {
    use adastra::App;
    use leptos::prelude::*;
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
