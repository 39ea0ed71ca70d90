#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use waitlist::app::*;
    use waitlist::core::config::{Config, StoreBackend};
    use waitlist::core::db::{DbConfig, SubscriberRepository, create_pool_with_migrations};
    use waitlist::core::subscribe::{
        MemoryLeadStore, RestLeadStore, SubscribeService, subscribe_router,
    };

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();
    let backend = config.backend();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: database={}, rest_store={}, backend={}",
        config.has_database(),
        config.has_rest_store(),
        backend.name()
    );

    let profile = landing_profile();

    // Build the subscribe API on top of the selected store
    let subscribe_api = match backend {
        StoreBackend::Postgres { database_url } => {
            let pool = match create_pool_with_migrations(&DbConfig::new(database_url)).await {
                Ok(pool) => pool,
                Err(e) => {
                    tracing::error!("Failed to connect to database: {}", e);
                    std::process::exit(1);
                }
            };
            tracing::info!("Database connected, migrations applied");
            subscribe_router(SubscribeService::new(
                SubscriberRepository::new(pool),
                profile,
            ))
        }
        StoreBackend::Rest { base_url, api_key } => {
            let store = RestLeadStore::new(&base_url, api_key);
            tracing::info!("Storing leads via {}", store.table_url());
            subscribe_router(SubscribeService::new(store, profile))
        }
        StoreBackend::Memory => {
            tracing::warn!(
                "No DATABASE_URL or SUPABASE_URL/SUPABASE_KEY set, leads are kept in memory only"
            );
            subscribe_router(SubscribeService::new(MemoryLeadStore::new(), profile))
        }
    };

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(e) => {
            tracing::error!("Failed to load Leptos configuration: {}", e);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Serve pre-compressed .br/.gz assets from /pkg
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .merge(subscribe_api)
        // Leptos routes (merged last to avoid state conflicts)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Subscribe API: http://{}/api/subscribe", &addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
