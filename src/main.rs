//! Word Psychic server binary.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use word_psychic::adapters::{reading_routes, Catalog, InMemorySessionStore, ReadingHandlers};
use word_psychic::application::{
    EvictIdleSessionsHandler, GetSummaryHandler, SessionLocks, StartSessionHandler,
    SubmitAnswerHandler,
};
use word_psychic::config::{AppConfig, ServerConfig, SessionConfig};
use word_psychic::domain::foundation::Timestamp;
use word_psychic::ports::{ContentProvider, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let catalog = match &config.content.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(clusters = catalog.cluster_count(), "Catalog loaded");

    let content: Arc<dyn ContentProvider> = Arc::new(catalog);
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let locks = Arc::new(SessionLocks::new());

    let handlers = ReadingHandlers::new(
        Arc::new(StartSessionHandler::new(store.clone(), content.clone())),
        Arc::new(SubmitAnswerHandler::new(
            store.clone(),
            content,
            locks.clone(),
            config.session.offer_rules(),
        )),
        Arc::new(GetSummaryHandler::new(store.clone())),
        store.clone(),
        config.session.cookie_name.clone(),
    );

    if config.session.eviction_enabled() {
        spawn_eviction(
            EvictIdleSessionsHandler::new(store, locks, config.session.idle_ttl_secs),
            &config.session,
        );
    }

    let app = reading_routes(handlers)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Word Psychic listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Word Psychic shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn spawn_eviction(handler: EvictIdleSessionsHandler, session: &SessionConfig) {
    let period = Duration::from_secs(session.eviction_interval_secs);
    tracing::info!(
        idle_ttl_secs = session.idle_ttl_secs,
        interval_secs = session.eviction_interval_secs,
        "Idle session eviction enabled"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = handler.handle(Timestamp::now()).await {
                tracing::warn!(error = %e, "Idle session eviction failed");
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
