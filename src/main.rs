use anyhow::Result;
use folio_core::application::{
    ports::{
        reachability::ReachabilityProbe,
        remote::{RemoteArticleApi, RemoteCategoryApi},
        time::Clock,
    },
    services::ApplicationServices,
};
use folio_core::config::{AppConfig, RemoteMode};
use folio_core::domain::{article::ArticleRepository, category::CategoryRepository};
use folio_core::infrastructure::{
    http::TimeoutHttpClient,
    memory::{InMemoryArticleRepository, InMemoryCategoryRepository, MemoryStore},
    reachability::{HttpReachability, StaticReachability},
    remote::RemoteApiGateway,
    time::SystemClock,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = Arc::new(MemoryStore::seeded());
    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(InMemoryArticleRepository::new(Arc::clone(&store)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(InMemoryCategoryRepository::new(Arc::clone(&store)));

    let http = TimeoutHttpClient::new(config.remote_timeout());
    let gateway = Arc::new(RemoteApiGateway::new(config.remote_base_url(), http.clone()));
    let remote_articles: Arc<dyn RemoteArticleApi> = gateway.clone();
    let remote_categories: Arc<dyn RemoteCategoryApi> = gateway;

    let probe: Arc<dyn ReachabilityProbe> = match config.remote_mode() {
        RemoteMode::Offline => Arc::new(StaticReachability::offline()),
        RemoteMode::Online => Arc::new(StaticReachability::online()),
        RemoteMode::Probe => Arc::new(HttpReachability::new(config.remote_health_url(), http)),
    };
    tracing::info!(
        mode = ?config.remote_mode(),
        base_url = config.remote_base_url(),
        timeout = ?config.remote_timeout(),
        "remote API configured"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&article_repo),
        Arc::clone(&category_repo),
        Arc::clone(&remote_articles),
        Arc::clone(&remote_categories),
        Arc::clone(&probe),
        Arc::clone(&clock),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
