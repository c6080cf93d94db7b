use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ubclubs::{config::Config, dashboard::DashboardStats, storage::DataStore};

fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    let store = DataStore::open(&config).expect("Failed to open storage backend");
    if !store.is_available() {
        tracing::warn!("No storage backend, serving fixture data only");
    }

    if config.reset_on_start {
        tracing::warn!("UBCLUBS_RESET is set, discarding stored changes");
        store.reset();
    } else {
        store.initialize();
    }

    let stats = DashboardStats::collect(&store);
    tracing::info!(
        "Storage ready ({}): {} pending requests, {} clubs, {} posts, {} events",
        config.storage,
        stats.pending_requests,
        stats.clubs,
        stats.posts,
        stats.events
    );
}
