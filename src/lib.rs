use std::sync::Arc;
pub mod api;
pub mod config;
pub mod storage;

pub use config::Config;

pub struct AppState {
    pub store: Arc<dyn storage::WeatherStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn storage::WeatherStore>) -> Self {
        Self { store }
    }
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let store = storage::MemoryStore::new();
    if let Some(path) = &config.seed_file {
        let added = storage::seed::load_file(&store, path).await?;
        tracing::info!(
            path = %path.display(),
            cities = store.len(),
            temperatures = added,
            "store seeded"
        );
    }
    let state = Arc::new(AppState::new(Arc::new(store)));

    // broadcast channel for shutdown signaling
    let (shutdown_tx, _) = tokio::sync::broadcast::channel::<()>(1);

    let http_shutdown = shutdown_tx.clone();
    let mut server = tokio::spawn(api::http::run(state, config.bind_addr, http_shutdown));

    // wait for CTRL-C or an early server exit, then signal shutdown
    let exited = tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            false
        }
        res = &mut server => {
            res??;
            true
        }
    };
    if !exited {
        tracing::info!("shutting down");
        let _ = shutdown_tx.send(());
        server.await??;
    }
    Ok(())
}
