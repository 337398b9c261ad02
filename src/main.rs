//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use envlic::adapters::persistence::{MemoryNotificationStore, MemoryProcessStore};
use envlic::adapters::sample_data::SampleData;
use envlic::adapters::search::MockDocumentSearch;
use envlic::adapters::ui::tui::TuiInputPort;
use envlic::domain::ExpiryClassifier;
use envlic::ports::{DocumentSearchPort, InputPort, NotificationStore, ProcessStore};
use envlic::shared::config::AppConfig;
use envlic::usecases::{AlertService, NotificationService, ProcessService, SearchService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    envlic::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    let warning_days = cfg.expiry_warning_days_or_default();
    info!(warning_days, "expiry warning window: {} days", warning_days);

    // --- Sample data (the dashboard's demo set) ---
    let sample = if cfg.seed_sample_data_or_default() {
        Some(SampleData::embedded().map_err(|e| anyhow::anyhow!("{}", e))?)
    } else {
        None
    };

    // --- Outbound adapters (in-memory until the data service is wired) ---
    let process_store: Arc<dyn ProcessStore> = Arc::new(MemoryProcessStore::new());
    let notification_store: Arc<dyn NotificationStore> = Arc::new(
        MemoryNotificationStore::with_notifications(
            sample
                .as_ref()
                .map(SampleData::notifications)
                .unwrap_or_default(),
        ),
    );
    let search_delay_ms = cfg.search_delay_ms_or_default();
    let documents = sample
        .as_ref()
        .map(|s| s.documents.clone())
        .unwrap_or_default();
    warn!(
        search_delay_ms,
        "document search backend not configured, using mock search adapter"
    );
    let search_port: Arc<dyn DocumentSearchPort> =
        Arc::new(MockDocumentSearch::with_delay(documents, search_delay_ms));

    // --- Services ---
    let process_service = Arc::new(ProcessService::new(
        Arc::clone(&process_store),
        ExpiryClassifier::new(warning_days),
    ));
    let search_service = Arc::new(SearchService::new(search_port));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(
        &notification_store,
    )));
    let alert_service = Arc::new(AlertService::new(
        Arc::clone(&process_service),
        Arc::clone(&notification_store),
    ));

    if let Some(sample) = &sample {
        for input in &sample.processes {
            process_service
                .create(input)
                .await
                .map_err(|e| anyhow::anyhow!("seed {}: {}", input.process_number, e))?;
        }
        info!(processes = sample.processes.len(), "sample data loaded");
    }

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&process_service),
        Arc::clone(&search_service),
        Arc::clone(&notification_service),
        Arc::clone(&alert_service),
    ));

    // --- Run (main menu -> Processes / New / Search / Notifications / Scan) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
