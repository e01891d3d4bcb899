//! `reqd serve` - run the HTTP API server

use crate::models::ReqdConfig;
use crate::server::{start_server, AppState};
use crate::services::AnalysisService;
use crate::store::JsonStore;
use crate::Result;

pub async fn run(port: Option<u16>) -> Result<()> {
    let config = ReqdConfig::load(None)?;
    let port = port.unwrap_or(config.server.port);

    let store = JsonStore::open(&config.storage.data_dir)?;
    let analysis = AnalysisService::from_config(&config);
    if !analysis.has_provider() {
        tracing::info!("no AI provider configured, analysis uses the rule-based engine");
    }

    let state = AppState::new(Box::new(store), analysis);
    start_server(port, state).await
}
