mod advisor;
mod analysis;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod resume;
mod routes;
mod session;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::roadmap::DifficultyTiers;
use crate::config::Config;
use crate::llm_client::{ChatCompleter, LlmClient};
use crate::routes::build_router;
use crate::session::{AnalysisStore, MemoryAnalysisStore, RedisAnalysisStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMap API v{}", env!("CARGO_PKG_VERSION"));

    // Session store: Redis when configured, in-process otherwise
    let store: Arc<dyn AnalysisStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis session store initialized");
            Arc::new(RedisAnalysisStore::new(client, config.session_ttl_secs))
        }
        None => {
            warn!("REDIS_URL not set; analyses are kept in process memory");
            Arc::new(MemoryAnalysisStore::new())
        }
    };

    // Chat collaborator: optional, the advisor degrades to a static answer without it
    let chat: Option<Arc<dyn ChatCompleter>> = match &config.chat_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.chat_api_url.clone(),
                config.chat_model.clone(),
            )?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(llm))
        }
        None => {
            warn!("GROQ_API_KEY not set; advisor will use fallback answers");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        store,
        chat,
        tiers: Arc::new(DifficultyTiers::default()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
