use std::error::Error;

use ai_llm_service::telemetry;
use api::ServerConfig;
use copilot::{CopilotConfig, CopilotSession};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; the process environment may carry everything.
    let dotenv = dotenvy::dotenv();

    let server = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(telemetry::env_filter("info", server.debug))
        .with(telemetry::layer())
        .init();

    if let Err(e) = dotenv {
        info!(reason = %e, "no .env loaded");
    }

    let copilot = CopilotConfig::from_env()?;

    info!(
        host = %server.host,
        port = server.port,
        debug = server.debug,
        model = %copilot.llm.model,
        api_key_configured = copilot.llm.api_key.is_some(),
        history = %copilot.history,
        strict_input = server.strict_input,
        "starting ROI Calculator Backend"
    );
    if !server.has_custom_secret() {
        warn!("API_SECRET_KEY is the development default");
    }

    let session = CopilotSession::from_config(&copilot)?;
    api::start(server, session).await?;

    Ok(())
}
