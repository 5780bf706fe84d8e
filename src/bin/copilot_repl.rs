//! Interactive console for exercising the copilot without the HTTP layer.
//!
//! Type a message per line; `end` quits. Proposed actions are applied to the
//! local UI context, which is printed after every turn.

use std::error::Error;

use ai_llm_service::telemetry;
use copilot::{CopilotConfig, CopilotSession, UiContext, apply_actions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_WORD: &str = "end";

fn initial_context() -> UiContext {
    [("employee", "250"), ("company_name", "sathya")]
        .into_iter()
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter("warn", false))
        .with(telemetry::layer())
        .init();

    let session = CopilotSession::from_config(&CopilotConfig::from_env()?)?;
    let mut ui_context = initial_context();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"You: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if message.eq_ignore_ascii_case(EXIT_WORD) {
            break;
        }

        match session.run_turn(message, &ui_context).await {
            Ok(reply) => {
                println!("Copilot: {}", reply.answer);
                if !reply.actions().is_empty() {
                    ui_context = apply_actions(reply.actions(), &ui_context);
                }
                println!("UI context: {ui_context}");
            }
            Err(e) => {
                error!(error = %e, "turn failed");
                println!("Copilot: (error) {e}");
            }
        }
    }

    Ok(())
}
