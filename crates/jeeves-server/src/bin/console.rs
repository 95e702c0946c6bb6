//! jeeves-console - Chat with jeeves in a terminal.
//!
//! Each line read from stdin is lowercased, resolved, and the reaction is
//! printed on stdout. Logs go to stderr.

use jeeves_server::{create_motor, load_config};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const GREETING: &str = "You are now talking with Jeeves. Say hi!";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing to stderr (stdout carries the conversation)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let config = load_config()?;
    let motor = create_motor(&config).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{}\n", GREETING).as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim().to_lowercase();
        if text.is_empty() {
            continue;
        }

        let reaction = motor.respond(&text).await;
        stdout.write_all(format!("{}\n\n", reaction).as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
