use std::io::Read;

use tracing_subscriber::{fmt, EnvFilter};

use routine_ai::generator;
use shared::config::Settings;
use shared::deepseek_client::DeepSeekClient;
use shared::dto::GenerateRequest;

/// Reads a generation request (profile JSON) on stdin, asks the model for a
/// routine and prints the canonical document on stdout.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = Settings::new()?;
    let vendor = DeepSeekClient::new(settings)?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let req: GenerateRequest = if input.trim().is_empty() {
        GenerateRequest::default()
    } else {
        serde_json::from_str(&input)?
    };

    let routine = generator::generate_routine(&vendor, &req).await?;
    println!("{}", serde_json::to_string_pretty(&routine)?);
    Ok(())
}
