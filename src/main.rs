// src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use clarity::api::app_router;
use clarity::classifier::{ArtifactClassifier, IntentClassifier};
use clarity::config::ClarityConfig;
use clarity::generator::ResponseGenerator;
use clarity::llm::{GeminiClient, TextCompletion};
use clarity::pipeline::SupportPipeline;
use clarity::state::AppState;

#[derive(Parser)]
#[command(name = "clarity")]
#[command(about = "Intent classification plus generated supportive replies behind a web form", long_about = None)]
struct Cli {
    /// Bind host (overrides CLARITY_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides CLARITY_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Classifier artifact (overrides CLARITY_MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Vectorizer artifact (overrides CLARITY_VECTORIZER_PATH)
    #[arg(long)]
    vectorizer: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ClarityConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(model) = cli.model {
        config.model_path = model;
    }
    if let Some(vectorizer) = cli.vectorizer {
        config.vectorizer_path = vectorizer;
    }

    // Initialize tracing
    let level = if cli.debug || config.is_debug() { Level::DEBUG } else { config.tracing_level() };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting {}", config.assistant_name);

    // Classifier artifacts are required; refuse to serve without them
    let classifier = ArtifactClassifier::load(&config.model_path, &config.vectorizer_path)
        .with_context(|| {
            format!(
                "Critical error: could not load model artifacts ({} / {})",
                config.model_path.display(),
                config.vectorizer_path.display()
            )
        })?;

    // Generation degrades to an error message without a key
    let completion: Option<Arc<dyn TextCompletion>> = match GeminiClient::from_config(&config) {
        Some(client) => {
            info!(
                "Generation enabled: {} (timeout {}s)",
                client.model(),
                config.generation_timeout_secs
            );
            Some(Arc::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not set; responses will report the missing key");
            None
        }
    };

    let classifier: Arc<dyn IntentClassifier> = Arc::new(classifier);
    let generator = ResponseGenerator::new(completion, config.assistant_name.clone());
    let app_state = AppState::new(SupportPipeline::new(classifier, generator));
    let app = app_router(app_state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
