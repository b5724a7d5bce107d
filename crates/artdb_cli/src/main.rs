use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use artdb_core::{ArticleStorage, Error, Result};
use artdb_extract::{create_extractor, Config, RemoteEncoder};
use artdb_ingest::Ingestor;
use artdb_store::MemoryStorage;
use artdb_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model to use for feature extraction. Available models: noop (default), openai
    #[arg(long, default_value = "noop")]
    model: String,
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,
    /// Address of an embedding server, e.g. http://localhost:8000
    #[arg(long)]
    encoder_url: Option<String>,
    /// Name of the embedding model served at encoder-url
    #[arg(long, default_value = "embedder")]
    encoder_model: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP api
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
    /// Ingest a json article from a file and print the enriched result
    Add { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let storage = Arc::new(MemoryStorage::new());
    info!("💾 Storage initialized (memory)");

    let config = Config {
        api_key: cli.api_key.clone(),
        model_name: Some(cli.model.clone()),
    };
    let (summarizer, ner) = create_extractor(Some(config))?;
    info!("🧠 Extractor initialized (using {})", cli.model);

    let mut ingestor = Ingestor::new(summarizer, ner, storage.clone());
    if let Some(url) = cli.encoder_url.as_deref() {
        let encoder = RemoteEncoder::new(url, &cli.encoder_model)?;
        if !encoder.ready().await {
            return Err(Error::Inference(format!("encoder at {url} is not ready")));
        }
        info!("🔢 Encoder initialized (using {url})");
        ingestor = ingestor.with_encoder(Arc::new(encoder));
    }
    let ingestor = Arc::new(ingestor);

    match cli.command {
        Commands::Serve { listen } => {
            let state = AppState {
                ingestor,
                storage: storage.clone(),
            };
            let app = create_app(state).await;

            let listener = tokio::net::TcpListener::bind(&listen).await?;
            info!("🌐 Listening on {listen}");
            axum::serve(listener, app).await?;
        }
        Commands::Add { file } => {
            let raw = tokio::fs::read_to_string(&file).await?;
            let article = serde_json::from_str(&raw)?;

            let id = ingestor.add(article).await?;
            let stored = storage.get(&id).await?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
    }

    Ok(())
}
