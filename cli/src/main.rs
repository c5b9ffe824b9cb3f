//! CLI entrypoint for docquery
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use docquery_application::ports::progress::{NoProgress, QueryProgress};
use docquery_application::{
    AskModelUseCase, QueryDocumentInput, QueryDocumentUseCase, ResilientQueryClient,
};
use docquery_domain::{Document, Question};
use docquery_infrastructure::{
    ConfigLoader, DocumentTextExtractor, HfInferenceClient, HtmlReportSink, JsonSink,
};
use docquery_presentation::{
    ApiState, Cli, ConsoleFormatter, PersistFormat, ProgressReporter,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a .env file before reading the token variable
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    let token = std::env::var(&config.api.token_env).ok();
    if token.is_none() {
        warn!(
            "{} is not set; requests will be sent without credentials",
            config.api.token_env
        );
    }

    // === Dependency Injection ===
    let registry = config.registry();
    let http_client = Arc::new(HfInferenceClient::with_base_url(&config.api.base_url, token));
    let client = ResilientQueryClient::new(http_client, config.retry.to_policy());

    // Front-end mode
    if cli.serve {
        let use_case = Arc::new(AskModelUseCase::new(client, registry));
        let app = docquery_presentation::router(ApiState {
            ask_model: use_case,
        });

        let listener = TcpListener::bind(("0.0.0.0", cli.port))
            .await
            .with_context(|| format!("Failed to bind port {}", cli.port))?;
        info!("Serving single-model front end on port {}", cli.port);
        axum::serve(listener, app).await?;
        return Ok(());
    }

    // Batch mode - both paths are enforced by clap when --serve is absent
    let (Some(input_path), Some(output_path)) = (cli.input, cli.output) else {
        bail!("INPUT and OUTPUT are required unless --serve is given");
    };

    let document = Document::from_path(&input_path)?;
    info!("Processing {} document", document.format());

    let use_case = QueryDocumentUseCase::new(Arc::new(DocumentTextExtractor), client, registry);

    let mut input = QueryDocumentInput::new(document);
    if let Some(question) = cli.question.as_deref().and_then(Question::try_new) {
        input = input.with_question(question);
    }

    // Ctrl-C aborts the in-flight model; outcomes recorded so far survive
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, aborting in-flight query");
            signal_token.cancel();
        }
    });

    let progress: Box<dyn QueryProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };
    let results = use_case
        .execute_with_cancellation(input, progress.as_ref(), &token)
        .await;

    match cli.format {
        PersistFormat::Json => JsonSink::write(&results, &output_path)?,
        PersistFormat::Report => HtmlReportSink::write(&results, &output_path)?,
    }

    if !cli.quiet {
        println!("{}", ConsoleFormatter::format(&results));
        println!("Results saved to {}", output_path.display());
    }

    Ok(())
}
