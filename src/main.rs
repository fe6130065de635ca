use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use eyre::{Result, WrapErr};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use fitness_chat_cli::cli::chat::conversation_state::ConversationState;
use fitness_chat_cli::cli::chat::paths::sanitize_path;
use fitness_chat_cli::cli::chat::ChatContext;
use fitness_chat_cli::config::Config;
use fitness_chat_cli::responder::{MockResponder, ResponseSelector, Selection};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input to send to the assistant
    #[arg(short, long)]
    input: Option<String>,

    /// Simulated reply latency in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Reply immediately
    #[arg(long, global = true)]
    no_delay: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a chat session
    Chat {
        /// Input to send to the assistant
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the reply the assistant would give to a saved conversation
    Replay {
        /// JSON file holding a message list or a saved transcript
        #[arg(short, long)]
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("Failed to set tracing subscriber")?;

    let config = Config::from_env().with_overrides(cli.delay_ms, cli.no_delay);
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Some(Commands::Replay { file }) => replay(&sanitize_path(&file)),
        Some(Commands::Chat { input }) => chat(config, input.or(cli.input)).await,
        None => chat(config, cli.input).await,
    }
}

async fn chat(config: Config, input: Option<String>) -> Result<ExitCode> {
    info!("Starting exercise health assistant");

    let responder = MockResponder::new(config.latency);
    let mut chat_context = ChatContext::new(
        Box::new(io::stdout()),
        input,
        config.prompt,
        Box::new(responder),
    );
    chat_context.run().await
}

fn replay(path: &Path) -> Result<ExitCode> {
    let state = ConversationState::load(path)
        .wrap_err_with(|| format!("Failed to replay {}", path.display()))?;

    let selection = ResponseSelector::new().select_category(state.messages());
    match selection {
        Selection::Greeting => debug!("No user message in {}", path.display()),
        Selection::Matched(category) => debug!("Replay matched {}", category.label()),
    }

    println!("{}", selection.reply());
    Ok(ExitCode::SUCCESS)
}
