use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use reqd::Result;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reqd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Requirements quality service", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize reqd in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on (overrides reqd.toml)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a requirement text for quality problems
    Analyze {
        /// Requirement text
        text: String,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Produce rewritten versions of a requirement text
    Enhance {
        /// Requirement text
        text: String,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reqd=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => reqd::cli::init::run(force),
        Commands::Serve { port } => reqd::cli::serve::run(port).await,
        Commands::Analyze { text, json } => reqd::cli::analyze::analyze(&text, json).await,
        Commands::Enhance { text, json } => reqd::cli::analyze::enhance(&text, json).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
