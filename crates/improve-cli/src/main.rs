use clap::{Parser, Subcommand};
use eyre::Result;

use improve_cli::commands;
use improve_cli::config::{self, OutputFormat};
use improve_cli::render::RenderOptions;

#[derive(Parser)]
#[command(name = "improve")]
#[command(about = "IMPROVE risk score for venous thromboembolism", long_about = None)]
struct Cli {
    /// Output format; overrides the config file
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Hide the attribution line and link to the original calculator
    #[arg(long, global = true)]
    no_reference: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the clinical findings and their points
    Catalog,
    /// Score a set of present findings
    Score {
        /// Finding id to mark present (repeatable)
        #[arg(short, long = "present", value_name = "ID")]
        present: Vec<String>,
    },
    /// Toggle findings from the terminal
    Interactive,
    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Init,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never interleave with the rendered view.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = config::load_config()?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_reference {
        config.show_reference = false;
    }
    let options = RenderOptions {
        format: config.format,
        show_reference: config.show_reference,
    };

    let stdout = std::io::stdout();
    match cli.command {
        Commands::Catalog => commands::list_catalog(stdout.lock(), config.format)?,
        Commands::Score { present } => commands::score(stdout.lock(), &present, options)?,
        Commands::Interactive => commands::interactive(options)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_show(stdout.lock(), &config)?,
            ConfigAction::Init => commands::config_init(stdout.lock(), &config)?,
        },
    }

    Ok(())
}
