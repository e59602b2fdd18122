use clap::{Parser, Subcommand};
use taskdeck_cli::commands::{self, Outcome};
use taskdeck_cli::Command;
use taskdeck_config::{API_KEY_ENV, BASE_URL_ENV};
use taskdeck_infra::ApiSettings;
use tokio::io::BufReader;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = BASE_URL_ENV)]
    base_url: Option<String>,
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Op(Command),
    /// Read commands from stdin, keeping one session for all of them
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut settings = ApiSettings::from_env().with_api_key(cli.api_key);
    if let Some(url) = cli.base_url {
        settings = settings.with_base_url(url);
    }
    let kernel = commands::connect(&settings)?;
    commands::restore_session(&kernel).await;

    let mut stdout = std::io::stdout();
    match cli.command {
        Commands::Op(command) => {
            if commands::execute(&kernel, command, &mut stdout).await? == Outcome::Rejected {
                std::process::exit(1);
            }
        }
        Commands::Shell => {
            let input = BufReader::new(tokio::io::stdin());
            commands::run_shell(&kernel, input, &mut stdout).await?;
        }
    }

    Ok(())
}
