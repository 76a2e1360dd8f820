//! chatmark - chat-driven bookmarks relayed through a server console.
//!
//! Reads server output on stdin, answers `!mark` commands with `/tellraw`
//! commands on stdout.

mod cli;

use anyhow::Context;
use chatmark::config::Config;
use chatmark::host::{console, ChatRelay, MessageSink, OpsFile, PlayerDirectory, TellrawSink};
use chatmark::logging;
use chatmark::service::{HostHandles, MarkService, Startup};
use cli::Cli;
use tokio::io::BufReader;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();
    match cli.log_path() {
        Some(path) => logging::init_file_logging(&path),
        None => logging::init_stderr_logging(),
    }

    if let Err(e) = run(cli).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);

    let Some(service) = start_service(&config)? else {
        return Ok(());
    };

    let mut relay = ChatRelay::new();
    let subscription = relay.subscribe(Box::new(service));

    let mut stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        pumped = console::pump(&mut stdin, &mut relay) => {
            let chat = pumped.context("Failed to read server output")?;
            info!("Server output closed after {chat} chat lines");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
        }
    }

    relay.unsubscribe(subscription);
    Ok(())
}

/// Wires the stdout sink and the ops file into a service.
///
/// Returns `None` when the service cannot run on this server.
fn start_service(config: &Config) -> anyhow::Result<Option<MarkService>> {
    let sink: Box<dyn MessageSink> =
        Box::new(TellrawSink::new(std::io::stdout(), config.rich_messages));

    // A missing ops file only means nobody is an operator yet.
    let ops = OpsFile::new(config.ops_path());
    info!("Operator list at {}", ops.path().display());
    let directory: Box<dyn PlayerDirectory> = Box::new(ops);

    let host = HostHandles {
        sink: Some(sink),
        directory: Some(directory),
    };
    match MarkService::start(config, host)? {
        Startup::Ready(service) => Ok(Some(service)),
        Startup::Unavailable { reason } => {
            warn!("chatmark disabled: {reason}");
            Ok(None)
        }
    }
}
