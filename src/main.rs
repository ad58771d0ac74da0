//! folio - a slash-command terminal for a personal portfolio.

mod cli;

use std::io::IsTerminal;
use std::sync::Arc;

use cli::Cli;
use folio_terminal::app::{Session, SessionOptions};
use folio_terminal::config::Config;
use folio_terminal::error::{Result, TerminalError};
use folio_terminal::logging;
use folio_terminal::repl::{Repl, ReplConfig, ReplStats};
use folio_terminal::responder::CannedResponder;
use folio_terminal::terminal::{register_builtin_commands, Dispatcher};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // Keep log lines away from the prompt when a person is typing
    if cli.wants_file_logging(std::io::stdin().is_terminal()) {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    match run(&cli).await {
        Ok(stats) if stats.failures > 0 && cli.is_scripted() => std::process::exit(2),
        Ok(_) => {}
        Err(e) => {
            error!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<ReplStats> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let output_format = cli.parse_output_format().map_err(TerminalError::config)?;

    // Registration happens once; afterwards the dispatcher is shared read-only
    let mut dispatcher = Dispatcher::new();
    register_builtin_commands(&mut dispatcher, Arc::new(config.profile.clone()));
    let dispatcher = Arc::new(dispatcher);
    info!(commands = dispatcher.commands().len(), "Commands registered");

    let session = Session::new(
        dispatcher,
        Arc::new(CannedResponder::from_config(&config)),
        SessionOptions::from_config(&config),
    );

    let interactive = cli.is_interactive(std::io::stdin().is_terminal());
    let repl = Repl::new(
        session,
        ReplConfig {
            prompt: if interactive {
                config.terminal.prompt.clone()
            } else {
                String::new()
            },
            output_format,
            parse_only: cli.parse_only,
        },
    );

    let mut stdout = tokio::io::stdout();

    if !cli.exec.is_empty() {
        return repl.run_inputs(&cli.exec, &mut stdout).await;
    }

    if let Some(path) = &cli.script {
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            TerminalError::config(format!("Failed to open script {}: {e}", path.display()))
        })?;
        return repl.run(BufReader::new(file), &mut stdout).await;
    }

    if interactive {
        let greeting = match config.profile.name.as_str() {
            "" => "Welcome.".to_string(),
            name => format!("Welcome to {name}'s terminal."),
        };
        stdout
            .write_all(format!("{greeting} Type /help for commands, /exit to leave.\n").as_bytes())
            .await?;
    }

    repl.run(BufReader::new(tokio::io::stdin()), &mut stdout).await
}
