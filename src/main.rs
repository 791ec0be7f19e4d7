//! GhostType CLI entry point

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

use ghost_type::cli::{
    app::{load_merged_config, run_type, TypeOptions, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    list_cmd::{handle_layouts_command, handle_windows_command},
    presenter::Presenter,
};
use ghost_type::domain::config::AppConfig;
use ghost_type::infrastructure::{create_window_directory, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Layouts) => {
            handle_layouts_command(&presenter);
            return ExitCode::SUCCESS;
        }
        Some(Commands::Windows) => {
            let directory = create_window_directory();
            if let Err(e) = handle_windows_command(directory.as_ref(), &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    if cli.text.is_none() && !cli.clipboard && std::io::stdin().is_terminal() {
        presenter.error("No text given. Pass TEXT, '-' to read standard input, or --clipboard");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        layout: cli.layout.clone(),
        delay: cli.delay.clone(),
        focus_delay: cli.focus_delay.clone(),
        countdown: cli.countdown.clone(),
        poll_interval: None, // config file only
        backend: cli.backend.clone(),
    };

    // Merge config
    let config = match load_merged_config(cli_config).await {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let options = match TypeOptions::from_config(&cli, &config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_type(options).await
}
