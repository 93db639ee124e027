//! clipsync CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipsync::cli::{
    app::{build_sync_options, handle_parse_error, load_merged_config, usage_text},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    run_sync, EXIT_ERROR, EXIT_USAGE_ERROR,
};
use clipsync::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let presenter = Presenter::new();

    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    let store = XdgConfigStore::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command.take() {
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Wrong argument count is not an error, just the usage text
    let Some(positionals) = cli.positionals() else {
        presenter.output(&usage_text());
        return ExitCode::SUCCESS;
    };

    init_logging();

    let config = load_merged_config(&store, cli.to_config()).await;

    let options = match build_sync_options(positionals, &config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_sync(options).await
}
