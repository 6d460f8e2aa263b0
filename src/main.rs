use clap::Parser;

use holdwatch::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute_config(&args.config),
        Commands::Check(CheckCommand::Source(args)) => {
            cli::check::execute_source(&args.config).await
        }
        Commands::Snapshot(args) => cli::snapshot::execute(&args.config),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
