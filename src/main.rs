use clap::Parser;
use flightrisk::{cli, config, errors, reporting::renderer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.with_ansi(!cli.no_color).init();
    }

    let result = match cli.command {
        cli::Commands::Inspect(args) => cli::inspect::handle_inspect(args).await,
        cli::Commands::Analyze(args) => cli::analyze::handle_analyze(args).await,
        cli::Commands::Compare(args) => cli::compare::handle_compare(args).await,
        cli::Commands::Predict(args) => cli::predict::handle_predict(args).await,
        cli::Commands::Costs(args) => cli::costs::handle_costs(args).await,
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("{}", renderer::render_error(&e.to_string()));
        std::process::exit(e.exit_code());
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::FlightRiskError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("{}", renderer::render_success(&format!("Configuration is valid: {}", args.config)));
    Ok(())
}
